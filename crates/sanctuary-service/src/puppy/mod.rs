//! Puppy catalog services.

pub mod service;

pub use service::PuppyService;
