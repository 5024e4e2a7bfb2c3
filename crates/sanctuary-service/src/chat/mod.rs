//! Support chat services.

pub mod service;

pub use service::ChatService;
