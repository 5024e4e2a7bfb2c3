//! Puppy entity and status enumeration.

pub mod model;
pub mod status;

pub use model::{CreatePuppy, Puppy, UpdatePuppy};
pub use status::PuppyStatus;
