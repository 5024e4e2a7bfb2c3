//! # sanctuary-core
//!
//! Core crate for Ellie's Sanctuary. Contains configuration schemas,
//! domain events and the in-process event bus, pagination types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Sanctuary crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
