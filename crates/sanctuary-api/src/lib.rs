//! # sanctuary-api
//!
//! HTTP API layer for Ellie's Sanctuary built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, tracing),
//! extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
