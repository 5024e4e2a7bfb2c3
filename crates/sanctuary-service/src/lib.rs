//! # sanctuary-service
//!
//! Business logic service layer for Ellie's Sanctuary. Each service
//! orchestrates repositories, outbound dispatchers, and the event bus to
//! implement application-level use cases. The centerpiece is
//! [`AdoptionService`], which owns the adoption request lifecycle.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod adoption;
pub mod chat;
pub mod context;
pub mod notification;
pub mod puppy;
pub mod user;

pub use adoption::AdoptionService;
pub use chat::ChatService;
pub use context::RequestContext;
pub use notification::{EmailDispatcher, NotificationService, PushDispatcher};
pub use puppy::PuppyService;
pub use user::UserService;
