//! Notification delivery: in-app messages, transactional email, web push.

pub mod email;
pub mod push;
pub mod service;

pub use email::EmailDispatcher;
pub use push::PushDispatcher;
pub use service::NotificationService;
