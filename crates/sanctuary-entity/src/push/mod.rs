//! Web push subscription entity.

pub mod subscription;

pub use subscription::PushSubscription;
