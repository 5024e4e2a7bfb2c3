//! Repository implementations, one per aggregate.

pub mod adoption;
pub mod conversation;
pub mod message;
pub mod notification;
pub mod puppy;
pub mod push_subscription;
pub mod user;
