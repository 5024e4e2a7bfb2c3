//! # sanctuary-entity
//!
//! Domain entity models for Ellie's Sanctuary. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod adoption;
pub mod chat;
pub mod notification;
pub mod puppy;
pub mod push;
pub mod user;
