//! HTTP request handlers, organized by domain.

pub mod admin;
pub mod adoption;
pub mod chat;
pub mod contact;
pub mod health;
pub mod notification;
pub mod puppy;
pub mod push;
pub mod user;
