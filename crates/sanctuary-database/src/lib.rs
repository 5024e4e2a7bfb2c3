//! # sanctuary-database
//!
//! PostgreSQL persistence layer for Ellie's Sanctuary: connection pool
//! management, embedded migrations, and one repository per aggregate.
//!
//! Repositories hold a cloned `PgPool` and expose async CRUD methods that
//! map sqlx errors into [`sanctuary_core::AppError`].

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
