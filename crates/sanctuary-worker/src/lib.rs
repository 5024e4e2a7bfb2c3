//! # sanctuary-worker
//!
//! Scheduled background maintenance for Ellie's Sanctuary. Currently a
//! single cron-driven task that prunes the notification backlog.

pub mod scheduler;

pub use scheduler::MaintenanceScheduler;
