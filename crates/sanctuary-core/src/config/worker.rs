//! Background maintenance configuration.

use serde::{Deserialize, Serialize};

/// Scheduled maintenance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the maintenance scheduler is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the notification cleanup task.
    #[serde(default = "default_cleanup_schedule")]
    pub notification_cleanup_schedule: String,
    /// Read notifications older than this many days are deleted.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
    /// Maximum notifications retained per user.
    #[serde(default = "default_max_per_user")]
    pub max_notifications_per_user: i64,
}

fn default_true() -> bool {
    true
}

fn default_cleanup_schedule() -> String {
    // Every day at 02:00.
    "0 0 2 * * *".to_string()
}

fn default_retention_days() -> i64 {
    30
}

fn default_max_per_user() -> i64 {
    200
}
