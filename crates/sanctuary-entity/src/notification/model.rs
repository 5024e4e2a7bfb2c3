//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An in-app notification delivered to a user.
///
/// Created only as a side effect of application operations, never directly
/// by clients. The resource reference is informational; there is no
/// foreign key, so deleting the referenced record leaves the notification
/// in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification body text.
    pub message: String,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// Resource type involved (if applicable).
    pub resource_type: Option<String>,
    /// Resource ID involved (if applicable).
    pub resource_id: Option<Uuid>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
