//! Chat conversation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A support conversation between a user and the sanctuary staff.
///
/// Each user has at most one conversation; it is created on first use.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    /// Unique conversation identifier.
    pub id: Uuid,
    /// The user this conversation belongs to.
    pub user_id: Uuid,
    /// Text of the most recent message.
    pub last_message: Option<String>,
    /// When the most recent message was sent.
    pub last_message_at: Option<DateTime<Utc>>,
    /// When the conversation was created.
    pub created_at: DateTime<Utc>,
}
