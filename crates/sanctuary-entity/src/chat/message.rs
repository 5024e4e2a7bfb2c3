//! Chat message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// The conversation this message belongs to.
    pub conversation_id: Uuid,
    /// The user who sent the message.
    pub sender_id: Uuid,
    /// Message text.
    pub text: String,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
}
