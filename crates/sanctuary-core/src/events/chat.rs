//! Chat domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to chat conversations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChatEvent {
    /// A message was sent in a conversation.
    MessageSent {
        /// The conversation ID.
        conversation_id: Uuid,
        /// The message ID.
        message_id: Uuid,
        /// The sender.
        sender_id: Uuid,
    },
}
