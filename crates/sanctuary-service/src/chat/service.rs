//! Support chat between applicants and the sanctuary team.
//!
//! Every user has at most one conversation, created on first use. Admins
//! can read and reply in any conversation.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use sanctuary_core::error::AppError;
use sanctuary_core::events::{ChatEvent, DomainEvent, EventBus, EventPayload};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_database::repositories::conversation::ConversationRepository;
use sanctuary_database::repositories::message::MessageRepository;
use sanctuary_entity::chat::{ChatMessage, Conversation};

use crate::context::RequestContext;

/// Longest accepted chat message, in characters.
const MAX_MESSAGE_LENGTH: usize = 4000;

/// Manages support conversations and messages.
#[derive(Debug, Clone)]
pub struct ChatService {
    /// Conversation repository.
    conversation_repo: Arc<ConversationRepository>,
    /// Message repository.
    message_repo: Arc<MessageRepository>,
    /// Domain event bus.
    events: EventBus,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(
        conversation_repo: Arc<ConversationRepository>,
        message_repo: Arc<MessageRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            conversation_repo,
            message_repo,
            events,
        }
    }

    /// Opens the current user's conversation, creating it on first use.
    pub async fn open_conversation(&self, ctx: &RequestContext) -> AppResult<Conversation> {
        let conversation = self
            .conversation_repo
            .find_or_create_for_user(ctx.user_id)
            .await?;

        debug!(conversation_id = %conversation.id, user_id = %ctx.user_id, "Conversation opened");

        Ok(conversation)
    }

    /// Lists all conversations, most recently active first. Admin only.
    pub async fn list_conversations(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Conversation>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        self.conversation_repo.find_all(&page).await
    }

    /// Sends a message in a conversation.
    ///
    /// The sender must own the conversation or be an admin.
    pub async fn send_message(
        &self,
        ctx: &RequestContext,
        conversation_id: Uuid,
        text: &str,
    ) -> AppResult<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Message text cannot be empty"));
        }
        if text.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::validation(format!(
                "Message text cannot exceed {MAX_MESSAGE_LENGTH} characters"
            )));
        }

        let conversation = self.authorize(ctx, conversation_id).await?;

        let message = self
            .message_repo
            .create(conversation.id, ctx.user_id, text)
            .await?;

        if let Err(e) = self
            .conversation_repo
            .touch_last_message(conversation.id, text)
            .await
        {
            warn!(error = %e, conversation_id = %conversation.id, "Failed to update conversation preview");
        }

        self.events.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Chat(ChatEvent::MessageSent {
                conversation_id: conversation.id,
                message_id: message.id,
                sender_id: ctx.user_id,
            }),
        ));

        Ok(message)
    }

    /// Lists messages in a conversation, oldest first.
    ///
    /// The reader must own the conversation or be an admin.
    pub async fn list_messages(
        &self,
        ctx: &RequestContext,
        conversation_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<ChatMessage>> {
        let conversation = self.authorize(ctx, conversation_id).await?;

        self.message_repo
            .find_by_conversation(conversation.id, &page)
            .await
    }

    async fn authorize(
        &self,
        ctx: &RequestContext,
        conversation_id: Uuid,
    ) -> AppResult<Conversation> {
        let conversation = self
            .conversation_repo
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| AppError::not_found("Conversation not found"))?;

        if conversation.user_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::authorization(
                "You can only access your own conversation",
            ));
        }

        Ok(conversation)
    }
}
