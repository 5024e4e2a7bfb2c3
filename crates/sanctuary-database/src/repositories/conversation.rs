//! Conversation repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sanctuary_core::error::{AppError, ErrorKind};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_entity::chat::conversation::Conversation;

/// Repository for chat conversation operations.
#[derive(Debug, Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    /// Create a new conversation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the user's conversation, creating it on first use.
    ///
    /// The no-op `DO UPDATE` makes the statement return the existing row
    /// instead of zero rows on conflict.
    pub async fn find_or_create_for_user(&self, user_id: Uuid) -> AppResult<Conversation> {
        sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to open conversation", e))
    }

    /// Find a conversation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Conversation>> {
        sqlx::query_as::<_, Conversation>("SELECT * FROM conversations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find conversation", e)
            })
    }

    /// List all conversations, most recently active first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Conversation>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count conversations", e)
            })?;

        let conversations = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations \
             ORDER BY last_message_at DESC NULLS LAST, created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list conversations", e)
        })?;

        Ok(PageResponse::new(
            conversations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Record the most recent message on the conversation.
    pub async fn touch_last_message(&self, id: Uuid, text: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE conversations SET last_message = $2, last_message_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(text)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch conversation", e))?;
        Ok(())
    }
}
