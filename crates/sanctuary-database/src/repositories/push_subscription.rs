//! Push subscription repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sanctuary_core::error::{AppError, ErrorKind};
use sanctuary_core::result::AppResult;
use sanctuary_entity::push::subscription::PushSubscription;

/// Repository for web push subscription operations.
#[derive(Debug, Clone)]
pub struct PushSubscriptionRepository {
    pool: PgPool,
}

impl PushSubscriptionRepository {
    /// Create a new push subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a subscription, replacing the document for a known
    /// `(user, endpoint)` pair.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        endpoint: &str,
        subscription: &serde_json::Value,
    ) -> AppResult<PushSubscription> {
        sqlx::query_as::<_, PushSubscription>(
            "INSERT INTO push_subscriptions (user_id, endpoint, subscription) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, endpoint) DO UPDATE SET subscription = $3 \
             RETURNING *",
        )
        .bind(user_id)
        .bind(endpoint)
        .bind(subscription)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert subscription", e))
    }

    /// List subscriptions registered by a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<PushSubscription>> {
        sqlx::query_as::<_, PushSubscription>(
            "SELECT * FROM push_subscriptions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subscriptions", e))
    }

    /// List subscriptions registered by any of the given users.
    pub async fn find_by_users(&self, user_ids: &[Uuid]) -> AppResult<Vec<PushSubscription>> {
        sqlx::query_as::<_, PushSubscription>(
            "SELECT * FROM push_subscriptions WHERE user_id = ANY($1)",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subscriptions", e))
    }

    /// Remove a user's subscription by endpoint (explicit unsubscribe).
    pub async fn delete(&self, user_id: Uuid, endpoint: &str) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM push_subscriptions WHERE user_id = $1 AND endpoint = $2")
                .bind(user_id)
                .bind(endpoint)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete subscription", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Remove a stale subscription reported gone by the push service.
    pub async fn delete_by_endpoint(&self, endpoint: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
            .bind(endpoint)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to prune subscription", e)
            })?;
        Ok(result.rows_affected())
    }
}
