//! In-app notification management.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use sanctuary_core::error::AppError;
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_database::repositories::notification::NotificationRepository;
use sanctuary_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages in-app notifications.
///
/// Notifications are created only by other services as lifecycle side
/// effects; clients can list and acknowledge them, never create them.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications for the current user, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notif_repo.find_by_user(ctx.user_id, &page).await
    }

    /// Gets the unread notification count for the current user.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        let rows = self.notif_repo.mark_read(notification_id, ctx.user_id).await?;
        if rows == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks all of the current user's notifications as read.
    ///
    /// Returns how many were updated.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Enqueues an in-app notification for a user.
    ///
    /// `resource_type`/`resource_id` loosely reference the originating
    /// record; deleting that record leaves the notification intact.
    pub async fn enqueue_in_app(
        &self,
        user_id: Uuid,
        message: &str,
        resource_type: Option<&str>,
        resource_id: Option<Uuid>,
    ) -> AppResult<Notification> {
        let notification = self
            .notif_repo
            .create(user_id, message, resource_type, resource_id)
            .await?;

        debug!(
            notification_id = %notification.id,
            user_id = %user_id,
            "Notification enqueued"
        );

        Ok(notification)
    }
}
