//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use sanctuary_core::config::worker::WorkerConfig;
use sanctuary_core::error::AppError;
use sanctuary_core::result::AppResult;
use sanctuary_database::repositories::notification::NotificationRepository;

/// Cron-based scheduler for periodic maintenance tasks.
pub struct MaintenanceScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Maintenance configuration.
    config: WorkerConfig,
    /// Notification repository for backlog pruning.
    notif_repo: Arc<NotificationRepository>,
}

impl std::fmt::Debug for MaintenanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceScheduler")
            .field("config", &self.config)
            .finish()
    }
}

impl MaintenanceScheduler {
    /// Create a new maintenance scheduler.
    pub async fn new(
        config: WorkerConfig,
        notif_repo: Arc<NotificationRepository>,
    ) -> AppResult<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self {
            scheduler,
            config,
            notif_repo,
        })
    }

    /// Register all default scheduled tasks.
    pub async fn register_default_tasks(&self) -> AppResult<()> {
        self.register_notification_cleanup().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> AppResult<()> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Maintenance scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> AppResult<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Maintenance scheduler shut down");
        Ok(())
    }

    /// Notification cleanup on the configured schedule (default daily at
    /// 2 AM): deletes old read notifications and caps each user's backlog.
    async fn register_notification_cleanup(&self) -> AppResult<()> {
        let notif_repo = Arc::clone(&self.notif_repo);
        let retention_days = self.config.notification_retention_days;
        let max_per_user = self.config.max_notifications_per_user;

        let job = CronJob::new_async(
            self.config.notification_cleanup_schedule.as_str(),
            move |_uuid, _lock| {
                let notif_repo = Arc::clone(&notif_repo);
                Box::pin(async move {
                    tracing::debug!("Running notification cleanup");

                    let cutoff = Utc::now() - Duration::days(retention_days);
                    match notif_repo.cleanup_old_read(cutoff).await {
                        Ok(removed) => {
                            tracing::info!(removed, "Old read notifications removed");
                        }
                        Err(e) => tracing::error!("Notification cleanup failed: {}", e),
                    }

                    match notif_repo.trim_per_user(max_per_user).await {
                        Ok(trimmed) => {
                            tracing::info!(trimmed, "Per-user notification backlog trimmed");
                        }
                        Err(e) => tracing::error!("Notification trim failed: {}", e),
                    }
                })
            },
        )
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create notification_cleanup schedule: {}",
                e
            ))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add notification_cleanup schedule: {}", e))
        })?;

        tracing::info!(
            schedule = %self.config.notification_cleanup_schedule,
            "Registered: notification_cleanup"
        );
        Ok(())
    }
}
