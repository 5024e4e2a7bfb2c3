//! Puppy catalog management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sanctuary_core::error::AppError;
use sanctuary_core::events::{DomainEvent, EventBus, EventPayload, PuppyEvent};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_database::repositories::puppy::PuppyRepository;
use sanctuary_entity::puppy::{CreatePuppy, Puppy, PuppyStatus, UpdatePuppy};

use crate::context::RequestContext;

/// Manages the puppy catalog: public browsing and admin CRUD.
#[derive(Debug, Clone)]
pub struct PuppyService {
    /// Puppy repository.
    puppy_repo: Arc<PuppyRepository>,
    /// Domain event bus.
    events: EventBus,
}

impl PuppyService {
    /// Creates a new puppy service.
    pub fn new(puppy_repo: Arc<PuppyRepository>, events: EventBus) -> Self {
        Self { puppy_repo, events }
    }

    /// Lists puppies, optionally filtered by status. Public.
    pub async fn list(
        &self,
        page: PageRequest,
        status: Option<PuppyStatus>,
    ) -> AppResult<PageResponse<Puppy>> {
        self.puppy_repo.find_all(&page, status).await
    }

    /// Gets a puppy by ID. Public.
    pub async fn get(&self, puppy_id: Uuid) -> AppResult<Puppy> {
        self.puppy_repo
            .find_by_id(puppy_id)
            .await?
            .ok_or_else(|| AppError::not_found("Puppy not found"))
    }

    /// Adds a puppy to the catalog. Admin only.
    pub async fn create(&self, ctx: &RequestContext, new: CreatePuppy) -> AppResult<Puppy> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        if new.name.trim().is_empty() {
            return Err(AppError::validation("Puppy name cannot be empty"));
        }

        let puppy = self.puppy_repo.create(&new).await?;

        info!(puppy_id = %puppy.id, name = %puppy.name, admin_id = %ctx.user_id, "Puppy created");

        self.events.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Puppy(PuppyEvent::Created {
                puppy_id: puppy.id,
                name: puppy.name.clone(),
            }),
        ));

        Ok(puppy)
    }

    /// Updates a puppy's details. Admin only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        puppy_id: Uuid,
        update: UpdatePuppy,
    ) -> AppResult<Puppy> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        let status_changed = update.status.is_some();

        let puppy = self
            .puppy_repo
            .update(puppy_id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Puppy not found"))?;

        info!(puppy_id = %puppy.id, admin_id = %ctx.user_id, "Puppy updated");

        let event = if status_changed {
            PuppyEvent::StatusChanged {
                puppy_id: puppy.id,
                status: puppy.status.to_string(),
            }
        } else {
            PuppyEvent::Updated { puppy_id: puppy.id }
        };
        self.events
            .publish(DomainEvent::new(Some(ctx.user_id), EventPayload::Puppy(event)));

        Ok(puppy)
    }

    /// Removes a puppy from the catalog. Admin only.
    ///
    /// Adoption requests for the puppy are removed by the database
    /// cascade; notifications referencing them remain.
    pub async fn delete(&self, ctx: &RequestContext, puppy_id: Uuid) -> AppResult<()> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        let rows = self.puppy_repo.delete(puppy_id).await?;
        if rows == 0 {
            return Err(AppError::not_found("Puppy not found"));
        }

        info!(puppy_id = %puppy_id, admin_id = %ctx.user_id, "Puppy deleted");

        self.events.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Puppy(PuppyEvent::Deleted { puppy_id }),
        ));

        Ok(())
    }
}
