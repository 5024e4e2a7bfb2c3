//! User profile management.
//!
//! Profiles mirror the external identity provider: they are synced from
//! verified token claims, never created through registration. Role is
//! application state and survives profile syncs.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sanctuary_core::error::AppError;
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_database::repositories::user::UserRepository;
use sanctuary_entity::user::{UpsertUser, User, UserRole};

use crate::context::RequestContext;

/// Manages user profiles and admin role assignment.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User profile not found"))
    }

    /// Syncs the current user's profile from their verified token claims.
    ///
    /// Upserts by provider subject. A first sync creates the profile with
    /// the `user` role; later syncs refresh email and display name but
    /// never touch the role.
    pub async fn sync_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        let user = self
            .user_repo
            .upsert(&UpsertUser {
                id: ctx.user_id,
                email: ctx.email.clone(),
                display_name: ctx.display_name.clone(),
            })
            .await?;

        info!(user_id = %user.id, "User profile synced");

        Ok(user)
    }

    /// Lists all users with pagination. Admin only.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<User>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        self.user_repo.find_all(&page).await
    }

    /// Changes a user's role. Admin only; admins cannot change their own.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        new_role: UserRole,
    ) -> AppResult<User> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }
        if user_id == ctx.user_id {
            return Err(AppError::authorization("Cannot change your own role"));
        }

        let user = self
            .user_repo
            .update_role(user_id, new_role)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(
            admin_id = %ctx.user_id,
            target_id = %user_id,
            new_role = %user.role,
            "User role changed"
        );

        Ok(user)
    }
}
