//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A user profile mirrored from the external identity provider.
///
/// The `id` is the provider's subject; credentials never touch this
/// application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Identity provider subject.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Application role.
    pub role: UserRole,
    /// When the profile was first synced.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Profile data synced from verified token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    /// Identity provider subject.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name (optional).
    pub display_name: Option<String>,
}
