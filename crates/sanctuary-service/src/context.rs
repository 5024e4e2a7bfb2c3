//! Request context carrying the authenticated user and their role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sanctuary_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from verified token claims by the API layer and passed into
/// service methods so that every operation knows *who* is acting and with
/// *which* role. The role travels with the request, never as ambient
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID (the identity provider's subject).
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// The user's email address.
    pub email: String,
    /// Display name, if the provider has one.
    pub display_name: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, email: String, display_name: Option<String>) -> Self {
        Self {
            user_id,
            role,
            email,
            display_name,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
