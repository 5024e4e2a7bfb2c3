//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sanctuary_entity::adoption::ApplicationData;
use sanctuary_entity::user::UserRole;

/// Submit an adoption request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAdoptionRequest {
    /// The puppy being applied for.
    pub puppy_id: Uuid,
    /// Completed application questionnaire.
    pub application: ApplicationData,
}

/// Decide a pending adoption request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionStatusRequest {
    /// Target status: "approved" or "rejected".
    pub status: String,
}

/// Send a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Message text.
    pub text: String,
}

/// Contact form submission (public).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    /// Sender name.
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    /// Sender email, used as the reply-to address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Subject line.
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

/// Register a browser push subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscribeRequest {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Full subscription document as produced by the browser,
    /// including the `keys` material.
    pub subscription: serde_json::Value,
}

/// Remove a browser push subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushUnsubscribeRequest {
    /// Push service endpoint URL.
    pub endpoint: String,
}

/// Change a user's role (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// New role.
    pub role: UserRole,
}
