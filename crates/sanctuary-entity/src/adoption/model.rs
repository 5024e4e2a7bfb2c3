//! Adoption request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::application::ApplicationData;
use super::status::RequestStatus;

/// An adoption request submitted by an applicant for a puppy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdoptionRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The puppy applied for.
    pub puppy_id: Uuid,
    /// The applicant who submitted the request.
    pub applicant_id: Uuid,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// The questionnaire submitted with the request.
    pub application_data: Json<ApplicationData>,
    /// Deposit snapshot taken from the puppy at submission, in whole
    /// dollars. Never changes after creation.
    pub deposit_amount: i64,
    /// When the request was submitted. Immutable.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AdoptionRequest {
    /// Check if the request is in a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Data required to create a new adoption request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdoptionRequest {
    /// The puppy applied for.
    pub puppy_id: Uuid,
    /// The applicant.
    pub applicant_id: Uuid,
    /// The completed questionnaire.
    pub application_data: ApplicationData,
    /// Deposit snapshot in whole dollars.
    pub deposit_amount: i64,
}
