//! Puppy entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PuppyStatus;

/// A puppy listed in the sanctuary catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Puppy {
    /// Unique puppy identifier.
    pub id: Uuid,
    /// The puppy's name.
    pub name: String,
    /// Age description (e.g. "12 weeks").
    pub age: String,
    /// Gender.
    pub gender: String,
    /// Full adoption fee in whole dollars.
    pub adoption_fee: i64,
    /// Refundable deposit in whole dollars. Snapshotted onto each
    /// adoption request at submission.
    pub deposit_amount: i64,
    /// Free-form description.
    pub description: Option<String>,
    /// Gallery image URLs.
    pub image_urls: Vec<String>,
    /// Availability status.
    pub status: PuppyStatus,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new puppy listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePuppy {
    /// The puppy's name.
    pub name: String,
    /// Age description.
    pub age: String,
    /// Gender.
    pub gender: String,
    /// Full adoption fee in whole dollars.
    pub adoption_fee: i64,
    /// Refundable deposit in whole dollars.
    pub deposit_amount: i64,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Gallery image URLs.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Partial update for an existing puppy listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePuppy {
    /// New name.
    pub name: Option<String>,
    /// New age description.
    pub age: Option<String>,
    /// New gender.
    pub gender: Option<String>,
    /// New adoption fee.
    pub adoption_fee: Option<i64>,
    /// New deposit amount. Does not affect existing requests.
    pub deposit_amount: Option<i64>,
    /// New description.
    pub description: Option<String>,
    /// New image URLs.
    pub image_urls: Option<Vec<String>>,
    /// New status.
    pub status: Option<PuppyStatus>,
}
