//! Puppy catalog domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to the puppy catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PuppyEvent {
    /// A puppy was added to the catalog.
    Created {
        /// The puppy ID.
        puppy_id: Uuid,
        /// The puppy name.
        name: String,
    },
    /// A puppy's details were updated.
    Updated {
        /// The puppy ID.
        puppy_id: Uuid,
    },
    /// A puppy's status changed.
    StatusChanged {
        /// The puppy ID.
        puppy_id: Uuid,
        /// The new status.
        status: String,
    },
    /// A puppy was removed from the catalog.
    Deleted {
        /// The puppy ID.
        puppy_id: Uuid,
    },
}
