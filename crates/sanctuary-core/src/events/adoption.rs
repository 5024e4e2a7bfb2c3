//! Adoption-request domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to the adoption request lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AdoptionEvent {
    /// A new adoption request was submitted.
    RequestCreated {
        /// The request ID.
        request_id: Uuid,
        /// The puppy applied for.
        puppy_id: Uuid,
        /// The applicant.
        applicant_id: Uuid,
        /// The deposit snapshot taken at submission, in whole dollars.
        deposit_amount: i64,
    },
    /// A pending request reached a terminal status.
    RequestTransitioned {
        /// The request ID.
        request_id: Uuid,
        /// The puppy applied for.
        puppy_id: Uuid,
        /// The applicant.
        applicant_id: Uuid,
        /// The status before the transition.
        from: String,
        /// The status after the transition.
        to: String,
    },
    /// A request was deleted by an administrator.
    RequestDeleted {
        /// The request ID.
        request_id: Uuid,
    },
}
