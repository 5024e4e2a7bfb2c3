//! Web push subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A browser push subscription registered by a user.
///
/// The `subscription` document is the opaque JSON produced by the
/// browser's Push API (`endpoint` plus encryption keys). The endpoint is
/// duplicated as a column so stale subscriptions can be pruned by
/// endpoint when the push service reports them gone.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushSubscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Full subscription document from the browser.
    pub subscription: serde_json::Value,
    /// When the subscription was registered.
    pub created_at: DateTime<Utc>,
}
