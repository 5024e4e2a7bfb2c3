//! Domain events emitted by Sanctuary operations.
//!
//! Events are published on the in-process [`bus::EventBus`] and consumed by
//! subscribers such as the realtime channel bridge and the startup log
//! subscriber. Frontend transport is external to this application; the bus
//! is the seam it attaches to.

pub mod adoption;
pub mod bus;
pub mod chat;
pub mod puppy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use adoption::AdoptionEvent;
pub use bus::EventBus;
pub use chat::ChatEvent;
pub use puppy::PuppyEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An adoption-request event.
    Adoption(AdoptionEvent),
    /// A puppy catalog event.
    Puppy(PuppyEvent),
    /// A chat event.
    Chat(ChatEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}
