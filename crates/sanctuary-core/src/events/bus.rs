//! In-process broadcast bus for domain events.

use tokio::sync::broadcast;

use super::DomainEvent;

/// Default channel capacity before lagging subscribers drop events.
const DEFAULT_CAPACITY: usize = 256;

/// Broadcast channel that fans domain events out to all subscribers.
///
/// Publishing never blocks and never fails the publishing operation:
/// an event with no live subscribers is simply dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a new event bus with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new event bus with an explicit channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.sender.send(event) {
            tracing::trace!("Event dropped, no subscribers: {e}");
        }
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::events::{AdoptionEvent, EventPayload};

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        let request_id = Uuid::new_v4();
        bus.publish(DomainEvent::new(
            None,
            EventPayload::Adoption(AdoptionEvent::RequestDeleted { request_id }),
        ));

        let event = rx.recv().await.expect("Expected an event");
        match event.payload {
            EventPayload::Adoption(AdoptionEvent::RequestDeleted { request_id: id }) => {
                assert_eq!(id, request_id);
            }
            other => panic!("Unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.publish(DomainEvent::new(
            None,
            EventPayload::Adoption(AdoptionEvent::RequestDeleted {
                request_id: Uuid::new_v4(),
            }),
        ));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
