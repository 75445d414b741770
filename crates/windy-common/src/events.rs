//! Fire-and-forget side channel for pane-local actions.
//!
//! A button inside a pane can raise a named event with an arbitrary JSON
//! payload. Interested code subscribes to the bus; nothing here touches
//! layout state.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneEvent {
    pub name: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl PaneEvent {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<PaneEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PaneEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of receivers the event reached.
    pub fn publish(&self, event: PaneEvent) -> usize {
        match self.sender.send(event) {
            Ok(count) => count,
            Err(broadcast::error::SendError(event)) => {
                trace!(event = %event.name, "no receivers for pane event");
                0
            }
        }
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(PaneEvent::new("action_clicked", json!({ "windowId": "node-1" })));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, "action_clicked");
        assert_eq!(event.payload["windowId"], "node-1");
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(PaneEvent::new("ping", serde_json::Value::Null));

        assert_eq!(rx1.recv().await.unwrap().name, "ping");
        assert_eq!(rx2.recv().await.unwrap().name, "ping");
    }

    #[test]
    fn try_recv_without_runtime() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(PaneEvent::new("sync", json!(1)));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.payload, json!(1));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(PaneEvent::new("lost", json!(null))), 0);
    }

    #[test]
    fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 2);
        assert_eq!(bus.publish(PaneEvent::new("count", json!(null))), 2);
    }

    #[test]
    fn zero_capacity_is_bumped() {
        let bus = EventBus::new(0);
        let mut rx = bus.subscribe();
        bus.publish(PaneEvent::new("one", json!(null)));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn missing_payload_deserializes_as_null() {
        let event: PaneEvent = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert_eq!(event.name, "bare");
        assert!(event.payload.is_null());
    }
}
