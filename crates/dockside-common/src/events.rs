use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{Edge, Rect};

/// Observable placement transitions, published by the companion controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    CompanionShown,
    CompanionHidden,
    CompanionPlaced(Rect),
    TrackedWindowChanged(Option<u64>),
    TrackedWindowShrunk { edge: Edge, amount: f64 },
    TrackedWindowRestored(Rect),
    TrackedAppTerminated,
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
