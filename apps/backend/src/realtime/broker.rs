use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use super::{EventEnvelope, RoomNotifier};

/// In-process broker: one broadcast channel per room topic.
///
/// Lagging receivers drop the oldest events; that is acceptable because
/// events only signal "state changed" and consumers re-fetch snapshots.
pub struct ChannelBroker {
    topics: DashMap<String, broadcast::Sender<EventEnvelope>>,
    capacity: usize,
}

impl ChannelBroker {
    pub fn new(capacity: usize) -> Self {
        Self {
            topics: DashMap::new(),
            capacity,
        }
    }

    /// Subscribe to a room's events, creating the topic if needed.
    pub fn subscribe(&self, room_code: &str) -> broadcast::Receiver<EventEnvelope> {
        self.sender(room_code).subscribe()
    }

    /// Drop a room's topic once the room itself is gone.
    pub fn remove_topic(&self, room_code: &str) {
        self.topics.remove(room_code);
    }

    fn sender(&self, room_code: &str) -> broadcast::Sender<EventEnvelope> {
        self.topics
            .entry(room_code.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

impl RoomNotifier for ChannelBroker {
    fn publish(&self, room_code: &str, event: EventEnvelope) {
        // Fire-and-forget: a send error only means nobody is listening.
        let receivers = self.sender(room_code).send(event).unwrap_or(0);
        debug!(room_code, receivers, "published room event");
    }
}
