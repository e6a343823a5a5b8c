//! Realtime notification collaborator.
//!
//! The engine publishes room-scoped events after each committed state
//! change. Delivery is at-least-once at best; consumers must tolerate
//! missed or duplicated events and re-fetch the authoritative snapshot
//! instead of trusting payloads.

mod broker;

use serde::{Deserialize, Serialize};

use crate::domain::state::RoundPhase;

pub use broker::ChannelBroker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    GameStarted {
        room_code: String,
    },
    PlayersChanged {
        room_code: String,
        players: usize,
    },
    StateChanged {
        room_code: String,
        round_no: u8,
        phase: RoundPhase,
    },
}

/// Narrow publish interface the coordinator depends on.
///
/// `publish` must not block: it runs after the room's state mutation has
/// committed, and a slow or absent consumer must never hold up the next
/// action on the room.
pub trait RoomNotifier: Send + Sync {
    fn publish(&self, room_code: &str, event: EventEnvelope);
}

/// Discards every event. Used in tests and headless simulations.
pub struct NoopNotifier;

impl RoomNotifier for NoopNotifier {
    fn publish(&self, _room_code: &str, _event: EventEnvelope) {}
}
