//! Room registry: code allocation, lookup, and per-room critical sections.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use tracing::info;

use crate::domain::state::{PlayerId, RoomState};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::utils::room_code::{canonicalize, generate_room_code};

/// One live room. The mutex is the room's serialization boundary: every
/// state-mutating action locks it, so at most one action per room runs at
/// a time, and no action performs I/O while holding it.
pub struct RoomHandle {
    code: String,
    pub state: Mutex<RoomState>,
}

impl RoomHandle {
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// All rooms in the process. Rooms are independent: actions on different
/// rooms never contend.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<RoomHandle>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room owned by `owner` under a fresh code.
    pub fn create_room(&self, owner: PlayerId) -> Arc<RoomHandle> {
        loop {
            let code = generate_room_code();
            let entry = self.rooms.entry(code.clone());
            if let dashmap::Entry::Vacant(vacant) = entry {
                let seed = rand::rng().random();
                let handle = Arc::new(RoomHandle {
                    code: code.clone(),
                    state: Mutex::new(RoomState::new(owner, seed)),
                });
                vacant.insert(handle.clone());
                info!(room_code = %code, "room created");
                return handle;
            }
            // Code collision: draw again.
        }
    }

    /// Look up a room by its (case-insensitive) code.
    pub fn get(&self, code: &str) -> Result<Arc<RoomHandle>, DomainError> {
        let canonical = canonicalize(code);
        self.rooms
            .get(&canonical)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Room, format!("no room with code {canonical}"))
            })
    }

    /// Drop a room once its last player has left. Returns whether the room
    /// was removed.
    pub fn remove_if_empty(&self, code: &str) -> bool {
        let canonical = canonicalize(code);
        let removed = self
            .rooms
            .remove_if(&canonical, |_, handle| handle.state.lock().seats.is_empty())
            .is_some();
        if removed {
            info!(room_code = %canonical, "empty room removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
