//! Room coordinator: the action surface of the engine.
//!
//! Each action looks the room up, takes its critical section, applies the
//! session state machine, builds the acting player's snapshot while still
//! holding the lock (read-your-writes), then drops the lock and publishes
//! a notification. On failure the typed error is returned and no state is
//! mutated.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::cards::Card;
use crate::domain::player_view::{snapshot_for, RoomSnapshot};
use crate::domain::session;
use crate::domain::state::PlayerId;
use crate::error::AppError;
use crate::realtime::{EventEnvelope, RoomNotifier};
use crate::services::rooms::RoomRegistry;

pub struct GameFlowService {
    registry: Arc<RoomRegistry>,
    notifier: Arc<dyn RoomNotifier>,
}

impl GameFlowService {
    pub fn new(registry: Arc<RoomRegistry>, notifier: Arc<dyn RoomNotifier>) -> Self {
        Self { registry, notifier }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Create a room owned by `player` and seat them.
    pub fn create_room(&self, player: PlayerId) -> Result<RoomSnapshot, AppError> {
        let handle = self.registry.create_room(player);
        let state = handle.state.lock();
        Ok(snapshot_for(&state, handle.code(), player)?)
    }

    /// Join a room, idempotently for existing members.
    pub fn join(&self, code: &str, player: PlayerId) -> Result<RoomSnapshot, AppError> {
        let handle = self.registry.get(code)?;
        let (snapshot, players) = {
            let mut state = handle.state.lock();
            let seat = session::join(&mut state, player)?;
            debug!(room_code = %handle.code(), seat, "player joined");
            (snapshot_for(&state, handle.code(), player)?, state.player_count())
        };
        self.notifier.publish(
            handle.code(),
            EventEnvelope::PlayersChanged {
                room_code: handle.code().to_string(),
                players,
            },
        );
        Ok(snapshot)
    }

    /// Leave a room; only legal before the game starts. Empty rooms are
    /// removed from the registry.
    pub fn leave(&self, code: &str, player: PlayerId) -> Result<(), AppError> {
        let handle = self.registry.get(code)?;
        let players = {
            let mut state = handle.state.lock();
            session::leave(&mut state, player)?;
            debug!(room_code = %handle.code(), "player left");
            state.player_count()
        };
        self.notifier.publish(
            handle.code(),
            EventEnvelope::PlayersChanged {
                room_code: handle.code().to_string(),
                players,
            },
        );
        self.registry.remove_if_empty(handle.code());
        Ok(())
    }

    /// Start the game: round 1 is dealt and betting opens.
    pub fn start(&self, code: &str, player: PlayerId) -> Result<RoomSnapshot, AppError> {
        let handle = self.registry.get(code)?;
        let snapshot = {
            let mut state = handle.state.lock();
            session::start_game(&mut state, player)?;
            info!(room_code = %handle.code(), players = state.player_count(), "game started");
            snapshot_for(&state, handle.code(), player)?
        };
        self.notifier.publish(
            handle.code(),
            EventEnvelope::GameStarted {
                room_code: handle.code().to_string(),
            },
        );
        Ok(snapshot)
    }

    /// Submit or overwrite a bet for the current round.
    pub fn bet(&self, code: &str, player: PlayerId, value: u8) -> Result<RoomSnapshot, AppError> {
        let handle = self.registry.get(code)?;
        let snapshot = {
            let mut state = handle.state.lock();
            let seat = state.seat_of(player)?;
            let result = session::submit_bet(&mut state, seat, value)?;
            debug!(
                room_code = %handle.code(),
                seat,
                value,
                play_started = result.play_started,
                "bet recorded"
            );
            snapshot_for(&state, handle.code(), player)?
        };
        self.notify_state_changed(handle.code(), &snapshot);
        Ok(snapshot)
    }

    /// Play a named card into the current trick.
    pub fn play(&self, code: &str, player: PlayerId, card_name: &str) -> Result<RoomSnapshot, AppError> {
        let card: Card = card_name.parse()?;
        let handle = self.registry.get(code)?;
        let snapshot = {
            let mut state = handle.state.lock();
            let seat = state.seat_of(player)?;
            let result = session::play_card(&mut state, seat, card)?;
            if result.trick_completed {
                info!(
                    room_code = %handle.code(),
                    seat,
                    winner = ?result.trick_winner,
                    next_round_created = result.next_round_created,
                    game_complete = result.game_complete,
                    "trick resolved"
                );
            } else {
                debug!(room_code = %handle.code(), seat, card = %card, "card played");
            }
            snapshot_for(&state, handle.code(), player)?
        };
        self.notify_state_changed(handle.code(), &snapshot);
        Ok(snapshot)
    }

    /// Scheduler entry point: close the current round's betting phase by
    /// creating its trick. Safe to invoke repeatedly.
    pub fn ensure_trick(&self, code: &str) -> Result<bool, AppError> {
        let handle = self.registry.get(code)?;
        let (created, event) = {
            let mut state = handle.state.lock();
            let created = session::ensure_trick(&mut state)?;
            let event = created
                .then(|| Self::state_event(&state, handle.code()))
                .flatten();
            (created, event)
        };
        if let Some(event) = event {
            self.notifier.publish(handle.code(), event);
        }
        Ok(created)
    }

    /// Scheduler entry point: advance a resolved round to the next one.
    /// Safe to invoke repeatedly.
    pub fn ensure_next_round(&self, code: &str) -> Result<bool, AppError> {
        let handle = self.registry.get(code)?;
        let (created, event) = {
            let mut state = handle.state.lock();
            let created = session::ensure_next_round(&mut state)?;
            let event = created
                .then(|| Self::state_event(&state, handle.code()))
                .flatten();
            (created, event)
        };
        if let Some(event) = event {
            self.notifier.publish(handle.code(), event);
        }
        Ok(created)
    }

    fn state_event(state: &crate::domain::state::RoomState, code: &str) -> Option<EventEnvelope> {
        let round = state.rounds.last()?;
        Some(EventEnvelope::StateChanged {
            room_code: code.to_string(),
            round_no: round.round_no,
            phase: round.phase,
        })
    }

    fn notify_state_changed(&self, code: &str, snapshot: &RoomSnapshot) {
        if let (Some(round_no), Some(phase)) = (snapshot.round_no, snapshot.round_phase) {
            self.notifier.publish(
                code,
                EventEnvelope::StateChanged {
                    room_code: code.to_string(),
                    round_no,
                    phase,
                },
            );
        }
    }
}
