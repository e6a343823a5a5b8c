use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards::Card;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Stable identity supplied by the session collaborator.
pub type PlayerId = Uuid;

/// Positional index into a room's seat list. Seat order is fixed at join
/// time and defines the base turn rotation.
pub type Seat = u8;

/// Room-level lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPhase {
    /// Room created, no rounds yet.
    Lobby,
    /// Round 1 exists; membership is frozen.
    InProgress,
}

/// Per-round lifecycle, stored on the round itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Deck built, hands being distributed.
    Dealing,
    /// Players declare bets.
    Betting,
    /// The round's trick is being played.
    Playing,
    /// Trick resolved, winner recorded.
    Resolved,
}

/// The single trick of a round: plays accumulate in turn order, the winner
/// is set exactly once at resolution.
#[derive(Debug, Clone, Default)]
pub struct TrickState {
    pub plays: Vec<(Seat, Card)>,
    pub winner: Option<Seat>,
}

impl TrickState {
    pub fn has_played(&self, seat: Seat) -> bool {
        self.plays.iter().any(|(s, _)| *s == seat)
    }
}

/// One numbered round of play within a room.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// 1-based, strictly increasing, unique per room.
    pub round_no: u8,
    pub phase: RoundPhase,
    /// Held, unplayed cards per seat.
    pub hands: Vec<Vec<Card>>,
    /// Declared bets per seat; None until first submission.
    pub bets: Vec<Option<u8>>,
    /// Created when betting completes; at most one per round.
    pub trick: Option<TrickState>,
}

impl RoundState {
    pub fn new(round_no: u8, player_count: usize) -> Self {
        Self {
            round_no,
            phase: RoundPhase::Dealing,
            hands: vec![Vec::new(); player_count],
            bets: vec![None; player_count],
            trick: None,
        }
    }

    pub fn bets_placed(&self) -> usize {
        self.bets.iter().filter(|b| b.is_some()).count()
    }

    pub fn all_bets_in(&self) -> bool {
        self.bets_placed() == self.bets.len()
    }
}

/// Entire room container, sufficient for all domain operations.
///
/// The services layer mutates this only while holding the room's critical
/// section, so none of these fields need interior locking.
#[derive(Debug, Clone)]
pub struct RoomState {
    /// Insertion-stable seat list; seats[0] is the room owner.
    pub seats: Vec<PlayerId>,
    pub owner: PlayerId,
    /// Base seed for per-round shuffle derivation.
    pub seed: u64,
    /// Rounds in order; rounds[n] has round_no n+1.
    pub rounds: Vec<RoundState>,
}

impl RoomState {
    pub fn new(owner: PlayerId, seed: u64) -> Self {
        Self {
            seats: vec![owner],
            owner,
            seed,
            rounds: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    pub fn phase(&self) -> RoomPhase {
        if self.rounds.is_empty() {
            RoomPhase::Lobby
        } else {
            RoomPhase::InProgress
        }
    }

    pub fn is_member(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    pub fn seat_of(&self, player: PlayerId) -> Result<Seat, DomainError> {
        self.seats
            .iter()
            .position(|p| *p == player)
            .map(|i| i as Seat)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, "player is not seated in this room")
            })
    }

    pub fn current_round(&self) -> Result<&RoundState, DomainError> {
        self.rounds
            .last()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "game has no rounds yet"))
    }

    pub fn current_round_mut(&mut self) -> Result<&mut RoundState, DomainError> {
        self.rounds
            .last_mut()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "game has no rounds yet"))
    }

    pub fn round(&self, round_no: u8) -> Option<&RoundState> {
        self.rounds.get(round_no.checked_sub(1)? as usize)
    }
}

/// Seat rotation helpers.
///
/// These live in `domain` so services, views, and the turn-order resolver
/// share a single source of truth for "who acts next".
#[inline]
pub fn seat_offset(seat: Seat, delta: usize, player_count: usize) -> Seat {
    ((seat as usize + delta) % player_count) as Seat
}

/// Returns the next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, player_count: usize) -> Seat {
    seat_offset(seat, 1, player_count)
}
