//! Turn-order derivation for a round.
//!
//! The leader of round 1 is the room owner; the leader of round N>1 is the
//! winner of round N-1's trick. The play order is the stable seat list
//! rotated so the leader comes first (circular rotation, never a re-sort).

use crate::domain::state::{seat_offset, RoomState, Seat};
use crate::errors::domain::{DomainError, InvariantKind};

/// Seat entitled to play first in the given round.
pub fn leader_for_round(room: &RoomState, round_no: u8) -> Result<Seat, DomainError> {
    if round_no <= 1 {
        return room.seat_of(room.owner).map_err(|_| {
            DomainError::invariant(
                InvariantKind::Other("owner unseated".into()),
                "room owner is not seated",
            )
        });
    }

    let prior = room.round(round_no - 1).ok_or_else(|| {
        DomainError::invariant(
            InvariantKind::MissingPriorTrick,
            format!("round {} has no predecessor", round_no),
        )
    })?;

    prior
        .trick
        .as_ref()
        .and_then(|t| t.winner)
        .ok_or_else(|| {
            DomainError::invariant(
                InvariantKind::MissingPriorTrick,
                format!("round {} has no resolved trick", round_no - 1),
            )
        })
}

/// Full rotation for a round, leader first, relative order preserved.
pub fn ordered_seats(leader: Seat, player_count: usize) -> Vec<Seat> {
    (0..player_count)
        .map(|i| seat_offset(leader, i, player_count))
        .collect()
}

/// Convenience: leader-first rotation for the room's current round.
pub fn ordered_seats_for_round(room: &RoomState, round_no: u8) -> Result<Vec<Seat>, DomainError> {
    let leader = leader_for_round(room, round_no)?;
    Ok(ordered_seats(leader, room.player_count()))
}
