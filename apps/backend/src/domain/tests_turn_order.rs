use uuid::Uuid;

use crate::domain::state::{RoomState, RoundPhase, RoundState, TrickState};
use crate::domain::turn_order::{leader_for_round, ordered_seats, ordered_seats_for_round};
use crate::errors::domain::{DomainError, InvariantKind};

fn room_with_players(count: usize) -> RoomState {
    let owner = Uuid::new_v4();
    let mut room = RoomState::new(owner, 42);
    for _ in 1..count {
        room.seats.push(Uuid::new_v4());
    }
    room
}

fn resolved_round(round_no: u8, player_count: usize, winner: u8) -> RoundState {
    let mut round = RoundState::new(round_no, player_count);
    round.phase = RoundPhase::Resolved;
    round.trick = Some(TrickState {
        plays: Vec::new(),
        winner: Some(winner),
    });
    round
}

#[test]
fn round_one_leader_is_the_owner() {
    let room = room_with_players(4);
    assert_eq!(leader_for_round(&room, 1).unwrap(), 0);
}

#[test]
fn later_rounds_are_led_by_the_prior_trick_winner() {
    let mut room = room_with_players(4);
    room.rounds.push(resolved_round(1, 4, 2));
    room.rounds.push(RoundState::new(2, 4));
    assert_eq!(leader_for_round(&room, 2).unwrap(), 2);
}

#[test]
fn missing_prior_trick_is_an_invariant_violation() {
    let mut room = room_with_players(4);
    // Round 1 exists but its trick is unresolved.
    room.rounds.push(RoundState::new(1, 4));
    room.rounds.push(RoundState::new(2, 4));
    let err = leader_for_round(&room, 2).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invariant(InvariantKind::MissingPriorTrick, _)
    ));
}

#[test]
fn rotation_starts_at_leader_and_preserves_relative_order() {
    assert_eq!(ordered_seats(0, 4), vec![0, 1, 2, 3]);
    assert_eq!(ordered_seats(2, 4), vec![2, 3, 0, 1]);
    assert_eq!(ordered_seats(4, 5), vec![4, 0, 1, 2, 3]);
    assert_eq!(ordered_seats(1, 2), vec![1, 0]);
}

#[test]
fn rotation_for_current_round_follows_the_winner() {
    let mut room = room_with_players(5);
    room.rounds.push(resolved_round(1, 5, 3));
    room.rounds.push(RoundState::new(2, 5));
    assert_eq!(
        ordered_seats_for_round(&room, 2).unwrap(),
        vec![3, 4, 0, 1, 2]
    );
}
