//! Game session state machine: membership, round lifecycle, bets, plays.
//!
//! Every operation here mutates a `RoomState` and is called by the room
//! coordinator while holding that room's critical section, so operations
//! can assume exclusive access. Phase-advance steps (trick creation, next
//! round creation) are create-if-absent and safe to invoke repeatedly:
//! the background scheduler may trigger them in addition to the player
//! action that completed the phase.

use crate::domain::betting::place_bet;
use crate::domain::cards::Card;
use crate::domain::dealing::deal_hands;
use crate::domain::rules::{can_deal, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{
    PlayerId, RoomPhase, RoomState, RoundPhase, RoundState, Seat, TrickState,
};
use crate::domain::tricks::{is_legal_turn, resolve_trick_winner};
use crate::domain::turn_order::ordered_seats_for_round;
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a bet submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetResult {
    /// Whether this bet completed the set and opened the play phase.
    pub play_started: bool,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed the round's trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was resolved.
    pub trick_winner: Option<Seat>,
    /// Whether the next round was created.
    pub next_round_created: bool,
    /// Set when the catalog cannot cover another round: the game is over.
    pub game_complete: bool,
}

/// Seat a player in the room. Idempotent for existing members.
pub fn join(room: &mut RoomState, player: PlayerId) -> Result<Seat, DomainError> {
    if let Ok(seat) = room.seat_of(player) {
        return Ok(seat);
    }
    if room.phase() == RoomPhase::InProgress {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyStarted,
            "game has already started",
        ));
    }
    if room.player_count() >= MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::RoomFull,
            format!("room is full ({MAX_PLAYERS} seats)"),
        ));
    }
    room.seats.push(player);
    Ok((room.player_count() - 1) as Seat)
}

/// Remove a player from the lobby. Departure mid-game is not a supported
/// transition and is rejected.
pub fn leave(room: &mut RoomState, player: PlayerId) -> Result<(), DomainError> {
    let seat = room.seat_of(player)?;
    if room.phase() == RoomPhase::InProgress {
        return Err(DomainError::validation(
            ValidationKind::LeaveWhileInProgress,
            "cannot leave once the game has started",
        ));
    }
    room.seats.remove(seat as usize);
    Ok(())
}

/// Start the game: round 1 is created and dealt, betting opens.
pub fn start_game(room: &mut RoomState, actor: PlayerId) -> Result<(), DomainError> {
    if actor != room.owner {
        return Err(DomainError::validation(
            ValidationKind::NotOwner,
            "only the room owner can start the game",
        ));
    }
    if room.phase() == RoomPhase::InProgress {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyStarted,
            "game has already started",
        ));
    }
    let count = room.player_count();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("need {MIN_PLAYERS}..={MAX_PLAYERS} players, have {count}"),
        ));
    }
    if !can_deal(count, 1) {
        // User-reachable, so reported as validation rather than letting the
        // allocator fail with an internal fault.
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("the deck cannot cover a round-1 deal for {count} players"),
        ));
    }
    start_round(room, 1)
}

/// Record a bet for the current round. When the last missing bet arrives,
/// the round's trick is created (exactly once) and play begins.
pub fn submit_bet(room: &mut RoomState, seat: Seat, value: u8) -> Result<BetResult, DomainError> {
    if room.phase() == RoomPhase::Lobby {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            "game has not started",
        ));
    }
    let round = room.current_round_mut()?;
    place_bet(round, seat, value)?;

    if round.all_bets_in() {
        let created = ensure_trick(room)?;
        return Ok(BetResult {
            play_started: created,
        });
    }
    Ok(BetResult {
        play_started: false,
    })
}

/// Close the current round's betting phase by creating its trick.
///
/// Create-if-absent: invoking this when the trick already exists is a
/// no-op, which makes it safe under concurrent last-bet submissions and
/// scheduler retries. Returns whether the trick was created now.
pub fn ensure_trick(room: &mut RoomState) -> Result<bool, DomainError> {
    let round = room.current_round_mut()?;
    if round.trick.is_some() {
        return Ok(false);
    }
    if round.phase != RoundPhase::Betting {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "round is not in the betting phase",
        ));
    }
    round.trick = Some(TrickState::default());
    round.phase = RoundPhase::Playing;
    Ok(true)
}

/// Play a card into the current trick, enforcing turn order and card
/// ownership. Completing the trick resolves it and rolls the room into the
/// next round.
pub fn play_card(
    room: &mut RoomState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if room.phase() == RoomPhase::Lobby {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            "game has not started",
        ));
    }

    let player_count = room.player_count();
    let round_no = room.current_round()?.round_no;
    // Rotation depends only on prior rounds, so compute it before taking a
    // mutable borrow of the current round.
    let ordered = ordered_seats_for_round(room, round_no)?;

    let round = room.current_round_mut()?;
    if round.phase != RoundPhase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "round is not in the play phase",
        ));
    }
    if !is_legal_turn(round, &ordered, seat) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "not this player's turn",
        ));
    }

    let hand = round
        .hands
        .get_mut(seat as usize)
        .ok_or_else(|| DomainError::validation_other(format!("seat {seat} has no hand")))?;
    let Some(pos) = hand.iter().position(|c| *c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotHeld,
            format!("card {card} is not in hand"),
        ));
    };
    let played = hand.remove(pos);

    let trick = round
        .trick
        .as_mut()
        .ok_or_else(|| DomainError::validation_other("round has no trick"))?;
    trick.plays.push((seat, played));

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        next_round_created: false,
        game_complete: false,
    };

    if trick.plays.len() < player_count {
        return Ok(result);
    }

    // Trick complete: resolve, record the winner, close the round.
    let winner = resolve_trick_winner(&trick.plays, player_count)?;
    trick.winner = Some(winner);
    round.phase = RoundPhase::Resolved;
    result.trick_completed = true;
    result.trick_winner = Some(winner);

    match ensure_next_round(room)? {
        true => result.next_round_created = true,
        false => result.game_complete = true,
    }
    Ok(result)
}

/// Create the next round once the current one is resolved.
///
/// Create-if-absent: a no-op when the latest round is still running, so the
/// scheduler may call it freely. Returns whether a round was created; false
/// with a resolved round means the catalog cannot cover another deal and
/// the game is complete.
pub fn ensure_next_round(room: &mut RoomState) -> Result<bool, DomainError> {
    let current = room.current_round()?;
    if current.phase != RoundPhase::Resolved {
        return Ok(false);
    }
    let next_no = current.round_no.saturating_add(1);
    if !can_deal(room.player_count(), next_no) {
        return Ok(false);
    }
    start_round(room, next_no)?;
    Ok(true)
}

fn start_round(room: &mut RoomState, round_no: u8) -> Result<(), DomainError> {
    let player_count = room.player_count();
    let mut round = RoundState::new(round_no, player_count);
    let seed = derive_dealing_seed(room.seed, round_no);
    round.hands = deal_hands(player_count, round_no, seed)?;
    round.phase = RoundPhase::Betting;
    room.rounds.push(round);
    Ok(())
}
