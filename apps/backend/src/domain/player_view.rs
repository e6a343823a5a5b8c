//! Player view of room state: what one player is allowed to see.
//!
//! Every successful action returns the acting player's snapshot. Consumers
//! of broadcast events re-fetch this rather than trusting event payloads.

use serde::Serialize;

use crate::domain::cards::Card;
use crate::domain::state::{PlayerId, RoomPhase, RoomState, RoundPhase, Seat};
use crate::errors::domain::DomainError;

/// Bet visibility: a player always sees their own value; opponents' values
/// stay hidden until betting closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetView {
    pub seat: Seat,
    pub placed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickPlayView {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentView {
    pub seat: Seat,
    pub cards_remaining: usize,
}

/// Snapshot of a room from one player's perspective.
#[derive(Debug, Clone, Serialize)]
pub struct RoomSnapshot {
    pub room_code: String,
    pub phase: RoomPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_no: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_phase: Option<RoundPhase>,
    pub your_seat: Seat,
    /// The viewer's held, unplayed cards (sorted).
    pub hand: Vec<Card>,
    pub bets: Vec<BetView>,
    /// Plays of the current trick in leader-first order.
    pub trick_plays: Vec<TrickPlayView>,
    pub opponents: Vec<OpponentView>,
}

/// Build the snapshot `viewer` may see.
pub fn snapshot_for(
    room: &RoomState,
    room_code: &str,
    viewer: PlayerId,
) -> Result<RoomSnapshot, DomainError> {
    let your_seat = room.seat_of(viewer)?;

    let mut snapshot = RoomSnapshot {
        room_code: room_code.to_string(),
        phase: room.phase(),
        round_no: None,
        round_phase: None,
        your_seat,
        hand: Vec::new(),
        bets: Vec::new(),
        trick_plays: Vec::new(),
        opponents: Vec::new(),
    };

    let Some(round) = room.rounds.last() else {
        return Ok(snapshot);
    };

    snapshot.round_no = Some(round.round_no);
    snapshot.round_phase = Some(round.phase);

    let betting_open = round.phase == RoundPhase::Betting;
    snapshot.bets = round
        .bets
        .iter()
        .enumerate()
        .map(|(seat, bet)| {
            let seat = seat as Seat;
            let visible = seat == your_seat || !betting_open;
            BetView {
                seat,
                placed: bet.is_some(),
                value: if visible { *bet } else { None },
            }
        })
        .collect();

    snapshot.hand = round
        .hands
        .get(your_seat as usize)
        .cloned()
        .unwrap_or_default();

    if let Some(trick) = round.trick.as_ref() {
        // Plays accumulate in turn order, which is leader-first.
        snapshot.trick_plays = trick
            .plays
            .iter()
            .map(|(seat, card)| TrickPlayView {
                seat: *seat,
                card: *card,
            })
            .collect();
    }

    snapshot.opponents = (0..room.player_count() as Seat)
        .filter(|seat| *seat != your_seat)
        .map(|seat| OpponentView {
            seat,
            cards_remaining: round.hands.get(seat as usize).map_or(0, Vec::len),
        })
        .collect();

    Ok(snapshot)
}
