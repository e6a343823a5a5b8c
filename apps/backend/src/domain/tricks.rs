//! Trick resolution and turn legality.
//!
//! Resolution is a pure function of the played cards in leader-first order;
//! callers persist the winner. Special cards outrank suit play entirely:
//! siren over skull king, skull king over everything else, pirate over all
//! ordinary cards. Among sirens or pirates, the earliest in turn order wins.

use crate::domain::cards::{Card, CardKind};
use crate::domain::state::{RoundState, Seat};
use crate::errors::domain::{DomainError, InvariantKind};

/// Determine the winner of a completed trick.
///
/// `plays` must be in leader-first order, which the turn discipline
/// guarantees for plays recorded through [`is_legal_turn`].
pub fn resolve_trick_winner(
    plays: &[(Seat, Card)],
    player_count: usize,
) -> Result<Seat, DomainError> {
    if plays.len() != player_count {
        return Err(DomainError::invariant(
            InvariantKind::IncompleteTrick,
            format!("trick has {} plays, need {}", plays.len(), player_count),
        ));
    }

    let first_of = |kind: CardKind| plays.iter().find(|(_, c)| c.kind == kind).map(|(s, _)| *s);

    // Rule 1 + 2: skull king wins outright unless a siren was played, in
    // which case the earliest siren takes the trick.
    if let Some(skull_king_seat) = first_of(CardKind::SkullKing) {
        if let Some(siren_seat) = first_of(CardKind::Siren) {
            return Ok(siren_seat);
        }
        return Ok(skull_king_seat);
    }

    // Rule 3: earliest pirate.
    if let Some(pirate_seat) = first_of(CardKind::Pirate) {
        return Ok(pirate_seat);
    }

    // Rule 4: asked color is the suit of the first suited card played.
    // Highest of that suit wins provisionally; any trump card overrides.
    let asked_color = plays.iter().find_map(|(_, c)| c.suit());
    let mut winner = asked_color.and_then(|asked| {
        plays
            .iter()
            .filter(|(_, c)| c.suit() == Some(asked))
            .max_by_key(|(_, c)| c.value)
            .map(|(s, _)| *s)
    });
    if let Some((trump_seat, _)) = plays
        .iter()
        .filter(|(_, c)| c.is_trump())
        .max_by_key(|(_, c)| c.value)
    {
        winner = Some(*trump_seat);
    }

    // Rule 5: a fully degenerate trick (all escapes) falls to the leader.
    Ok(winner.unwrap_or(plays[0].0))
}

/// Whether `seat` may play the next card of the round's trick.
///
/// Exactly one seat is legal at any point: the leader when the trick is
/// empty, otherwise the seat following the most recent player in
/// leader-first order. A seat that has already played is never legal.
pub fn is_legal_turn(round: &RoundState, ordered: &[Seat], seat: Seat) -> bool {
    let Some(trick) = round.trick.as_ref() else {
        return false;
    };
    if trick.has_played(seat) {
        return false;
    }
    ordered.get(trick.plays.len()) == Some(&seat)
}
