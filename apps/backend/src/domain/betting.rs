//! Bet collection for a round.

use crate::domain::rules::{hand_size_for_round, valid_bet_range};
use crate::domain::state::{RoundPhase, RoundState, Seat};
use crate::errors::domain::{DomainError, InvariantKind, ValidationKind};

/// Record or overwrite a seat's bet for the round.
///
/// Re-submission before play starts is allowed and replaces the earlier
/// value; it is not an error.
pub fn place_bet(round: &mut RoundState, seat: Seat, value: u8) -> Result<(), DomainError> {
    if round.phase != RoundPhase::Betting {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "bets are only accepted during the betting phase",
        ));
    }

    let range = valid_bet_range(hand_size_for_round(round.round_no));
    if !range.contains(&value) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBet,
            format!("bet must be in range {range:?}"),
        ));
    }

    let slot = round.bets.get_mut(seat as usize).ok_or_else(|| {
        DomainError::invariant(
            InvariantKind::Other("seat out of range".into()),
            format!("seat {seat} has no bet slot"),
        )
    })?;
    *slot = Some(value);
    Ok(())
}
