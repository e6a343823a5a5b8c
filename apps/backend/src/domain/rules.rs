use std::ops::RangeInclusive;

use crate::domain::cards::catalog;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

/// Cards dealt on top of the round number.
pub const BASE_HAND_SIZE: u8 = 9;

/// Deal size for a 1-based round number: round 1 deals 10, round 2 deals 11.
pub fn hand_size_for_round(round_no: u8) -> u8 {
    round_no.saturating_add(BASE_HAND_SIZE)
}

/// Whether the catalog can cover a full deal for this round.
pub fn can_deal(player_count: usize, round_no: u8) -> bool {
    player_count * hand_size_for_round(round_no) as usize <= catalog().len()
}

pub fn valid_bet_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}
