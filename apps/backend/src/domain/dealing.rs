//! Deterministic deck building and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{catalog, Card};
use crate::domain::rules::hand_size_for_round;
use crate::errors::domain::{DomainError, InvariantKind};

/// Build the round's deck from the catalog, shuffle it, and deal
/// `round_no + 9` cards to each player's hand.
///
/// Returns one hand per seat, sorted for convenience. Undealt cards stay in
/// the deck and are discarded with it; every dealt card goes to exactly one
/// hand.
pub fn deal_hands(
    player_count: usize,
    round_no: u8,
    seed: u64,
) -> Result<Vec<Vec<Card>>, DomainError> {
    let per_player = hand_size_for_round(round_no) as usize;
    let mut deck: Vec<Card> = catalog().to_vec();

    if player_count * per_player > deck.len() {
        return Err(DomainError::invariant(
            InvariantKind::InsufficientCards,
            format!(
                "round {round_no} needs {} cards for {player_count} players, catalog has {}",
                player_count * per_player,
                deck.len()
            ),
        ));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands = vec![Vec::with_capacity(per_player); player_count];
    for hand in hands.iter_mut() {
        for _ in 0..per_player {
            // Length was checked above; pop cannot run dry.
            if let Some(card) = deck.pop() {
                hand.push(card);
            }
        }
        hand.sort();
    }

    Ok(hands)
}
