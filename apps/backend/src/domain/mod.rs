//! Domain layer: pure game logic types and helpers.

pub mod betting;
pub mod cards;
pub mod dealing;
pub mod player_view;
pub mod rules;
pub mod seed_derivation;
pub mod session;
pub mod state;
pub mod tricks;
pub mod turn_order;

#[cfg(test)]
mod tests_cards;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;
#[cfg(test)]
mod tests_turn_order;

// Re-exports for ergonomics
pub use cards::{catalog, Card, CardKind, Suit};
pub use dealing::deal_hands;
pub use player_view::{snapshot_for, RoomSnapshot};
pub use rules::hand_size_for_round;
pub use state::{PlayerId, RoomPhase, RoomState, RoundPhase, Seat};
pub use tricks::{is_legal_turn, resolve_trick_winner};
pub use turn_order::{leader_for_round, ordered_seats};
