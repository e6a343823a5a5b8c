//! RNG seed derivation for deterministic dealing.
//!
//! Each room draws one base seed at creation; every round's shuffle derives
//! its own seed from it, so re-running a deal for a round is idempotent and
//! reproducible in tests.

/// Derive the shuffle seed for a round.
///
/// Unique per (room, round) combination and stable across retries.
pub fn derive_dealing_seed(room_seed: u64, round_no: u8) -> u64 {
    room_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
