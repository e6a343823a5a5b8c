//! Room code generation and canonicalization.
//!
//! Room codes are 6-character uppercase alphanumeric strings. Lookup is
//! case-insensitive: codes are canonicalized to uppercase first.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const ROOM_CODE_LEN: usize = 6;

/// Generate a random room code.
///
/// Collisions are possible (36^6 space) and handled by the registry, which
/// retries until an unused code is found.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Canonical form used for registry keys.
pub fn canonicalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
