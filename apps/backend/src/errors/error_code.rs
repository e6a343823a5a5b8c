//! Error codes surfaced to callers of the action API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in action responses.

use core::fmt;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Centralized error codes for the game backend.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string. Invariant
/// violations intentionally collapse to `INTERNAL`: they are server faults,
/// not caller mistakes, and their details are logged rather than returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move validation
    /// Not this player's turn
    OutOfTurn,
    /// Card not held by the player this round
    CardNotHeld,
    /// Bet value outside the allowed range
    InvalidBet,
    /// Room occupancy outside 2..=7
    InvalidPlayerCount,
    /// Action attempted in the wrong phase
    PhaseMismatch,
    /// Card name failed to parse
    ParseCard,

    // Room membership
    /// Join attempted at capacity
    RoomFull,
    /// Join attempted by a non-member after round 1 exists
    GameAlreadyStarted,
    /// Play-phase action before the game started
    GameNotStarted,
    /// Start attempted by someone other than the room owner
    NotOwner,
    /// Leave attempted mid-game
    LeaveWhileInProgress,

    // Lookup
    /// Unknown room code
    RoomNotFound,
    /// Round not found
    RoundNotFound,
    /// Trick not found
    TrickNotFound,
    /// Player is not seated in the room
    PlayerNotFound,
    /// Card name not in the catalog
    CardNotFound,

    // Fallbacks
    /// General validation error
    ValidationError,
    /// Resource not found
    NotFound,
    /// Internal server fault (invariant violation)
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::CardNotHeld => "CARD_NOT_HELD",
            ErrorCode::InvalidBet => "INVALID_BET",
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::RoomFull => "ROOM_FULL",
            ErrorCode::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            ErrorCode::GameNotStarted => "GAME_NOT_STARTED",
            ErrorCode::NotOwner => "NOT_OWNER",
            ErrorCode::LeaveWhileInProgress => "LEAVE_WHILE_IN_PROGRESS",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::RoundNotFound => "ROUND_NOT_FOUND",
            ErrorCode::TrickNotFound => "TRICK_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::CardNotFound => "CARD_NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::CardNotHeld => ErrorCode::CardNotHeld,
                ValidationKind::InvalidBet => ErrorCode::InvalidBet,
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::RoomFull => ErrorCode::RoomFull,
                ValidationKind::GameAlreadyStarted => ErrorCode::GameAlreadyStarted,
                ValidationKind::GameNotStarted => ErrorCode::GameNotStarted,
                ValidationKind::NotOwner => ErrorCode::NotOwner,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::LeaveWhileInProgress => ErrorCode::LeaveWhileInProgress,
                _ => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
                NotFoundKind::Round => ErrorCode::RoundNotFound,
                NotFoundKind::Trick => ErrorCode::TrickNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Card => ErrorCode::CardNotFound,
                _ => ErrorCode::NotFound,
            },
            DomainError::Invariant(_, _) => ErrorCode::Internal,
        }
    }
}
