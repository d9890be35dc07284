//! Error codes for the euchre engine API surface.
//!
//! This module defines all error codes exposed to callers. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! transport layer would return.

use core::fmt;

/// Centralized error codes for the engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule violations
    /// Out of turn
    OutOfTurn,
    /// Phase mismatch
    PhaseMismatch,
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit
    MustFollowSuit,
    /// Called the up-card's suit or an unrecognized suit
    ForbiddenTrumpSuit,
    /// Invalid seat number
    InvalidSeat,
    /// Wrong player count
    InvalidPlayerCount,
    /// Parse card error
    ParseCard,
    /// General validation error
    ValidationError,

    // Capacity conflicts
    /// Game already has four players
    GameFull,
    /// Game has finished
    GameFinished,
    /// Join code already exists
    JoinCodeConflict,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::ForbiddenTrumpSuit => "FORBIDDEN_TRUMP_SUIT",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::GameFull => "GAME_FULL",
            Self::GameFinished => "GAME_FINISHED",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::Conflict => "CONFLICT",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
