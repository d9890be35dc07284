//! Domain-level error type used across the engine and its adapters.
//!
//! This error type is transport- and storage-agnostic. Every rejection is
//! local and synchronous; a failed operation leaves game state unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Validation kinds for rule violations during bidding and trick play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action submitted by a player who does not hold the turn.
    OutOfTurn,
    /// Action submitted outside the phase it requires.
    PhaseMismatch,
    /// Card is not in the acting player's hand.
    CardNotInHand,
    /// Card violates the follow-suit rule.
    MustFollowSuit,
    /// Calling the up-card's suit, or an unrecognized suit.
    ForbiddenTrumpSuit,
    /// Seat outside 0..=3 or otherwise malformed.
    InvalidSeat,
    /// Wrong player count for an operation that needs exactly four.
    InvalidPlayerCount,
    /// Card token failed to parse.
    ParseCard,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Game already has four players.
    GameFull,
    /// Game has finished; no further joins or actions.
    GameFinished,
    /// Game code collision in the store.
    JoinCodeConflict,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Canonical error code for this error, for callers shaping responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                ValidationKind::ForbiddenTrumpSuit => ErrorCode::ForbiddenTrumpSuit,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                _ => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::GameFull => ErrorCode::GameFull,
                ConflictKind::GameFinished => ErrorCode::GameFinished,
                ConflictKind::JoinCodeConflict => ErrorCode::JoinCodeConflict,
                _ => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                _ => ErrorCode::NotFound,
            },
        }
    }
}
