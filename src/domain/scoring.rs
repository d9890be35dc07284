//! Per-round point computation.
//!
//! Exactly one formula applies, keyed off maker team versus winning team:
//! a euchred maker credits the defenders, otherwise the maker scores by how
//! many of the five tricks they took.

use serde::{Deserialize, Serialize};

use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{team_of, RoundState, Team};
use crate::errors::domain::DomainError;

/// Why a round scored the way it did.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreReason {
    /// Maker took 3-4 tricks: 1 point.
    MadeTrump,
    /// Maker took all 5 tricks: 2 points.
    Sweep,
    /// Maker took all 5 tricks playing alone: 4 points.
    LonerSweep,
    /// Maker failed to take a majority: defenders score 2.
    Euchre,
    /// All eight bidding opportunities passed: no trump, no points.
    ThrownIn,
}

/// The settled result of a round, recorded once at completion and never
/// recomputed from tricks afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Team that took the majority of tricks; None for a thrown-in hand.
    pub winning_team: Option<Team>,
    /// Team credited with the points; None for a thrown-in hand.
    pub scoring_team: Option<Team>,
    pub points: u8,
    pub reason: ScoreReason,
}

impl RoundOutcome {
    pub fn thrown_in() -> Self {
        Self {
            winning_team: None,
            scoring_team: None,
            points: 0,
            reason: ScoreReason::ThrownIn,
        }
    }
}

/// Score a round whose five tricks are all complete.
pub fn score_round(round: &RoundState) -> Result<RoundOutcome, DomainError> {
    if round.completed_tricks.len() != TRICKS_PER_ROUND {
        return Err(DomainError::validation_other(
            "Cannot score a round before all five tricks are complete",
        ));
    }
    let maker = round.maker_team.ok_or_else(|| {
        DomainError::validation_other("Invariant violated: maker team must be set (score_round)")
    })?;

    let tricks_won = round.tricks_won();
    // 5 tricks and 2 teams: exactly one team holds the majority.
    let winning_team: Team = if tricks_won[0] > tricks_won[1] { 0 } else { 1 };
    let maker_tricks = tricks_won[maker as usize];

    let (scoring_team, points, reason) = if winning_team != maker {
        (winning_team, 2, ScoreReason::Euchre)
    } else if maker_tricks as usize == TRICKS_PER_ROUND && round.loner {
        (maker, 4, ScoreReason::LonerSweep)
    } else if maker_tricks as usize == TRICKS_PER_ROUND {
        (maker, 2, ScoreReason::Sweep)
    } else {
        (maker, 1, ScoreReason::MadeTrump)
    };

    Ok(RoundOutcome {
        winning_team: Some(winning_team),
        scoring_team: Some(scoring_team),
        points,
        reason,
    })
}

/// Team trick counts from a slice of completed-trick winning seats.
/// Convenience for tests and snapshots.
pub fn tally_tricks(winning_seats: &[u8]) -> [u8; 2] {
    let mut won = [0u8; 2];
    for &seat in winning_seats {
        won[team_of(seat) as usize] += 1;
    }
    won
}
