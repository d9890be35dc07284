//! Game lifecycle: joining, starting, and advancing between rounds.
//!
//! These are explicit transition functions over the game container; callers
//! invoke them and get the new state back, there are no hidden post-save
//! hooks. The lifecycle is one-way: Waiting -> Active -> Finished.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::domain::dealing::deal;
use crate::domain::rules::{PLAYERS, WINNING_SCORE};
use crate::domain::seed_derivation::{derive_dealing_seed, derive_seating_seed};
use crate::domain::state::{
    next_seat, team_of, GamePhase, GameState, PlayerSlot, RoundState, RoundSummary, Seat,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Add a player to a waiting game. Idempotent for a session already seated.
/// Returns the player's index in join order.
pub fn join_game(
    game: &mut GameState,
    session_id: &str,
    display_name: &str,
) -> Result<usize, DomainError> {
    if let Some(idx) = game
        .players
        .iter()
        .position(|p| p.session_id == session_id)
    {
        return Ok(idx);
    }
    if game.phase == GamePhase::Finished {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            "Game has finished",
        ));
    }
    if game.players.len() >= PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::GameFull,
            "Game is full",
        ));
    }

    game.players.push(PlayerSlot {
        session_id: session_id.to_string(),
        display_name: display_name.to_string(),
        seat: None,
        team: None,
    });
    tracing::info!(code = %game.code, count = game.players.len(), "Player joined");
    Ok(game.players.len() - 1)
}

pub fn can_start(game: &GameState) -> bool {
    game.phase == GamePhase::Waiting && game.players.len() == PLAYERS
}

/// Start the game: assign seats via a random permutation of the four
/// joined players, teams by seat parity, and deal round #1 with a random
/// dealer. All randomness derives from the game seed.
pub fn start_game(game: &mut GameState) -> Result<(), DomainError> {
    if game.phase != GamePhase::Waiting {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Game has already started",
        ));
    }
    if game.players.len() != PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            "Exactly four players are required",
        ));
    }

    let mut rng = ChaCha12Rng::seed_from_u64(derive_seating_seed(game.rng_seed));
    let mut seats: Vec<Seat> = (0..PLAYERS as Seat).collect();
    seats.shuffle(&mut rng);
    for (player, &seat) in game.players.iter_mut().zip(seats.iter()) {
        player.seat = Some(seat);
        player.team = Some(team_of(seat));
    }

    let dealer: Seat = rng.random_range(0..PLAYERS as u8);
    game.phase = GamePhase::Active;
    game.round = Some(create_round(game, 1, dealer));

    tracing::info!(code = %game.code, dealer, "Game started");
    Ok(())
}

/// Deal a round with the seed derived for its number.
fn create_round(game: &GameState, number: u8, dealer: Seat) -> RoundState {
    let dealt = deal(derive_dealing_seed(game.rng_seed, number));
    tracing::debug!(code = %game.code, round = number, dealer, "Round dealt");
    RoundState::new(number, dealer, dealt)
}

/// Settle a completed (or thrown-in) round: credit the scoring team, record
/// the summary, and either finish the game or deal the next round with the
/// dealer advanced one seat.
pub fn advance_after_round(game: &mut GameState) -> Result<(), DomainError> {
    // Validate before taking so a rejected call leaves the round in place.
    let outcome = game
        .round
        .as_ref()
        .ok_or_else(|| {
            DomainError::validation_other(
                "Invariant violated: round must exist (advance_after_round)",
            )
        })?
        .outcome
        .ok_or_else(|| {
            DomainError::validation_other("Cannot advance past a round that has not completed")
        })?;
    let round = game.round.take().ok_or_else(|| {
        DomainError::validation_other("Invariant violated: round must exist (advance_after_round)")
    })?;

    game.round_history.push(RoundSummary {
        number: round.number,
        dealer: round.dealer,
        trump: round.trump,
        maker_team: round.maker_team,
        loner: round.loner,
        outcome,
        tricks_won: round.tricks_won(),
    });

    if let Some(team) = outcome.scoring_team {
        game.scores[team as usize] += outcome.points;
        tracing::info!(
            code = %game.code,
            round = round.number,
            team,
            points = outcome.points,
            reason = ?outcome.reason,
            "Round scored"
        );
        if game.scores[team as usize] >= WINNING_SCORE {
            game.phase = GamePhase::Finished;
            game.winning_team = Some(team);
            tracing::info!(code = %game.code, team, "Game finished");
            return Ok(());
        }
    }

    let next_number = round.number + 1;
    let next_dealer = next_seat(round.dealer);
    game.round = Some(create_round(game, next_number, next_dealer));
    Ok(())
}
