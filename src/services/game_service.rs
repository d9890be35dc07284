//! Game service: create, join, observe, and act on games.
//!
//! Every mutation runs under the game's own lock, so concurrent requests
//! against one game apply in some serial order; each either fully commits
//! or fully no-ops. After a domain action succeeds, the service drives the
//! explicit follow-up transitions (discard -> tricks, completed round ->
//! scoring -> next round or game end).

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{require_round_mut, GamePhase, GameState, Seat};
use crate::domain::{bidding, lifecycle, tricks};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::store::GameStore;
use crate::utils::join_code::generate_join_code;

/// A player-submitted action, tagged for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    OrderUp {
        #[serde(default)]
        alone: bool,
    },
    CallTrump {
        suit: Suit,
        #[serde(default)]
        alone: bool,
    },
    Pass,
    PlayCard {
        card: Card,
    },
    DiscardCard {
        card: Card,
    },
}

#[derive(Default)]
pub struct GameService {
    store: GameStore,
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Create a game with a fresh join code and an entropy-drawn seed.
    pub fn create_game(&self) -> Result<GameSnapshot, DomainError> {
        // Code collisions are vanishingly rare but retried anyway.
        for _ in 0..3 {
            let code = generate_join_code();
            let seed: u64 = rand::rng().random();
            let game = GameState::new(code, seed);
            let snap = snapshot(&game, None);
            match self.store.insert(game) {
                Ok(_) => {
                    tracing::info!(code = %snap.game.code, "Game created");
                    return Ok(snap);
                }
                Err(DomainError::Conflict(_, _)) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(DomainError::validation_other(
            "Could not allocate a unique game code",
        ))
    }

    /// Join a waiting game; starts it the moment the fourth player arrives.
    pub fn join_game(
        &self,
        code: &str,
        session_id: &str,
        display_name: &str,
    ) -> Result<GameSnapshot, DomainError> {
        let shared = self.store.get(code)?;
        let mut game = shared.lock();
        lifecycle::join_game(&mut game, session_id, display_name)?;
        if lifecycle::can_start(&game) {
            lifecycle::start_game(&mut game)?;
        }
        Ok(snapshot(&game, Some(session_id)))
    }

    /// Observe a game; the snapshot includes the caller's hand when the
    /// session belongs to a seated player.
    pub fn get_state(
        &self,
        code: &str,
        session_id: Option<&str>,
    ) -> Result<GameSnapshot, DomainError> {
        let shared = self.store.get(code)?;
        let game = shared.lock();
        Ok(snapshot(&game, session_id))
    }

    /// Apply a player action under the game lock.
    pub fn submit_action(
        &self,
        code: &str,
        session_id: &str,
        action: Action,
    ) -> Result<GameSnapshot, DomainError> {
        let shared = self.store.get(code)?;
        let mut game = shared.lock();

        if game.phase != GamePhase::Active {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Game is not active",
            ));
        }
        let seat = resolve_seat(&game, session_id)?;
        debug!(code, seat, ?action, "Submitting action");

        match action {
            Action::OrderUp { alone } => {
                let round = require_round_mut(&mut game, "order_up")?;
                bidding::order_up(round, seat, alone)?;
                if !round.awaiting_discard {
                    bidding::start_tricks(round)?;
                }
            }
            Action::CallTrump { suit, alone } => {
                let round = require_round_mut(&mut game, "call_trump")?;
                bidding::call_trump(round, seat, suit, alone)?;
                bidding::start_tricks(round)?;
            }
            Action::Pass => {
                let round = require_round_mut(&mut game, "pass")?;
                let outcome = bidding::pass_bidding(round, seat)?;
                if outcome.thrown_in {
                    lifecycle::advance_after_round(&mut game)?;
                }
            }
            Action::DiscardCard { card } => {
                let round = require_round_mut(&mut game, "discard_card")?;
                bidding::dealer_discard(round, seat, card)?;
                bidding::start_tricks(round)?;
            }
            Action::PlayCard { card } => {
                let round = require_round_mut(&mut game, "play_card")?;
                let result = tricks::play_card(round, seat, card)?;
                if result.round_completed {
                    lifecycle::advance_after_round(&mut game)?;
                }
            }
        }

        Ok(snapshot(&game, Some(session_id)))
    }
}

fn resolve_seat(game: &GameState, session_id: &str) -> Result<Seat, DomainError> {
    game.seat_of_session(session_id).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            "Session does not hold a seat in this game",
        )
    })
}
