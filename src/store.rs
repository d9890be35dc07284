//! In-memory game registry with per-game serialization.
//!
//! Each game lives behind its own mutex: different games mutate fully in
//! parallel, while two requests racing on one game see exactly one success
//! and one rejection. Persistence beyond process memory is a caller
//! concern; the domain reconstructs behavior from the stored state alone.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub type SharedGame = Arc<Mutex<GameState>>;

#[derive(Default)]
pub struct GameStore {
    games: DashMap<String, SharedGame>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game under its code.
    pub fn insert(&self, game: GameState) -> Result<SharedGame, DomainError> {
        let code = game.code.clone();
        let shared: SharedGame = Arc::new(Mutex::new(game));
        match self.games.entry(code) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                "Game code already exists",
            )),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(shared.clone());
                Ok(shared)
            }
        }
    }

    pub fn get(&self, code: &str) -> Result<SharedGame, DomainError> {
        self.games
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {code}")))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
