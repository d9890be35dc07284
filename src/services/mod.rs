//! Service layer: the engine's external interface over the game store.

pub mod game_service;

pub use game_service::{Action, GameService};
