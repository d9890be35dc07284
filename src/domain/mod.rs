//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod lifecycle;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_snapshot_phases;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, effective_suit, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::deal;
pub use seed_derivation::{derive_dealing_seed, derive_seating_seed};
pub use state::{GamePhase, GameState, RoundState, Seat, Team};
