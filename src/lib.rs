#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! A four-player euchre rules engine.
//!
//! The `domain` module holds the pure rules: dealing, bidding, trick play,
//! scoring, and game lifecycle, all operating on plain state values and
//! returning [`errors::domain::DomainError`] on any rule violation. The
//! `services` module wraps the domain in a concurrency-safe game store and
//! exposes the engine's operations by join code and session.

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;
pub mod utils;


// Re-exports for public API
pub use domain::cards_types::{Card, Rank, Suit};
pub use domain::snapshot::{GameSnapshot, RoundSnapshot};
pub use domain::state::{GamePhase, GameState, Seat, Team};
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use services::game_service::{Action, GameService};
pub use store::GameStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
