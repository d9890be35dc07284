//! RNG seed derivation utilities for deterministic game behavior.
//!
//! All in-game randomness flows from one base seed fixed at game creation.
//! Each context (seating, per-round dealing) derives its own seed, so any
//! call can reconstruct identical behavior from persisted state alone.

/// Derive a seed for dealing cards in a round.
///
/// Unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for the one-time seat permutation and dealer choice at
/// game start.
pub fn derive_seating_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(31).wrapping_add(1)
}
