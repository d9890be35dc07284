//! Fixed parameters of four-player euchre.

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 24;
pub const HAND_SIZE: usize = 5;
pub const KITTY_SIZE: usize = 3;
pub const TRICKS_PER_ROUND: usize = 5;

/// First team to reach this cumulative score wins the game.
pub const WINNING_SCORE: u8 = 10;

/// Tricks a team must take to win a round (majority of 5).
pub const MAJORITY_TRICKS: u8 = 3;
