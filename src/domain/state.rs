use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::DealResult;
use crate::domain::rules::{KITTY_SIZE, PLAYERS, TEAMS};
use crate::domain::scoring::RoundOutcome;
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3
pub type Team = u8; // 0..=1, seat mod 2

/// Game lifecycle, one-way: Waiting -> Active -> Finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Created, fewer than four players joined.
    Waiting,
    /// Four players seated, rounds in progress.
    Active,
    /// A team reached the winning score.
    Finished,
}

/// Trump-selection phases within a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidPhase {
    /// First pass around the table: accept or reject the up-card's suit.
    OrderingUp,
    /// Second pass: name any suit except the up-card's.
    CallingTrump,
    /// Terminal for bidding; trick play may begin.
    TrumpSelected,
}

/// A joined player. Seat and team stay unset until the game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlot {
    pub session_id: String,
    pub display_name: String,
    pub seat: Option<Seat>,
    pub team: Option<Team>,
}

/// A completed trick: who led, who won, and the plays in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickRecord {
    pub number: u8,
    pub lead_seat: Seat,
    pub winning_seat: Seat,
    pub plays: Vec<(Seat, Card)>,
}

/// Per-round state: hands, bidding progress, and trick play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// 1-based round number, unique and monotonic per game.
    pub number: u8,
    pub dealer: Seat,
    pub up_card: Card,
    pub kitty: [Card; KITTY_SIZE],
    pub bid_phase: BidPhase,
    /// Seat expected to bid; None once trump is chosen or the hand is thrown in.
    pub current_bidder: Option<Seat>,
    pub trump: Option<Suit>,
    pub maker_team: Option<Team>,
    /// Trump came from the up-card (first bidding phase).
    pub ordered_up: bool,
    /// Maker plays alone; their partner's cards sit out the round.
    pub loner: bool,
    /// The loner maker's partner, skipped during tricks.
    pub skipped_seat: Option<Seat>,
    /// Dealer picked up the up-card and must discard back to five.
    pub awaiting_discard: bool,
    pub hands: [Vec<Card>; PLAYERS],
    /// 0-based trick number; None until tricks start.
    pub trick_no: Option<u8>,
    pub trick_leader: Option<Seat>,
    /// Effective suit of the current trick's first play.
    pub trick_lead: Option<Suit>,
    pub trick_plays: Vec<(Seat, Card)>,
    pub completed_tricks: Vec<TrickRecord>,
    /// Recorded exactly once, at round completion or throw-in.
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Fresh round from a deal. Bidding opens at the seat left of the dealer.
    pub fn new(number: u8, dealer: Seat, deal: DealResult) -> Self {
        Self {
            number,
            dealer,
            up_card: deal.up_card,
            kitty: deal.kitty,
            bid_phase: BidPhase::OrderingUp,
            current_bidder: Some(next_seat(dealer)),
            trump: None,
            maker_team: None,
            ordered_up: false,
            loner: false,
            skipped_seat: None,
            awaiting_discard: false,
            hands: deal.hands,
            trick_no: None,
            trick_leader: None,
            trick_lead: None,
            trick_plays: Vec::with_capacity(PLAYERS),
            completed_tricks: Vec::new(),
            outcome: None,
        }
    }

    pub fn completed(&self) -> bool {
        self.outcome.is_some()
    }

    /// Tricks taken per team so far, from completed tricks only.
    pub fn tricks_won(&self) -> [u8; TEAMS] {
        let mut won = [0u8; TEAMS];
        for trick in &self.completed_tricks {
            won[team_of(trick.winning_seat) as usize] += 1;
        }
        won
    }
}

/// Summary kept once a round is scored; the source of cumulative scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub number: u8,
    pub dealer: Seat,
    pub trump: Option<Suit>,
    pub maker_team: Option<Team>,
    pub loner: bool,
    pub outcome: RoundOutcome,
    pub tricks_won: [u8; TEAMS],
}

/// Entire game container, sufficient for every engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub code: String,
    pub phase: GamePhase,
    /// Joined players in join order; at most four.
    pub players: Vec<PlayerSlot>,
    /// Base seed fixed at creation; all shuffles derive from it.
    pub rng_seed: u64,
    pub scores: [u8; TEAMS],
    pub round: Option<RoundState>,
    pub round_history: Vec<RoundSummary>,
    pub winning_team: Option<Team>,
}

impl GameState {
    pub fn new(code: String, rng_seed: u64) -> Self {
        Self {
            code,
            phase: GamePhase::Waiting,
            players: Vec::with_capacity(PLAYERS),
            rng_seed,
            scores: [0; TEAMS],
            round: None,
            round_history: Vec::new(),
            winning_team: None,
        }
    }

    pub fn player_by_session(&self, session_id: &str) -> Option<&PlayerSlot> {
        self.players.iter().find(|p| p.session_id == session_id)
    }

    pub fn seat_of_session(&self, session_id: &str) -> Option<Seat> {
        self.player_by_session(session_id).and_then(|p| p.seat)
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// These live in `domain` so services, snapshots, and tests share a single
/// source of truth for rotation and "who acts next".
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 -> 1 -> 2 -> 3 -> 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Team assignment: seats 0 and 2 are team 0, seats 1 and 3 are team 1.
#[inline]
pub fn team_of(seat: Seat) -> Team {
    seat % 2
}

/// The loner maker's partner, two seats around.
#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

/// First seat to bid or lead: left of the dealer.
#[inline]
pub fn left_of_dealer(dealer: Seat) -> Seat {
    next_seat(dealer)
}

pub fn require_round<'a>(state: &'a GameState, ctx: &'static str) -> Result<&'a RoundState, DomainError> {
    state.round.as_ref().ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: round must exist ({ctx})"))
    })
}

pub fn require_round_mut<'a>(
    state: &'a mut GameState,
    ctx: &'static str,
) -> Result<&'a mut RoundState, DomainError> {
    state.round.as_mut().ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: round must exist ({ctx})"))
    })
}

pub fn require_trump(round: &RoundState, ctx: &'static str) -> Result<Suit, DomainError> {
    round.trump.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: trump must be set ({ctx})"))
    })
}
