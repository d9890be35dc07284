//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots carry only what a caller may see: the header, the current
//! round's public facts, and the viewing player's own hand.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::scoring::RoundOutcome;
use crate::domain::state::{BidPhase, GamePhase, GameState, RoundState, Seat, Team};
use crate::domain::tricks::{current_turn_seat, legal_moves};

/// Public info about a joined player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub display_name: String,
    pub seat: Option<Seat>,
    pub team: Option<Team>,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub code: String,
    pub phase: GamePhase,
    pub players: Vec<PlayerPublic>,
    pub scores: [u8; 2],
    pub winning_team: Option<Team>,
}

/// Shared public round facts (no private hands).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub number: u8,
    pub dealer: Seat,
    pub up_card: Card,
    pub trump: Option<Suit>,
    pub maker_team: Option<Team>,
    pub ordered_up: bool,
    pub loner: bool,
    pub tricks_won: [u8; 2],
}

/// Adjacently tagged union of phase-specific round snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum RoundSnapshot {
    Bidding(BiddingSnapshot),
    Discard(DiscardSnapshot),
    Trick(TrickSnapshot),
    Complete(CompleteSnapshot),
}

/// Bidding phase snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub round: RoundPublic,
    pub bid_phase: BidPhase,
    pub to_act: Option<Seat>,
    /// The up-card's suit, uncallable in the calling-trump phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_suit: Option<Suit>,
}

/// Dealer-discard snapshot (trump was ordered up).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscardSnapshot {
    pub round: RoundPublic,
    pub to_act: Seat,
}

/// Trick-playing snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub round: RoundPublic,
    pub trick_no: u8,
    pub leader: Seat,
    pub to_act: Option<Seat>,
    pub current_trick: Vec<(Seat, Card)>,
    /// Last completed trick for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

/// Completed (or thrown-in) round snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompleteSnapshot {
    pub round: RoundPublic,
    pub outcome: RoundOutcome,
}

/// The viewing player's private slice of the round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerSnapshot {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub playable: Vec<Card>,
}

/// Top-level snapshot combining header, round, and viewer data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerSnapshot>,
}

/// Entry point: produce a snapshot of the current game state for an
/// optional viewing session. Never panics; tolerates transitional states.
pub fn snapshot(state: &GameState, viewer_session: Option<&str>) -> GameSnapshot {
    let game = GameHeader {
        code: state.code.clone(),
        phase: state.phase,
        players: state
            .players
            .iter()
            .map(|p| PlayerPublic {
                display_name: p.display_name.clone(),
                seat: p.seat,
                team: p.team,
            })
            .collect(),
        scores: state.scores,
        winning_team: state.winning_team,
    };

    let round = state.round.as_ref().map(snapshot_round);
    let viewer = viewer_session
        .and_then(|session| state.seat_of_session(session))
        .and_then(|seat| {
            state.round.as_ref().map(|round| ViewerSnapshot {
                seat,
                hand: round.hands[seat as usize].clone(),
                playable: legal_moves(round, seat),
            })
        });

    GameSnapshot {
        game,
        round,
        viewer,
    }
}

fn build_round_public(round: &RoundState) -> RoundPublic {
    RoundPublic {
        number: round.number,
        dealer: round.dealer,
        up_card: round.up_card,
        trump: round.trump,
        maker_team: round.maker_team,
        ordered_up: round.ordered_up,
        loner: round.loner,
        tricks_won: round.tricks_won(),
    }
}

fn snapshot_round(round: &RoundState) -> RoundSnapshot {
    let public = build_round_public(round);

    if let Some(outcome) = round.outcome {
        return RoundSnapshot::Complete(CompleteSnapshot {
            round: public,
            outcome,
        });
    }
    if round.awaiting_discard {
        return RoundSnapshot::Discard(DiscardSnapshot {
            to_act: round.dealer,
            round: public,
        });
    }
    if let (Some(trick_no), Some(leader)) = (round.trick_no, round.trick_leader) {
        return RoundSnapshot::Trick(TrickSnapshot {
            round: public,
            trick_no,
            leader,
            to_act: current_turn_seat(round),
            current_trick: round.trick_plays.clone(),
            last_trick: round.completed_tricks.last().map(|t| t.plays.clone()),
        });
    }

    let forbidden_suit = match round.bid_phase {
        BidPhase::CallingTrump => Some(round.up_card.suit),
        _ => None,
    };
    RoundSnapshot::Bidding(BiddingSnapshot {
        round: public,
        bid_phase: round.bid_phase,
        to_act: round.current_bidder,
        forbidden_suit,
    })
}
