//! Trump selection: ordering up, passing, calling, and the dealer discard.
//!
//! Rotation is always clockwise from the seat left of the dealer, wrapping
//! through all four seats exactly once per phase; the dealer bids last.

use crate::domain::cards_types::{Card, Suit};
use crate::domain::scoring::RoundOutcome;
use crate::domain::state::{
    left_of_dealer, next_seat, partner_of, team_of, BidPhase, RoundState, Seat,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a pass did to the bidding state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Pass fell through from ordering-up to calling-trump.
    pub phase_advanced: bool,
    /// Dealer passed in the calling phase: the hand is dead.
    pub thrown_in: bool,
}

fn require_bidder(round: &RoundState, seat: Seat) -> Result<(), DomainError> {
    match round.current_bidder {
        Some(bidder) if bidder == seat => Ok(()),
        Some(_) => Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not this seat's turn to bid",
        )),
        None => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Bidding is over",
        )),
    }
}

/// Accept the up-card's suit as trump. The dealer takes the up-card into
/// hand and owes a discard before tricks can start.
pub fn order_up(round: &mut RoundState, seat: Seat, alone: bool) -> Result<(), DomainError> {
    if round.bid_phase != BidPhase::OrderingUp {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Ordering up is only legal in the first bidding phase",
        ));
    }
    require_bidder(round, seat)?;

    round.trump = Some(round.up_card.suit);
    round.maker_team = Some(team_of(seat));
    round.ordered_up = true;
    round.loner = alone;
    round.skipped_seat = alone.then(|| partner_of(seat));
    round.bid_phase = BidPhase::TrumpSelected;
    round.current_bidder = None;

    // A loner whose partner is the dealer plays that hand dead: no pickup,
    // no discard.
    if round.skipped_seat == Some(round.dealer) {
        round.awaiting_discard = false;
    } else {
        let dealer_hand = &mut round.hands[round.dealer as usize];
        dealer_hand.push(round.up_card);
        dealer_hand.sort();
        round.awaiting_discard = true;
    }

    tracing::debug!(
        round = round.number,
        seat,
        trump = ?round.trump,
        alone,
        "Trump ordered up"
    );
    Ok(())
}

/// Decline to bid. The dealer's pass ends the phase: ordering-up falls
/// through to calling-trump, and a calling-trump pass throws the hand in.
pub fn pass_bidding(round: &mut RoundState, seat: Seat) -> Result<PassOutcome, DomainError> {
    if round.bid_phase == BidPhase::TrumpSelected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Trump has already been selected",
        ));
    }
    require_bidder(round, seat)?;

    if seat != round.dealer {
        round.current_bidder = Some(next_seat(seat));
        return Ok(PassOutcome {
            phase_advanced: false,
            thrown_in: false,
        });
    }

    match round.bid_phase {
        BidPhase::OrderingUp => {
            round.bid_phase = BidPhase::CallingTrump;
            round.current_bidder = Some(left_of_dealer(round.dealer));
            tracing::debug!(round = round.number, "Up-card rejected by all; calling phase");
            Ok(PassOutcome {
                phase_advanced: true,
                thrown_in: false,
            })
        }
        BidPhase::CallingTrump => {
            round.current_bidder = None;
            round.outcome = Some(RoundOutcome::thrown_in());
            tracing::info!(round = round.number, "Hand thrown in, no trump called");
            Ok(PassOutcome {
                phase_advanced: false,
                thrown_in: true,
            })
        }
        BidPhase::TrumpSelected => unreachable!("guarded above"),
    }
}

/// Name trump in the second bidding phase. The up-card's suit was already
/// rejected by all four players and cannot be called.
pub fn call_trump(
    round: &mut RoundState,
    seat: Seat,
    suit: Suit,
    alone: bool,
) -> Result<(), DomainError> {
    if round.bid_phase != BidPhase::CallingTrump {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Calling trump is only legal in the second bidding phase",
        ));
    }
    require_bidder(round, seat)?;
    if suit == round.up_card.suit {
        return Err(DomainError::validation(
            ValidationKind::ForbiddenTrumpSuit,
            "Cannot call the suit of the turned-up card",
        ));
    }

    round.trump = Some(suit);
    round.maker_team = Some(team_of(seat));
    round.loner = alone;
    round.skipped_seat = alone.then(|| partner_of(seat));
    round.bid_phase = BidPhase::TrumpSelected;
    round.current_bidder = None;

    tracing::debug!(round = round.number, seat, trump = ?suit, alone, "Trump called");
    Ok(())
}

/// Dealer returns to five cards after picking up the up-card.
pub fn dealer_discard(round: &mut RoundState, seat: Seat, card: Card) -> Result<(), DomainError> {
    if !round.awaiting_discard {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No discard is pending",
        ));
    }
    if seat != round.dealer {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Only the dealer discards",
        ));
    }

    let dealer_hand = &mut round.hands[round.dealer as usize];
    let Some(pos) = dealer_hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };
    dealer_hand.remove(pos);
    round.awaiting_discard = false;

    tracing::debug!(round = round.number, "Dealer discarded");
    Ok(())
}

/// Open trick play: trick #0 led by the seat left of the dealer (or the
/// next active seat when a loner skips it).
pub fn start_tricks(round: &mut RoundState) -> Result<(), DomainError> {
    if round.bid_phase != BidPhase::TrumpSelected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Tricks cannot start before trump is selected",
        ));
    }
    if round.awaiting_discard {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Dealer must discard before tricks start",
        ));
    }
    if round.trick_no.is_some() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Tricks have already started",
        ));
    }

    let mut leader = left_of_dealer(round.dealer);
    if round.skipped_seat == Some(leader) {
        leader = next_seat(leader);
    }
    round.trick_no = Some(0);
    round.trick_leader = Some(leader);
    round.trick_lead = None;
    Ok(())
}
