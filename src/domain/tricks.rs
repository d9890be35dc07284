//! Trick play: turn order, legality, and winner determination.

use crate::domain::cards_logic::{effective_suit, hand_has_suit, trick_value};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::scoring::score_round;
use crate::domain::state::{next_seat, require_trump, RoundState, Seat, TrickRecord};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed a trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Whether this play completed the round (outcome is now recorded).
    pub round_completed: bool,
}

/// Plays needed to complete a trick: four, or three when a loner's partner
/// sits out.
pub fn plays_per_trick(round: &RoundState) -> usize {
    if round.skipped_seat.is_some() {
        PLAYERS - 1
    } else {
        PLAYERS
    }
}

/// Seat expected to play next, walking clockwise from the trick leader and
/// skipping the loner's partner. None outside trick play or when the trick
/// is full.
pub fn current_turn_seat(round: &RoundState) -> Option<Seat> {
    let leader = round.trick_leader?;
    if round.completed() || round.trick_plays.len() >= plays_per_trick(round) {
        return None;
    }
    let mut seat = leader;
    let mut remaining = round.trick_plays.len();
    // At most one seat is skipped, so this terminates within eight steps.
    loop {
        if round.skipped_seat != Some(seat) {
            if remaining == 0 {
                return Some(seat);
            }
            remaining -= 1;
        }
        seat = next_seat(seat);
    }
}

/// Whether a card may be played from this hand given the (effective) lead
/// suit and trump. A hand void in the lead suit may discard anything,
/// including trump.
pub fn is_legal_play(
    hand: &[Card],
    card: Card,
    lead: Option<Suit>,
    trump: Suit,
) -> bool {
    if !hand.contains(&card) {
        return false;
    }
    let Some(lead) = lead else {
        return true;
    };
    effective_suit(card, trump) == lead || !hand_has_suit(hand, lead, trump)
}

/// Compute legal cards the seat may play, independent of turn enforcement.
pub fn legal_moves(round: &RoundState, seat: Seat) -> Vec<Card> {
    let Some(trump) = round.trump else {
        return Vec::new();
    };
    if round.trick_no.is_none() || round.completed() {
        return Vec::new();
    }
    let hand = &round.hands[seat as usize];
    let mut v: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| is_legal_play(hand, c, round.trick_lead, trump))
        .collect();
    v.sort();
    v
}

/// Play a card into the current trick, enforcing turn, suit-following, and
/// phase. On the trick's final play the winner is determined immediately;
/// on the round's final trick the outcome is scored and recorded.
pub fn play_card(round: &mut RoundState, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
    if round.trick_no.is_none() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Tricks have not started",
        ));
    }
    if round.completed() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Round is already complete",
        ));
    }
    let trump = require_trump(round, "play_card")?;

    let turn = current_turn_seat(round).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: no seat holds the turn (play_card)")
    })?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    // Card in hand (checked before legality so the error is precise).
    let pos_opt = round.hands[seat as usize].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };
    if !is_legal_play(&round.hands[seat as usize], card, round.trick_lead, trump) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            "Must follow suit",
        ));
    }

    // The first play fixes the lead suit (a led left bower leads trump).
    if round.trick_plays.is_empty() {
        round.trick_lead = Some(effective_suit(card, trump));
    }

    let removed = round.hands[seat as usize].remove(pos);
    round.trick_plays.push((seat, removed));

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        round_completed: false,
    };
    if round.trick_plays.len() < plays_per_trick(round) {
        return Ok(result);
    }

    // Resolve the completed trick.
    let winner = resolve_current_trick(round).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: full trick must have a winner")
    })?;
    let trick_no = round.trick_no.unwrap_or(0);
    let lead_seat = round.trick_leader.unwrap_or(seat);
    round.completed_tricks.push(TrickRecord {
        number: trick_no,
        lead_seat,
        winning_seat: winner,
        plays: std::mem::take(&mut round.trick_plays),
    });
    round.trick_lead = None;
    result.trick_completed = true;
    result.trick_winner = Some(winner);

    tracing::debug!(round = round.number, trick = trick_no, winner, "Trick complete");

    if round.completed_tricks.len() == TRICKS_PER_ROUND {
        round.trick_no = None;
        round.trick_leader = None;
        round.outcome = Some(score_round(round)?);
        result.round_completed = true;
        return Ok(result);
    }

    round.trick_no = Some(trick_no + 1);
    round.trick_leader = Some(winner);
    Ok(result)
}

/// Winner of the current trick if it is full; the play with the strictly
/// highest strength takes it.
pub fn resolve_current_trick(round: &RoundState) -> Option<Seat> {
    if round.trick_plays.len() < plays_per_trick(round) {
        return None;
    }
    let trump = round.trump?;
    let lead = round.trick_lead?;

    let mut best: Option<(Seat, u8)> = None;
    for &(seat, card) in &round.trick_plays {
        let value = trick_value(card, trump, lead);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((seat, value)),
        }
    }
    best.map(|(seat, _)| seat)
}
