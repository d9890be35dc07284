use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::deal;
use crate::domain::scoring::ScoreReason;
use crate::domain::state::{BidPhase, RoundState, Seat};
use crate::domain::tricks::{
    current_turn_seat, is_legal_play, legal_moves, play_card, plays_per_trick,
};
use crate::errors::domain::{DomainError, ValidationKind};

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

fn hand(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| c(t)).collect()
}

/// A round mid-trick-play with fixed hands, trump, and leader.
fn trick_round(trump: Suit, leader: Seat, hands: [Vec<Card>; 4]) -> RoundState {
    let mut round = RoundState::new(1, 3, deal(7));
    round.hands = hands;
    round.trump = Some(trump);
    round.maker_team = Some(0);
    round.bid_phase = BidPhase::TrumpSelected;
    round.current_bidder = None;
    round.trick_no = Some(0);
    round.trick_leader = Some(leader);
    round.trick_lead = None;
    round
}

#[test]
fn right_bower_wins_over_plain_trump_and_lead() {
    // Hearts are trump; seat 1 leads the nine of spades.
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [hand(&["KS"]), hand(&["9S"]), hand(&["JH"]), hand(&["TS"])],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("JH")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let result = play_card(&mut round, 0, c("KS")).unwrap();

    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(2));
}

#[test]
fn left_bower_counts_as_trump_and_wins() {
    // Hearts are trump, so the jack of diamonds is the second-highest card.
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [hand(&["KS"]), hand(&["9S"]), hand(&["JD"]), hand(&["TS"])],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("JD")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let result = play_card(&mut round, 0, c("KS")).unwrap();

    assert_eq!(result.trick_winner, Some(2));
}

#[test]
fn highest_of_the_lead_suit_wins_without_trump() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [hand(&["AS"]), hand(&["9S"]), hand(&["QS"]), hand(&["TS"])],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("QS")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let result = play_card(&mut round, 0, c("AS")).unwrap();

    assert_eq!(result.trick_winner, Some(0));
}

#[test]
fn must_follow_suit_when_able() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [
            hand(&["AS", "9D"]),
            hand(&["9S"]),
            hand(&["QS"]),
            hand(&["TS"]),
        ],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("QS")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let err = play_card(&mut round, 0, c("9D")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MustFollowSuit, _)
    ));
}

#[test]
fn a_void_hand_may_play_anything_including_trump() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [
            hand(&["9H", "9D"]),
            hand(&["9S"]),
            hand(&["QS"]),
            hand(&["TS"]),
        ],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("QS")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let result = play_card(&mut round, 0, c("9H")).unwrap();
    // The lone trump takes the spade trick.
    assert_eq!(result.trick_winner, Some(0));
}

#[test]
fn left_bower_must_follow_a_trump_lead() {
    // Hearts led, hearts trump; the jack of diamonds is effectively a heart,
    // so holding it means the hand is not void.
    let hand_with_left = hand(&["JD", "9C"]);
    assert!(is_legal_play(&hand_with_left, c("JD"), Some(Suit::Hearts), Suit::Hearts));
    assert!(!is_legal_play(&hand_with_left, c("9C"), Some(Suit::Hearts), Suit::Hearts));
}

#[test]
fn a_led_left_bower_sets_the_lead_to_trump() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [
            hand(&["9H", "AC"]),
            hand(&["JD"]),
            hand(&["QS"]),
            hand(&["TS"]),
        ],
    );
    play_card(&mut round, 1, c("JD")).unwrap();
    assert_eq!(round.trick_lead, Some(Suit::Hearts));
    // Seat 2 is void in hearts and may discard; seat 0 must follow with a heart.
    play_card(&mut round, 2, c("QS")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    let err = play_card(&mut round, 0, c("AC")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MustFollowSuit, _)
    ));
    play_card(&mut round, 0, c("9H")).unwrap();
}

#[test]
fn out_of_turn_and_unheld_cards_are_rejected() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [hand(&["AS"]), hand(&["9S"]), hand(&["QS"]), hand(&["TS"])],
    );
    let err = play_card(&mut round, 3, c("TS")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));
    let err = play_card(&mut round, 1, c("AH")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardNotInHand, _)
    ));
    // State is untouched after the rejections.
    assert!(round.trick_plays.is_empty());
    assert_eq!(round.trick_lead, None);
}

#[test]
fn the_trick_winner_leads_the_next_trick() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [
            hand(&["AS", "9C"]),
            hand(&["9S", "TC"]),
            hand(&["QS", "JC"]),
            hand(&["TS", "QC"]),
        ],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("QS")).unwrap();
    play_card(&mut round, 3, c("TS")).unwrap();
    play_card(&mut round, 0, c("AS")).unwrap();

    assert_eq!(round.trick_no, Some(1));
    assert_eq!(round.trick_leader, Some(0));
    assert_eq!(round.trick_lead, None);
    assert_eq!(current_turn_seat(&round), Some(0));
    assert_eq!(round.completed_tricks.len(), 1);
    assert_eq!(round.completed_tricks[0].winning_seat, 0);
}

#[test]
fn legal_moves_filters_to_the_lead_suit() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [
            hand(&["AS", "9D", "TS"]),
            hand(&["9S"]),
            hand(&["QS"]),
            hand(&["QC"]),
        ],
    );
    play_card(&mut round, 1, c("9S")).unwrap();
    let moves = legal_moves(&round, 0);
    assert_eq!(moves, hand(&["TS", "AS"]));
}

#[test]
fn five_tricks_complete_the_round_with_an_outcome() {
    // Seat 2 holds all the trump and sweeps every trick.
    let mut round = trick_round(
        Suit::Hearts,
        0,
        [
            hand(&["AS", "KS", "QS", "JS", "TS"]),
            hand(&["AC", "KC", "QC", "JC", "TC"]),
            hand(&["AH", "KH", "QH", "JH", "TH"]),
            hand(&["AD", "KD", "QD", "JD", "TD"]),
        ],
    );
    let mut last = None;
    while let Some(seat) = current_turn_seat(&round) {
        let card = legal_moves(&round, seat)[0];
        last = Some(play_card(&mut round, seat, card).unwrap());
        if round.completed() {
            break;
        }
    }

    let result = last.unwrap();
    assert!(result.round_completed);
    assert!(round.completed());
    assert_eq!(round.completed_tricks.len(), 5);
    assert_eq!(round.tricks_won(), [5, 0]);
    let outcome = round.outcome.unwrap();
    assert_eq!(outcome.reason, ScoreReason::Sweep);
    assert_eq!(outcome.points, 2);
    assert_eq!(outcome.scoring_team, Some(0));

    // No further plays are accepted.
    let err = play_card(&mut round, 2, c("AH")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn loner_tricks_take_three_plays_and_skip_the_partner() {
    let mut round = trick_round(
        Suit::Hearts,
        1,
        [hand(&["AS"]), hand(&["9S"]), hand(&["QS"]), hand(&["TS"])],
    );
    round.loner = true;
    round.skipped_seat = Some(3);

    assert_eq!(plays_per_trick(&round), 3);
    play_card(&mut round, 1, c("9S")).unwrap();
    play_card(&mut round, 2, c("QS")).unwrap();
    assert_eq!(current_turn_seat(&round), Some(0));
    let err = play_card(&mut round, 3, c("TS")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));
    let result = play_card(&mut round, 0, c("AS")).unwrap();
    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(0));
    // The skipped seat's hand is untouched.
    assert_eq!(round.hands[3], hand(&["TS"]));
}
