use crate::domain::bidding::{dealer_discard, order_up, pass_bidding, start_tricks};
use crate::domain::lifecycle::{join_game, start_game};
use crate::domain::scoring::RoundOutcome;
use crate::domain::snapshot::{snapshot, RoundSnapshot};
use crate::domain::state::{BidPhase, GamePhase, GameState};

fn active_game() -> GameState {
    let mut game = GameState::new("SNAPCODE".to_string(), 5);
    for i in 0..4 {
        join_game(&mut game, &format!("sess-{i}"), &format!("Player {i}")).unwrap();
    }
    start_game(&mut game).unwrap();
    game
}

fn session_of_seat(game: &GameState, seat: u8) -> String {
    game.players
        .iter()
        .find(|p| p.seat == Some(seat))
        .map(|p| p.session_id.clone())
        .unwrap()
}

#[test]
fn waiting_games_snapshot_without_a_round() {
    let mut game = GameState::new("SNAPCODE".to_string(), 5);
    join_game(&mut game, "sess-0", "Ada").unwrap();
    let snap = snapshot(&game, Some("sess-0"));

    assert_eq!(snap.game.phase, GamePhase::Waiting);
    assert_eq!(snap.game.players.len(), 1);
    assert!(snap.round.is_none());
    assert!(snap.viewer.is_none());
}

#[test]
fn ordering_phase_has_a_bidder_and_no_forbidden_suit() {
    let game = active_game();
    let snap = snapshot(&game, None);
    let Some(RoundSnapshot::Bidding(bidding)) = snap.round else {
        panic!("expected a bidding snapshot");
    };
    assert_eq!(bidding.bid_phase, BidPhase::OrderingUp);
    assert!(bidding.to_act.is_some());
    assert!(bidding.forbidden_suit.is_none());
}

#[test]
fn calling_phase_exposes_the_forbidden_suit() {
    let mut game = active_game();
    let round = game.round.as_mut().unwrap();
    let up_suit = round.up_card.suit;
    let mut seat = round.current_bidder.unwrap();
    for _ in 0..4 {
        pass_bidding(round, seat).unwrap();
        seat = (seat + 1) % 4;
    }
    assert_eq!(round.bid_phase, BidPhase::CallingTrump);

    let snap = snapshot(&game, None);
    let Some(RoundSnapshot::Bidding(bidding)) = snap.round else {
        panic!("expected a bidding snapshot");
    };
    assert_eq!(bidding.forbidden_suit, Some(up_suit));
}

#[test]
fn discard_phase_points_at_the_dealer() {
    let mut game = active_game();
    let round = game.round.as_mut().unwrap();
    let bidder = round.current_bidder.unwrap();
    order_up(round, bidder, false).unwrap();
    let dealer = round.dealer;

    let snap = snapshot(&game, None);
    let Some(RoundSnapshot::Discard(discard)) = snap.round else {
        panic!("expected a discard snapshot");
    };
    assert_eq!(discard.to_act, dealer);
}

#[test]
fn trick_phase_carries_turn_and_plays() {
    let mut game = active_game();
    let round = game.round.as_mut().unwrap();
    let bidder = round.current_bidder.unwrap();
    order_up(round, bidder, false).unwrap();
    let dealer = round.dealer;
    let card = round.hands[dealer as usize][0];
    dealer_discard(round, dealer, card).unwrap();
    start_tricks(round).unwrap();
    let leader = round.trick_leader.unwrap();

    let snap = snapshot(&game, None);
    let Some(RoundSnapshot::Trick(trick)) = snap.round else {
        panic!("expected a trick snapshot");
    };
    assert_eq!(trick.trick_no, 0);
    assert_eq!(trick.leader, leader);
    assert_eq!(trick.to_act, Some(leader));
    assert!(trick.current_trick.is_empty());
    assert!(trick.last_trick.is_none());
}

#[test]
fn complete_phase_reports_the_outcome() {
    let mut game = active_game();
    game.round.as_mut().unwrap().outcome = Some(RoundOutcome::thrown_in());

    let snap = snapshot(&game, None);
    let Some(RoundSnapshot::Complete(complete)) = snap.round else {
        panic!("expected a complete snapshot");
    };
    assert_eq!(complete.outcome, RoundOutcome::thrown_in());
}

#[test]
fn viewer_sees_only_their_own_hand() {
    let game = active_game();
    let sess = session_of_seat(&game, 2);
    let snap = snapshot(&game, Some(&sess));

    let viewer = snap.viewer.unwrap();
    assert_eq!(viewer.seat, 2);
    assert_eq!(viewer.hand, game.round.as_ref().unwrap().hands[2]);

    let anon = snapshot(&game, Some("stranger"));
    assert!(anon.viewer.is_none());
}

#[test]
fn snapshots_serialize_with_a_phase_tag() {
    let game = active_game();
    let snap = snapshot(&game, None);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["round"]["phase"], "Bidding");
    assert!(json["round"]["data"]["to_act"].is_number());
    assert!(json.get("viewer").is_none());
}
