//! Deterministic deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::{DECK_SIZE, HAND_SIZE, KITTY_SIZE, PLAYERS};

/// The 24 canonical euchre cards in standard order.
pub fn euchre_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A full deal: four 5-card hands in seat order, the turned-up card, and
/// the three unused kitty cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealResult {
    pub hands: [Vec<Card>; PLAYERS],
    pub up_card: Card,
    pub kitty: [Card; KITTY_SIZE],
}

/// Shuffle the full deck with a seeded Fisher-Yates and slice it into four
/// hands, the up-card, and the kitty. Deterministic for a given seed; the
/// seed itself is drawn from entropy at game creation, so every ordering of
/// the deck is reachable.
pub fn deal(seed: u64) -> DealResult {
    let mut deck = euchre_deck();
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        *hand_slot = hand;
    }

    let up_card = deck[PLAYERS * HAND_SIZE];
    let kitty = [
        deck[PLAYERS * HAND_SIZE + 1],
        deck[PLAYERS * HAND_SIZE + 2],
        deck[PLAYERS * HAND_SIZE + 3],
    ];

    DealResult {
        hands,
        up_card,
        kitty,
    }
}
