//! Card game logic: bower identification, effective suits, trick strength

use super::cards_types::{Card, Rank, Suit};

/// The Jack of the trump suit, highest card in play.
pub fn is_right_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump
}

/// The Jack of the same-color suit, second-highest and counted as trump.
pub fn is_left_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump.same_color()
}

/// The suit a card plays as: the left bower plays as trump, everything else
/// plays as its raw suit.
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    if is_left_bower(card, trump) {
        trump
    } else {
        card.suit
    }
}

/// Whether the hand holds any card whose effective suit matches `suit`.
pub fn hand_has_suit(hand: &[Card], suit: Suit, trump: Suit) -> bool {
    hand.iter().any(|&c| effective_suit(c, trump) == suit)
}

/// Strength of a card within a trick, given trump and the (effective) lead
/// suit. Higher wins; off-suit non-trump cards are worth 0 and can never
/// take the trick. Ties are impossible since no two plays share a card.
pub fn trick_value(card: Card, trump: Suit, lead: Suit) -> u8 {
    if is_right_bower(card, trump) {
        return 100;
    }
    if is_left_bower(card, trump) {
        return 99;
    }
    if card.suit == trump {
        return match card.rank {
            Rank::Ace => 90,
            Rank::King => 80,
            Rank::Queen => 70,
            Rank::Ten => 60,
            Rank::Nine => 50,
            // Jack of trump is the right bower, handled above.
            Rank::Jack => 100,
        };
    }
    if card.suit == lead {
        return match card.rank {
            Rank::Ace => 40,
            Rank::King => 30,
            Rank::Queen => 20,
            Rank::Jack => 15,
            Rank::Ten => 10,
            Rank::Nine => 5,
        };
    }
    0
}

/// Whether `a` beats `b` in a trick with the given trump and lead suit.
pub fn card_beats(a: Card, b: Card, trump: Suit, lead: Suit) -> bool {
    trick_value(a, trump, lead) > trick_value(b, trump, lead)
}
