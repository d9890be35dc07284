//! Card parsing from string representations (e.g., "AS", "9C", "TH")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "10H" is accepted alongside the compact "TH" for the ten.
        let (rank_str, suit_ch) = match s.len() {
            2 => {
                let mut chars = s.chars();
                let r = chars.next().ok_or_else(|| parse_err(s))?;
                let c = chars.next().ok_or_else(|| parse_err(s))?;
                (r.to_string(), c)
            }
            3 if s.starts_with("10") => ("T".to_string(), s.chars().nth(2).ok_or_else(|| parse_err(s))?),
            _ => return Err(parse_err(s)),
        };
        let rank = match rank_str.as_str() {
            "9" => Rank::Nine,
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(parse_err(s)),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(parse_err(s)),
        };
        Ok(Card { suit, rank })
    }
}

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "9C") into Card
/// instances. Fails if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
