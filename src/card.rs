use std::fmt;

use serde::{Deserialize, Serialize};

/// Suit of a standard playing card. Each suit carries a fixed counting
/// multiplier used to derive a card's counting value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 13;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Counting multiplier: Spades x1, Hearts x2, Clubs x3, Diamonds x4.
    #[inline]
    pub fn multiplier(&self) -> u32 {
        match self {
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Clubs => 3,
            Suit::Diamonds => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// Parses a suit from its display name. Unrecognized names yield `None`;
    /// callers decide whether that is an error.
    pub fn from_name(name: &str) -> Option<Suit> {
        match name {
            "Hearts" => Some(Suit::Hearts),
            "Diamonds" => Some(Suit::Diamonds),
            "Clubs" => Some(Suit::Clubs),
            "Spades" => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card: a face value paired with a suit.
///
/// The type stores the value verbatim without bounds checking; the deck is
/// responsible for only ever constructing values in `1..=13`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: u8,
    pub suit: Suit,
}

impl Card {
    #[inline]
    pub fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Counting value = face value x suit multiplier.
    #[inline]
    pub fn counting_value(&self) -> u32 {
        u32::from(self.value) * self.suit.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_value_applies_suit_multiplier() {
        assert_eq!(Card::new(10, Suit::Spades).counting_value(), 10);
        assert_eq!(Card::new(10, Suit::Hearts).counting_value(), 20);
        assert_eq!(Card::new(10, Suit::Clubs).counting_value(), 30);
        assert_eq!(Card::new(10, Suit::Diamonds).counting_value(), 40);
    }

    #[test]
    fn suit_names_round_trip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_name(suit.name()), Some(suit));
        }
        assert_eq!(Suit::from_name("Cups"), None);
    }
}
