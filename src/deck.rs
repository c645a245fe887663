use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_CARD_VALUE, MIN_CARD_VALUE, Suit};

/// Ordered collection of the cards remaining for one round.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card deck in deterministic suit-major, value-minor
    /// order. Callers shuffle before dealing.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in MIN_CARD_VALUE..=MAX_CARD_VALUE {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }

    /// Wraps a pre-built card sequence, used to script rounds in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomizes the card order in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `count` cards. Callers only ever deal
    /// amounts known to be available; if `count` exceeds the remainder, the
    /// shorter remainder is returned and the deck is left empty.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn multiset(cards: &[Card]) -> HashSet<(u8, Suit)> {
        cards.iter().map(|c| (c.value, c.suit)).collect()
    }

    #[test]
    fn full_deck_has_52_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(multiset(deck.cards()).len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_preserves_card_multiset() {
        let mut deck = Deck::new();
        let before = multiset(deck.cards());
        let mut rng = StdRng::seed_from_u64(42);
        deck.shuffle(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(multiset(deck.cards()), before);
    }

    #[test]
    fn deal_takes_the_prefix_and_conserves_cards() {
        let mut deck = Deck::new();
        let before: Vec<Card> = deck.cards().to_vec();
        let dealt = deck.deal(7);
        assert_eq!(dealt, before[..7].to_vec());
        assert_eq!(deck.len(), DECK_SIZE - 7);
        let mut recombined = dealt;
        recombined.extend_from_slice(deck.cards());
        assert_eq!(recombined, before);
    }

    #[test]
    fn dealing_more_than_remaining_empties_the_deck() {
        let mut deck = Deck::from_cards(vec![Card::new(3, Suit::Clubs)]);
        let dealt = deck.deal(5);
        assert_eq!(dealt.len(), 1);
        assert!(deck.is_empty());
    }
}
