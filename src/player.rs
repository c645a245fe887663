use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::GameError;

/// A participant in the game: a name, the current hand, and a cumulative
/// score. Hands and scores are mutated only by the game engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cumulative score; may go negative on penalty rounds.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Appends dealt cards to the end of the hand, preserving arrival order.
    pub(crate) fn receive(&mut self, cards: Vec<Card>) {
        self.hand.extend(cards);
    }

    /// Removes and returns the card at `index`, shifting later cards left.
    pub(crate) fn play(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::HandIndex(index));
        }
        Ok(self.hand.remove(index))
    }

    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    pub(crate) fn add_score(&mut self, points: i32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use crate::card::Suit;

    use super::*;

    #[test]
    fn receive_appends_in_arrival_order() {
        let mut player = Player::new("A");
        player.receive(vec![Card::new(1, Suit::Spades), Card::new(2, Suit::Hearts)]);
        player.receive(vec![Card::new(3, Suit::Clubs)]);
        let values: Vec<u8> = player.hand().iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn play_removes_at_index_and_preserves_order() {
        let mut player = Player::new("A");
        player.receive(vec![
            Card::new(1, Suit::Spades),
            Card::new(2, Suit::Spades),
            Card::new(3, Suit::Spades),
        ]);
        let played = player.play(1).unwrap();
        assert_eq!(played.value, 2);
        let values: Vec<u8> = player.hand().iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn play_out_of_range_is_an_error() {
        let mut player = Player::new("A");
        player.receive(vec![Card::new(1, Suit::Spades)]);
        assert_eq!(player.play(1), Err(GameError::HandIndex(1)));
        assert_eq!(player.hand().len(), 1);
    }
}
