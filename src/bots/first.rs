use crate::bot::Bot;
use crate::state::GameStateView;

/// Simplest possible strategy: always play the first card in hand.
#[derive(Default)]
pub struct FirstCardBot;

impl Bot for FirstCardBot {
    fn select_card(&mut self, _state: &GameStateView) -> usize {
        0
    }
}
