use rand::Rng;

use crate::bot::Bot;
use crate::state::GameStateView;

/// Baseline bot that plays a uniformly random card from its hand.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_card(&mut self, state: &GameStateView) -> usize {
        let hand_len = state.current_hand().len();
        if hand_len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..hand_len)
    }
}
