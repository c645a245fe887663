use crate::state::GameStateView;

/// Interface for strategies that pick which card to play on their turn.
///
/// Implementations are only consulted while the current player's hand is
/// non-empty; the returned index must lie within that hand.
pub trait Bot {
    fn select_card(&mut self, state: &GameStateView) -> usize;
}
