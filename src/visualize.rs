use std::fmt::Write;

use crate::card::Card;
use crate::state::GameStateView;

/// Customize state rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hands: bool,
    pub show_counting_values: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hands: true,
            show_counting_values: true,
        }
    }
}

/// One-line description of a card, e.g. `10 of Hearts (=20)`.
pub fn describe_card(card: &Card) -> String {
    format!(
        "{} of {} (={})",
        card.value,
        card.suit,
        card.counting_value()
    )
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Round {} | Counters: {} | Total: {} | Multiplier: x{}",
        state.round_number, state.counters, state.current_total, state.multiplier
    );
    for player in &state.players {
        let marker = if player.is_current { ">" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {} (score {}, {} played this round)",
            player.name, player.score, state.cards_played[player.id]
        );
        if !options.show_hands {
            continue;
        }
        if player.hand.is_empty() {
            let _ = writeln!(out, "    (no cards left)");
        }
        for (index, card) in player.hand.iter().enumerate() {
            if options.show_counting_values {
                let _ = writeln!(out, "    [{index}] {}", describe_card(card));
            } else {
                let _ = writeln!(out, "    [{index}] {} of {}", card.value, card.suit);
            }
        }
    }
    if state.game_over {
        let _ = writeln!(out, "Game over: counters exhausted.");
    }
    out
}
