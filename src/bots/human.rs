use std::io::{self, Write};

use crate::bot::Bot;
use crate::state::GameStateView;
use crate::visualize::render_state;

/// Interactive bot that asks a human for a hand index via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_card(&mut self, state: &GameStateView) -> usize {
        let hand_len = state.current_hand().len();
        assert!(hand_len > 0, "bots are only consulted with a non-empty hand");
        loop {
            println!("\n=== {}'s turn ===", self.name);
            println!("{}", render_state(state));
            print!("Select card index (0-{}), or 'q' to quit: ", hand_len - 1);
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if choice < hand_len {
                return choice;
            }
            println!("Index out of range, try again.");
        }
    }
}
