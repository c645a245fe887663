//! Centurion card-counting game engine with pluggable bots and CLI front-ends.

pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod state;
pub mod visualize;

pub use crate::bot::Bot;
pub use crate::bots::{FirstCardBot, HumanBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::card::{Card, DECK_SIZE, HAND_SIZE, Suit};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig, STARTING_COUNTERS};
pub use crate::player::Player;
pub use crate::state::{GameStateView, PlayerId, PlayerView, TurnOutcome};
pub use crate::visualize::{describe_card, render_state};
