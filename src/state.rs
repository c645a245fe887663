use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Result of a single `play_turn` call.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Every hand was empty: the round is drawn, the multiplier has grown
    /// and a fresh round has already been dealt.
    RoundDrawn { multiplier: u32 },
    /// The running total stopped on a multiple of ten at or above 100. The
    /// round is over; the caller checks `is_game_over` before dealing again.
    /// `points` may be zero or negative on a deep overshoot.
    RoundScored { player: PlayerId, points: i32 },
    /// No scoring stop; play passed to the next player. Names the player who
    /// just acted.
    Continued { player: PlayerId },
}

/// Public portion of one player's state, as rendered by front-ends. Hands
/// are open information in this game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    pub hand: Vec<Card>,
    pub is_current: bool,
}

/// Snapshot of everything a front-end needs to render a turn.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub round_number: u32,
    pub counters: i32,
    pub multiplier: u32,
    pub current_total: u32,
    pub current_player: PlayerId,
    pub cards_played: Vec<u32>,
    pub players: Vec<PlayerView>,
    pub game_over: bool,
}

impl GameStateView {
    /// Hand of the player whose turn it is.
    pub fn current_hand(&self) -> &[Card] {
        &self.players[self.current_player].hand
    }
}
