use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Card, HAND_SIZE, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::GameError;
use crate::player::Player;
use crate::state::{GameStateView, PlayerId, PlayerView, TurnOutcome};

pub const STARTING_COUNTERS: i32 = 21;

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(player_names: Vec<String>, seed: u64) -> Result<Self, GameError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::InvalidConfiguration(
                "at least two players are required",
            ));
        }
        Ok(Self { player_names, seed })
    }
}

/// Builder that enables deterministic deck injection for testing.
#[derive(Debug)]
pub struct GameBuilder {
    config: GameConfig,
    preset_decks: VecDeque<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(player_names: Vec<String>) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(player_names, DEFAULT_SEED)?,
            preset_decks: VecDeque::new(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Queues a pre-built deck to be consumed verbatim (unshuffled) by the
    /// next `start_round`. May be called repeatedly to script consecutive
    /// rounds; once the queue empties, rounds fall back to shuffled decks.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.preset_decks.push_back(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core Centurion game engine: owns the players, the shared counter pool and
/// the round/turn state machine.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    counters: i32,
    multiplier: u32,
    current_total: u32,
    current_player_idx: PlayerId,
    round_number: u32,
    cards_played_count: Vec<u32>,
    deck: Option<Deck>,
    preset_decks: VecDeque<Vec<Card>>,
    rng: StdRng,
}

impl Game {
    pub fn builder(player_names: Vec<String>) -> Result<GameBuilder, GameError> {
        GameBuilder::new(player_names)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder {
            config,
            preset_decks: VecDeque::new(),
        }
        .build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            preset_decks,
        } = builder;
        let num_players = config.player_names.len();
        for deck in &preset_decks {
            if deck.len() < HAND_SIZE * num_players {
                return Err(GameError::InvalidConfiguration(
                    "preset deck does not contain enough cards to deal every hand",
                ));
            }
        }
        let players = config.player_names.into_iter().map(Player::new).collect();
        Ok(Game {
            players,
            counters: STARTING_COUNTERS,
            multiplier: 1,
            current_total: 0,
            current_player_idx: 0,
            round_number: 0,
            cards_played_count: vec![0; num_players],
            deck: None,
            preset_decks,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    pub fn start_new_game(&mut self) {
        self.counters = STARTING_COUNTERS;
        self.multiplier = 1;
        self.round_number = 0;
        for player in &mut self.players {
            player.reset_score();
        }
        self.start_round();
    }

    /// Deals a fresh round: new deck, 7 cards per player, round state reset.
    pub fn start_round(&mut self) {
        self.round_number += 1;
        let mut deck = match self.preset_decks.pop_front() {
            Some(cards) => Deck::from_cards(cards),
            None => {
                let mut deck = Deck::new();
                deck.shuffle(&mut self.rng);
                deck
            }
        };
        for player in &mut self.players {
            player.clear_hand();
            player.receive(deck.deal(HAND_SIZE));
        }
        self.deck = Some(deck);
        self.current_total = 0;
        self.current_player_idx = 0;
        self.cards_played_count = vec![0; self.players.len()];
    }

    /// Executes one turn: a drawn round grows the multiplier and re-deals,
    /// a scoring stop ends the round (the caller deals the next one after
    /// checking `is_game_over`), anything else passes play along.
    pub fn play_turn(&mut self, card_index: usize) -> Result<TurnOutcome, GameError> {
        if self.deck.is_none() {
            return Err(GameError::NotStarted);
        }

        // Draw check comes first, before any hand is touched.
        if self.players.iter().all(|p| p.hand().is_empty()) {
            self.multiplier += 1;
            self.start_round();
            return Ok(TurnOutcome::RoundDrawn {
                multiplier: self.multiplier,
            });
        }

        let acting = self.current_player_idx;
        // The play counts the moment it is attempted; rolled back when the
        // index turns out to be invalid so a failed call leaves no trace.
        self.cards_played_count[acting] += 1;
        let card = match self.players[acting].play(card_index) {
            Ok(card) => card,
            Err(err) => {
                self.cards_played_count[acting] -= 1;
                return Err(err);
            }
        };
        self.current_total += card.counting_value();

        // Stop on the first multiple of ten at or above 100. Exact 100
        // awards one point per card played this round; every ten past the
        // mark forfeits one of those cards. The net may be zero or negative
        // and is applied as-is.
        if self.current_total >= 100 && self.current_total % 10 == 0 {
            let total_cards: u32 = self.cards_played_count.iter().sum();
            let excess_tens = (self.current_total - 100) / 10;
            let net_cards = total_cards as i32 - excess_tens as i32;
            let points = net_cards * self.multiplier as i32;
            self.players[acting].add_score(points);
            self.counters -= points;
            self.multiplier = 1;
            return Ok(TurnOutcome::RoundScored {
                player: acting,
                points,
            });
        }

        self.current_player_idx = (acting + 1) % self.players.len();
        Ok(TurnOutcome::Continued { player: acting })
    }

    pub fn is_game_over(&self) -> bool {
        self.counters <= 0
    }

    /// Player with the strictly highest score; the first one in construction
    /// order wins ties.
    pub fn declare_winner(&self) -> &Player {
        &self.players[self.declare_winner_index()]
    }

    pub fn declare_winner_index(&self) -> PlayerId {
        let mut best = 0;
        for (id, player) in self.players.iter().enumerate().skip(1) {
            if player.score() > self.players[best].score() {
                best = id;
            }
        }
        best
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn counters(&self) -> i32 {
        self.counters
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn current_total(&self) -> u32 {
        self.current_total
    }

    pub fn current_player_idx(&self) -> PlayerId {
        self.current_player_idx
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn cards_played_count(&self) -> &[u32] {
        &self.cards_played_count
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.as_ref().map(Deck::len).unwrap_or(0)
    }

    /// Snapshot of the full game state for front-ends.
    pub fn state_view(&self) -> GameStateView {
        GameStateView {
            round_number: self.round_number,
            counters: self.counters,
            multiplier: self.multiplier,
            current_total: self.current_total,
            current_player: self.current_player_idx,
            cards_played: self.cards_played_count.clone(),
            game_over: self.is_game_over(),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(id, player)| PlayerView {
                    id,
                    name: player.name().to_string(),
                    score: player.score(),
                    hand: player.hand().to_vec(),
                    is_current: id == self.current_player_idx,
                })
                .collect(),
        }
    }
}
