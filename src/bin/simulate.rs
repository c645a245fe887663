use std::error::Error;
use std::process;

use clap::Parser;

use centurion::{Bot, Game, TurnOutcome, create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FF_EE00_5EED_0001;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run bot-vs-bot Centurion games and report win counts."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 100)]
    games: usize,

    /// Base RNG seed (deck and bot RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game; games exceeding it are aborted
    #[arg(long = "max-turns", default_value_t = 10_000)]
    max_turns: usize,

    /// Bot specs (2 or more): human[:name], random[:seed], first
    bots: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let bot_specs = if args.bots.is_empty() {
        vec![String::from("first"), String::from("random")]
    } else {
        args.bots.clone()
    };
    if bot_specs.len() < 2 {
        return Err(format!("expected at least 2 players, received {}", bot_specs.len()).into());
    }

    let names: Vec<String> = bot_specs
        .iter()
        .enumerate()
        .map(|(index, spec)| format!("{} {index}", label_for_spec(spec)))
        .collect();

    let mut wins = vec![0usize; bot_specs.len()];
    let mut aborted = 0usize;
    for game_index in 0..args.games {
        let game_seed = args.seed.wrapping_add(game_index as u64);
        let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(bot_specs.len());
        for (index, spec) in bot_specs.iter().enumerate() {
            bots.push(create_bot_from_spec(spec, index, game_seed)?);
        }
        match play_one_game(names.clone(), game_seed, &mut bots, args.max_turns)? {
            Some(winner) => wins[winner] += 1,
            None => aborted += 1,
        }
    }

    println!("Simulated {} game(s):", args.games);
    for (index, spec) in bot_specs.iter().enumerate() {
        println!("  {} ({spec}): {} win(s)", names[index], wins[index]);
    }
    if aborted > 0 {
        println!("  aborted at the turn cap: {aborted}");
    }
    Ok(())
}

/// Plays a single game to completion; returns the winner's index, or `None`
/// when the turn cap was hit first.
fn play_one_game(
    names: Vec<String>,
    seed: u64,
    bots: &mut [Box<dyn Bot>],
    max_turns: usize,
) -> Result<Option<usize>, Box<dyn Error>> {
    let mut game = Game::builder(names)?.with_seed(seed).build()?;
    game.start_new_game();

    for _ in 0..max_turns {
        let all_empty = game.players().iter().all(|p| p.hand().is_empty());
        let choice = if all_empty {
            // The engine detects the drawn round itself; the index is unused.
            0
        } else {
            bots[game.current_player_idx()].select_card(&game.state_view())
        };
        match game.play_turn(choice)? {
            TurnOutcome::RoundScored { .. } => {
                if game.is_game_over() {
                    return Ok(Some(game.declare_winner_index()));
                }
                game.start_round();
            }
            TurnOutcome::RoundDrawn { .. } | TurnOutcome::Continued { .. } => {}
        }
    }
    Ok(None)
}
