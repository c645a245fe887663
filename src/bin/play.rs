use std::error::Error;
use std::io::{self, Write};
use std::process;

use centurion::{Game, TurnOutcome, describe_card, render_state};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let mut seed = DEFAULT_SEED;
    let mut names = vec![String::from("Player 1"), String::from("Player 2")];
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--players" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--players requires a comma-separated list".to_string())?;
                names = value.split(',').map(|n| n.trim().to_string()).collect();
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unrecognized argument: {other}").into()),
        }
    }

    println!("Welcome to Centurion!");
    let mut game_index = 0u64;
    loop {
        prompt("Press [Enter] to start a new game...")?;
        run_game(names.clone(), seed.wrapping_add(game_index))?;
        game_index += 1;
        let answer = prompt("\nPlay again? (Y/N): ")?;
        if !answer.trim().to_ascii_lowercase().starts_with('y') {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

/// Runs one full game (all rounds) and returns when it is over.
fn run_game(names: Vec<String>, seed: u64) -> Result<(), Box<dyn Error>> {
    let mut game = Game::builder(names)?.with_seed(seed).build()?;
    game.start_new_game();

    loop {
        // Drawn round: the engine detects it and deals the next round.
        if game.players().iter().all(|p| p.hand().is_empty()) {
            match game.play_turn(0)? {
                TurnOutcome::RoundDrawn { multiplier } => {
                    println!("\nDraw - no scoring. Multiplier is now x{multiplier}.");
                    prompt("Press [Enter] to start the next round...")?;
                    continue;
                }
                outcome => return Err(format!("unexpected outcome on draw: {outcome:?}").into()),
            }
        }

        println!("\n{}", render_state(&game.state_view()));
        let current_idx = game.current_player_idx();
        let current_name = game.players()[current_idx].name().to_string();
        let hand_len = game.players()[current_idx].hand().len();
        println!("{current_name}, it's your turn.");
        let choice = read_card_index(hand_len)?;
        let played = game.players()[current_idx].hand()[choice];

        match game.play_turn(choice)? {
            TurnOutcome::Continued { .. } => {
                println!("\n{current_name} played {}!", describe_card(&played));
                println!("New total: {}", game.current_total());
                let next = &game.players()[game.current_player_idx()];
                println!("Next turn: {}", next.name());
            }
            TurnOutcome::RoundScored { player, points } => {
                println!("\n{current_name} played {}!", describe_card(&played));
                let winner = &game.players()[player];
                if points > 0 {
                    println!("{} scores {points} point(s)!", winner.name());
                } else {
                    println!("{} loses {} point(s)!", winner.name(), points.abs());
                }
                println!("\nScores:");
                for p in game.players() {
                    println!("- {}: {}", p.name(), p.score());
                }
                println!("\nCounters remaining: {}", game.counters());
                if game.is_game_over() {
                    let champion = game.declare_winner();
                    println!("\nGame over! {} wins the game!", champion.name());
                    return Ok(());
                }
                prompt("Press [Enter] to start the next round...")?;
                game.start_round();
            }
            TurnOutcome::RoundDrawn { .. } => {
                // Unreachable: the draw branch above runs the empty-hand case.
                unreachable!("draw outcome with non-empty hands");
            }
        }
    }
}

/// Prompts until the user enters a valid index for the current hand.
fn read_card_index(hand_len: usize) -> Result<usize, Box<dyn Error>> {
    loop {
        let input = prompt(&format!("Select card index (0-{}): ", hand_len - 1))?;
        let trimmed = input.trim();
        let Ok(choice) = trimmed.parse::<usize>() else {
            println!("Enter a number.");
            continue;
        };
        if choice < hand_len {
            return Ok(choice);
        }
        println!("Invalid index, try again.");
    }
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

fn print_usage() {
    println!("Usage: play [OPTIONS]");
    println!("  --seed <u64>          Seed for shuffling (default: {DEFAULT_SEED:#x})");
    println!("  --players <a,b,...>   Comma-separated player names (default: Player 1,Player 2)");
    println!("  --help                Show this help message");
}
