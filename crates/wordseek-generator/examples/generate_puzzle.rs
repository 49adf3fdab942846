//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Validate a word list and generate a puzzle from it
//! - Reproduce a puzzle from a seed or a phrase
//! - Display the grid, placements, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Provide your own words and grid size:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --word WHALE --word SHARK --size 8
//! ```
//!
//! Replay a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "animals-2026-08-07"
//! ```

use std::process;

use clap::Parser;
use wordseek_core::{DEFAULT_GRID_SIZE, WordList};
use wordseek_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word to hide in the grid (uppercase A-Z). Repeatable.
    #[arg(short, long = "word", value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Side length of the grid.
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_GRID_SIZE)]
    size: u8,

    /// Seed to replay, as 64 hexadecimal characters.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let words = if args.words.is_empty() {
        vec![
            "CAT".to_owned(),
            "DOG".to_owned(),
            "BIRD".to_owned(),
            "FISH".to_owned(),
            "HORSE".to_owned(),
        ]
    } else {
        args.words
    };

    let words = match WordList::from_strs(&words) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Invalid word list: {err}");
            process::exit(2);
        }
    };

    let seed = match (&args.seed, &args.phrase) {
        (Some(text), _) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    let generator = PuzzleGenerator::new();
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(&words, args.size, seed),
        None => generator.generate(&words, args.size),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for placed in &puzzle.placed {
        println!(
            "  {} at {} running {}",
            placed.word(),
            placed.start(),
            placed.direction()
        );
    }

    if !puzzle.is_complete() {
        println!();
        println!("Unplaced:");
        for word in &puzzle.unplaced {
            println!("  {word}");
        }
        process::exit(1);
    }
}
