//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a grid size and direction policy
//! - Generate a puzzle from the built-in vocabulary
//! - Reproduce a puzzle from a seed or a phrase
//! - Sample many seeds and keep the puzzle whose words overlap the most
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "sunday"
//! ```
//!
//! Sample 5000 seeds and print the densest puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 5000 --size 10
//! ```

use std::{collections::HashSet, process};

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::DirectionSet;
use wordsearch_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, Vocabulary};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = PuzzleGenerator::DEFAULT_SIZE)]
    size: usize,

    /// Placement directions: `all`, `legacy-six`, `orthogonal`, or a comma list.
    #[arg(long, value_name = "DIRECTIONS", default_value = "all")]
    directions: DirectionSet,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of random seeds to sample, keeping the densest puzzle.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    if !(1..=PuzzleGenerator::MAX_SIZE).contains(&args.size) {
        eprintln!("--size must be between 1 and {}.", PuzzleGenerator::MAX_SIZE);
        process::exit(2);
    }
    let generator = PuzzleGenerator::new(args.size).with_directions(args.directions);
    let vocabulary = Vocabulary::builtin();

    let fixed_seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase));

    let puzzle = match (fixed_seed, args.max_tries) {
        (Some(seed), _) => generator.generate_round(&vocabulary, seed),
        (None, None) => generator.generate_round(&vocabulary, PuzzleSeed::random()),
        (None, Some(0)) => {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        (None, Some(max_tries)) => {
            let best = (0..max_tries)
                .into_par_iter()
                .map(|_| generator.generate_round(&vocabulary, PuzzleSeed::random()))
                .max_by_key(|puzzle| (usize::MAX - puzzle.dropped.len(), shared_cells(puzzle)));
            let Some(best) = best else {
                eprintln!("No puzzle generated.");
                process::exit(1);
            };
            println!("Selection:");
            println!("  Max tries: {max_tries}");
            println!("  Shared cells: {}", shared_cells(&best));
            println!();
            best
        }
    };

    print_puzzle(&puzzle);
}

fn shared_cells(puzzle: &GeneratedPuzzle) -> usize {
    let letters: usize = puzzle.placements.iter().map(|p| p.word().len()).sum();
    let cells: HashSet<_> = puzzle.placements.iter().flat_map(|p| p.cells()).collect();
    letters - cells.len()
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for placement in &puzzle.placements {
        println!(
            "  {} at {} heading {}",
            placement.word(),
            placement.origin(),
            placement.direction()
        );
    }
    if !puzzle.dropped.is_empty() {
        println!();
        println!("Dropped:");
        for word in &puzzle.dropped {
            println!("  {word}");
        }
    }
}
