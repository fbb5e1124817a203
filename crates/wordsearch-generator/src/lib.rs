//! Randomized word-search puzzle generation.
//!
//! [`PuzzleGenerator`] places a word set into a square grid and fills the rest with
//! random letters. Every puzzle carries the [`PuzzleSeed`] that reproduces it, and
//! a [`Vocabulary`] decides which words a round uses.
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::{PuzzleGenerator, PuzzleSeed, Vocabulary};
//!
//! let generator = PuzzleGenerator::new(15);
//! let seed = PuzzleSeed::from_phrase("monday");
//! let puzzle = generator.generate_round(&Vocabulary::builtin(), seed);
//!
//! println!("{}", puzzle.grid);
//! for word in &puzzle.words {
//!     println!("{word}");
//! }
//! assert_eq!(puzzle.seed, seed);
//! ```

pub use self::{error::*, generator::*, seed::*, vocabulary::*};

mod error;
mod generator;
mod seed;
mod vocabulary;
