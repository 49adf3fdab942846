//! Word-search puzzle generation.
//!
//! This crate turns a validated [`WordList`](wordseek_core::WordList) into a
//! filled letter grid with a recorded placement for every word it managed to
//! hide. Generation is deterministic for a given [`PuzzleSeed`], which makes
//! puzzles reproducible in tests and shareable between players.
//!
//! # Overview
//!
//! - [`placement`]: Checks whether a word fits at a position and commits it
//!   ([`fits`], [`place_at`]). Two words may cross where their letters agree.
//! - [`placer`]: Places a single word by randomized probing with an
//!   exhaustive deterministic sweep as fallback ([`place_word`]).
//! - [`generator`]: Orchestrates a whole word list with retry-from-scratch
//!   on partial failure ([`PuzzleGenerator`], [`GeneratedPuzzle`]).
//! - [`seed`]: Reproducible randomness ([`PuzzleSeed`]).
//!
//! # Examples
//!
//! ```
//! use wordseek_core::WordList;
//! use wordseek_generator::PuzzleGenerator;
//!
//! let words = WordList::from_strs(["CAT", "DOG", "BIRD"]).unwrap();
//! let puzzle = PuzzleGenerator::new().generate(&words, 10);
//!
//! assert!(puzzle.is_complete());
//! for placed in &puzzle.placed {
//!     // Reading the grid along the placement reproduces the word.
//!     let letters: String = placed
//!         .cells()
//!         .map(|cell| puzzle.grid.get(cell).unwrap())
//!         .collect();
//!     assert_eq!(letters, placed.word().as_str());
//! }
//! ```

pub mod generator;
pub mod placement;
pub mod placer;
pub mod seed;

pub use self::{
    generator::{GRID_ATTEMPTS, GeneratedPuzzle, PuzzleGenerator},
    placement::{fits, place_at},
    placer::{PROBE_ATTEMPTS, place_word},
    seed::{ParseSeedError, PuzzleSeed},
};
