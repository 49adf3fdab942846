//! Play-session state for Wordseek word-search puzzles.
//!
//! This crate sits between a generated puzzle and the host's event loop:
//! pointer events go in, found-word and completion outcomes come out.
//! Nothing here renders, persists, or talks to a platform; the host applies
//! the returned state transitions however it likes.
//!
//! # Overview
//!
//! - [`selection`]: Interprets a drag gesture as a straight-line cell path
//!   ([`DragSelection`], [`straight_path`])
//! - [`game`]: The session itself: match resolution, the found-word set,
//!   and the one-shot completion signal ([`Game`], [`DragOutcome`])
//! - [`snapshot`]: The serializable persistence boundary ([`GameSnapshot`])
//!
//! # Examples
//!
//! ```
//! use wordseek_core::WordList;
//! use wordseek_game::{DragOutcome, Game};
//! use wordseek_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let words = WordList::from_strs(["CAT", "DOG"]).unwrap();
//! let puzzle =
//!     PuzzleGenerator::new().generate_with_seed(&words, 6, PuzzleSeed::from_phrase("lib"));
//! let mut game = Game::new(puzzle);
//!
//! // The host feeds gesture events; dragging a placed word's span finds it.
//! let target = game.placed()[0].clone();
//! game.begin_drag(target.start());
//! game.drag_to(target.end());
//! assert!(matches!(game.release(), DragOutcome::Found(_)));
//! ```

pub mod game;
pub mod selection;
pub mod snapshot;

pub use self::{
    game::{ColorToken, DragOutcome, FoundWord, Game, PALETTE_CYCLE},
    selection::{DragSelection, straight_path},
    snapshot::{GameSnapshot, PlacedWordSnapshot, SnapshotError},
};
