//! Single-word placement strategy.

use log::trace;
use rand::{Rng, RngExt};
use wordseek_core::{Cell, Direction, LetterGrid, PlacedWord, Word};

use crate::placement::place_at;

/// Random probes tried before falling back to the deterministic sweep.
pub const PROBE_ATTEMPTS: usize = 200;

/// Places a single word on the grid, or returns `None` if no position fits.
///
/// Two phases:
///
/// 1. Up to [`PROBE_ATTEMPTS`] random probes (uniform direction, row, and
///    column). Cheap and almost always sufficient while the grid is sparse.
/// 2. An exhaustive sweep over every `(direction, row, col)` triple in a
///    fixed order, committing at the first fit. Probing degrades badly on
///    dense grids; the sweep terminates with a definite answer instead of
///    retrying without bound.
///
/// A `None` result means this word is unplaceable on the current grid. The
/// caller decides whether to retry with a fresh grid or skip the word.
pub fn place_word<R: Rng>(grid: &mut LetterGrid, word: &Word, rng: &mut R) -> Option<PlacedWord> {
    let size = grid.size();

    for _ in 0..PROBE_ATTEMPTS {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        if let Some(placed) = place_at(grid, word, start, direction) {
            return Some(placed);
        }
    }

    trace!("probing exhausted for {word}, sweeping all positions");
    for direction in Direction::ALL {
        for row in 0..size {
            for col in 0..size {
                if let Some(placed) = place_at(grid, word, Cell::new(row, col), direction) {
                    return Some(placed);
                }
            }
        }
    }

    None
}
