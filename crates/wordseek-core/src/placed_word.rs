//! A word committed to the grid.

use crate::{Cell, Direction, GridError, Word};

/// A word that has been placed on a grid, identified by its start cell and
/// direction. The end cell and the full span are derived, never stored.
///
/// Construction validates that the entire span fits inside a grid of the
/// given size, so span math cannot step out of bounds afterwards.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Cell, Direction, PlacedWord, Word};
///
/// let word: Word = "CAT".parse().unwrap();
/// let placed = PlacedWord::try_new(word, Cell::new(0, 0), Direction::DiagonalDown, 4).unwrap();
/// assert_eq!(placed.end(), Cell::new(2, 2));
///
/// let word: Word = "LONGERWORD".parse().unwrap();
/// assert!(PlacedWord::try_new(word, Cell::new(0, 0), Direction::Horizontal, 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: Word,
    start: Cell,
    direction: Direction,
}

impl PlacedWord {
    /// Creates a placement after checking that every letter lands inside a
    /// `grid_size`×`grid_size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if any stepped cell leaves the
    /// grid.
    pub fn try_new(
        word: Word,
        start: Cell,
        direction: Direction,
        grid_size: u8,
    ) -> Result<Self, GridError> {
        let delta = direction.delta();
        let in_bounds = (0..word.len()).all(|i| {
            u8::try_from(i)
                .ok()
                .and_then(|step| start.offset(delta, step))
                .is_some_and(|cell| cell.row() < grid_size && cell.col() < grid_size)
        });
        if !in_bounds {
            return Err(GridError::OutOfBounds {
                row: start.row(),
                col: start.col(),
                size: grid_size,
            });
        }
        Ok(Self {
            word,
            start,
            direction,
        })
    }

    /// Returns the placed word.
    #[must_use]
    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Returns the placement direction.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell holding the last letter, derived as
    /// `start + (len - 1) * delta`.
    #[must_use]
    pub fn end(&self) -> Cell {
        self.cells().last().unwrap_or(self.start)
    }

    /// Returns the cells of the span in letter order.
    ///
    /// The span was validated at construction, so this yields exactly one
    /// cell per letter.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let start = self.start;
        let delta = self.direction.delta();
        (0..self.word.len())
            .filter_map(move |i| u8::try_from(i).ok().and_then(|step| start.offset(delta, step)))
    }

    /// Returns `(cell, letter)` pairs for the span, in letter order.
    pub fn letter_cells(&self) -> impl Iterator<Item = (Cell, char)> {
        self.cells().zip(self.word.letters())
    }
}
