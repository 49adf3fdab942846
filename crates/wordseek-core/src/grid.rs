//! The square letter grid.

use std::fmt::{self, Display};

use crate::Cell;

/// Error returned by bounds-checked grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The addressed cell lies outside the grid.
    #[display("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Row of the offending access.
        row: u8,
        /// Column of the offending access.
        col: u8,
        /// Side length of the grid that rejected the access.
        size: u8,
    },
}

/// A square `N`×`N` buffer of letters.
///
/// Cells start out holding an empty sentinel ([`LetterGrid::EMPTY`], not a
/// printable letter) and are written exactly once per letter during
/// generation. Play-time consumers only read.
///
/// Out-of-bounds access indicates broken direction math in the caller, so
/// it is reported as [`GridError::OutOfBounds`] and additionally trips a
/// `debug_assert!`.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Cell, LetterGrid};
///
/// let mut grid = LetterGrid::new(4);
/// assert!(grid.is_empty_at(Cell::new(0, 0)).unwrap());
///
/// grid.set(Cell::new(0, 0), 'C').unwrap();
/// assert_eq!(grid.get(Cell::new(0, 0)).unwrap(), 'C');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<char>,
}

impl LetterGrid {
    /// Sentinel stored in cells no word letter or filler has reached yet.
    pub const EMPTY: char = '\0';

    /// Creates a grid of the given side length with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![Self::EMPTY; usize::from(size) * usize::from(size)],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns whether the cell lies within the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.size && cell.col() < self.size
    }

    fn index_of(&self, cell: Cell) -> Result<usize, GridError> {
        if self.contains(cell) {
            Ok(usize::from(cell.row()) * usize::from(self.size) + usize::from(cell.col()))
        } else {
            debug_assert!(false, "out-of-bounds grid access at {cell}");
            Err(GridError::OutOfBounds {
                row: cell.row(),
                col: cell.col(),
                size: self.size,
            })
        }
    }

    /// Returns the letter at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cell lies outside the grid.
    pub fn get(&self, cell: Cell) -> Result<char, GridError> {
        Ok(self.cells[self.index_of(cell)?])
    }

    /// Writes `ch` at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cell lies outside the grid.
    pub fn set(&mut self, cell: Cell, ch: char) -> Result<(), GridError> {
        let index = self.index_of(cell)?;
        self.cells[index] = ch;
        Ok(())
    }

    /// Returns whether `cell` still holds the empty sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cell lies outside the grid.
    pub fn is_empty_at(&self, cell: Cell) -> Result<bool, GridError> {
        Ok(self.get(cell)? == Self::EMPTY)
    }

    /// Returns the letters of one row as a string, sentinels included.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `row` is outside the grid.
    pub fn row_letters(&self, row: u8) -> Result<String, GridError> {
        (0..self.size).map(|col| self.get(Cell::new(row, col))).collect()
    }

    /// Replaces every cell still holding the empty sentinel with a letter
    /// drawn from `letter`.
    pub fn fill_empty_with(&mut self, mut letter: impl FnMut() -> char) {
        for ch in &mut self.cells {
            if *ch == Self::EMPTY {
                *ch = letter();
            }
        }
    }

    /// Returns an iterator over every cell position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

impl Display for LetterGrid {
    /// Renders the grid one row per line, empty cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.cells[usize::from(row) * usize::from(self.size) + usize::from(col)];
                let shown = if ch == Self::EMPTY { '.' } else { ch };
                write!(f, "{shown}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_empty() {
        let grid = LetterGrid::new(5);
        assert_eq!(grid.cells().count(), 25);
        for cell in grid.cells() {
            assert!(grid.is_empty_at(cell).unwrap());
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = LetterGrid::new(3);
        grid.set(Cell::new(2, 1), 'Q').unwrap();
        assert_eq!(grid.get(Cell::new(2, 1)).unwrap(), 'Q');
        assert!(!grid.is_empty_at(Cell::new(2, 1)).unwrap());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_bounds_is_reported() {
        let grid = LetterGrid::new(3);
        assert_eq!(
            grid.get(Cell::new(3, 0)),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "out-of-bounds grid access")]
    #[cfg(debug_assertions)]
    fn test_out_of_bounds_asserts_in_debug() {
        let grid = LetterGrid::new(3);
        let _ = grid.get(Cell::new(0, 3));
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn test_zero_size_panics() {
        let _ = LetterGrid::new(0);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let mut grid = LetterGrid::new(2);
        grid.set(Cell::new(0, 0), 'A').unwrap();
        assert_eq!(grid.to_string(), "A.\n..\n");
    }
}
