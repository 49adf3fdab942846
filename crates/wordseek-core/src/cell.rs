//! Grid coordinates.

use std::fmt::{self, Display};

/// A position on the letter grid, identified by row and column.
///
/// Rows grow downward and columns grow rightward, both starting at zero.
/// `Cell` itself carries no grid size; bounds are enforced by
/// [`LetterGrid`](crate::LetterGrid) at access time.
///
/// # Examples
///
/// ```
/// use wordseek_core::Cell;
///
/// let cell = Cell::new(2, 7);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell at the given row and column.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Steps this cell `steps` times by the given per-step `(row, col)`
    /// delta, returning `None` when the result leaves the coordinate space.
    ///
    /// The caller is responsible for checking the result against a grid
    /// size; this method only guards against underflow and overflow of the
    /// coordinates themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseek_core::Cell;
    ///
    /// let cell = Cell::new(3, 0);
    /// assert_eq!(cell.offset((-1, 1), 2), Some(Cell::new(1, 2)));
    /// assert_eq!(cell.offset((-1, 1), 4), None); // row would underflow
    /// ```
    #[must_use]
    pub fn offset(self, delta: (i8, i8), steps: u8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(delta.0) * i16::from(steps);
        let col = i16::from(self.col) + i16::from(delta.1) * i16::from(steps);
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Some(Self::new(row, col))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
