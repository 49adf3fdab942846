//! Word placement directions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// One of the four directions a word can run in on the grid.
///
/// Every direction advances one column or row per letter; leftward and
/// upward-left runs are expressed by matching a selection against the
/// reversed word instead, so this enumeration is exhaustive.
///
/// # Examples
///
/// ```
/// use wordseek_core::Direction;
///
/// assert_eq!(Direction::Horizontal.delta(), (0, 1));
/// assert_eq!(Direction::ALL.len(), 4);
///
/// let dir: Direction = "diagonal-up".parse().unwrap();
/// assert_eq!(dir, Direction::DiagonalUp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row (Δrow 0, Δcol +1).
    Horizontal,
    /// Top to bottom along a column (Δrow +1, Δcol 0).
    Vertical,
    /// Down and to the right (Δrow +1, Δcol +1).
    DiagonalDown,
    /// Up and to the right (Δrow -1, Δcol +1).
    DiagonalUp,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Returns the per-letter `(row, col)` delta for this direction.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (-1, 1),
        }
    }

    /// Returns the stable textual name used by [`Display`] and [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDown => "diagonal-down",
            Self::DiagonalUp => "diagonal-up",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction {_0:?}")]
pub struct ParseDirectionError(#[error(not(source))] String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}
