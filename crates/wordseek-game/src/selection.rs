//! Drag-gesture interpretation.
//!
//! A drag gesture arrives as a stream of touched cells. The interpreter
//! keeps the longest valid straight-line selection between the gesture's
//! anchor and the most recent acceptable position; positions that do not
//! form a straight line with the anchor leave the selection unchanged, so a
//! finger wobbling across cell boundaries never breaks an in-progress
//! selection.

use std::cmp::Ordering;

use wordseek_core::Cell;

/// Computes the inclusive straight-line path from `from` to `to`.
///
/// A path exists iff the two cells share a row, share a column, or lie on a
/// perfect diagonal (`|Δrow| == |Δcol|`). The result steps one cell at a
/// time, each axis moving by -1, 0, or +1 per step, and always contains
/// `max(|Δrow|, |Δcol|) + 1` cells. Any other relationship yields `None`.
///
/// # Examples
///
/// ```
/// use wordseek_core::Cell;
/// use wordseek_game::straight_path;
///
/// let path = straight_path(Cell::new(3, 3), Cell::new(0, 0)).unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[0], Cell::new(3, 3));
/// assert_eq!(path[3], Cell::new(0, 0));
///
/// // A 2:1 slope is not a selection.
/// assert_eq!(straight_path(Cell::new(0, 0), Cell::new(2, 1)), None);
/// ```
#[must_use]
pub fn straight_path(from: Cell, to: Cell) -> Option<Vec<Cell>> {
    let d_row = i16::from(to.row()) - i16::from(from.row());
    let d_col = i16::from(to.col()) - i16::from(from.col());
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return None;
    }
    let delta = (unit_step(d_row), unit_step(d_col));
    let steps = d_row.abs().max(d_col.abs());
    (0..=steps)
        .map(|i| u8::try_from(i).ok().and_then(|step| from.offset(delta, step)))
        .collect()
}

fn unit_step(d: i16) -> i8 {
    match d.cmp(&0) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// The selection built up by one in-progress drag gesture.
///
/// Holds the anchor cell the gesture started on and the current straight
/// path; the path always begins at the anchor and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSelection {
    anchor: Cell,
    cells: Vec<Cell>,
}

impl DragSelection {
    /// Starts a selection at the gesture's first cell.
    #[must_use]
    pub fn begin(anchor: Cell) -> Self {
        Self {
            anchor,
            cells: vec![anchor],
        }
    }

    /// Extends the selection toward `to`.
    ///
    /// When the anchor and `to` form a straight line, the whole path is
    /// recomputed from scratch (the gesture may have shrunk or changed
    /// direction). Otherwise the previous valid selection is kept.
    pub fn drag_to(&mut self, to: Cell) {
        if let Some(path) = straight_path(self.anchor, to) {
            self.cells = path;
        }
    }

    /// Returns the cell the gesture started on.
    #[must_use]
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Returns the currently selected path, anchor first.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
