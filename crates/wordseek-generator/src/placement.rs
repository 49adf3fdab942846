//! Placement validation and commitment.

use wordseek_core::{Cell, Direction, LetterGrid, PlacedWord, Word};

/// Returns whether `word` fits on `grid` starting at `start` and running in
/// `direction`.
///
/// A position fits when every stepped cell lies inside the grid and is
/// either still empty or already holds exactly the letter the word needs
/// there. The latter case lets words cross on a shared letter, which keeps
/// dense grids placeable.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Cell, Direction, LetterGrid};
/// use wordseek_generator::{fits, place_at};
///
/// let mut grid = LetterGrid::new(5);
/// let cat = "CAT".parse().unwrap();
/// place_at(&mut grid, &cat, Cell::new(1, 0), Direction::Horizontal).unwrap();
///
/// // "MAP" may cross "CAT" through the shared 'A'.
/// let map = "MAP".parse().unwrap();
/// assert!(fits(&grid, &map, Cell::new(0, 1), Direction::Vertical));
///
/// // "MOP" would need 'O' where 'A' already sits.
/// let mop = "MOP".parse().unwrap();
/// assert!(!fits(&grid, &mop, Cell::new(0, 1), Direction::Vertical));
/// ```
#[must_use]
pub fn fits(grid: &LetterGrid, word: &Word, start: Cell, direction: Direction) -> bool {
    let delta = direction.delta();
    word.letters().enumerate().all(|(i, letter)| {
        u8::try_from(i)
            .ok()
            .and_then(|step| start.offset(delta, step))
            .filter(|&cell| grid.contains(cell))
            .and_then(|cell| grid.get(cell).ok())
            .is_some_and(|ch| ch == LetterGrid::EMPTY || ch == letter)
    })
}

/// Commits `word` to `grid` at the given position if it fits there.
///
/// Returns the resulting [`PlacedWord`], or `None` without touching the
/// grid when the position does not fit.
pub fn place_at(
    grid: &mut LetterGrid,
    word: &Word,
    start: Cell,
    direction: Direction,
) -> Option<PlacedWord> {
    if !fits(grid, word, start, direction) {
        return None;
    }
    let placed = PlacedWord::try_new(word.clone(), start, direction, grid.size()).ok()?;
    for (cell, letter) in placed.letter_cells() {
        grid.set(cell, letter).ok()?;
    }
    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn test_fits_rejects_out_of_bounds_spans() {
        let grid = LetterGrid::new(4);
        assert!(fits(&grid, &word("FROG"), Cell::new(0, 0), Direction::Horizontal));
        assert!(!fits(&grid, &word("FROG"), Cell::new(0, 1), Direction::Horizontal));
        assert!(!fits(&grid, &word("FROG"), Cell::new(1, 0), Direction::Vertical));
        assert!(!fits(&grid, &word("FROG"), Cell::new(2, 0), Direction::DiagonalUp));
    }

    #[test]
    fn test_fits_allows_identical_letter_crossings_only() {
        let mut grid = LetterGrid::new(5);
        place_at(&mut grid, &word("CAT"), Cell::new(1, 0), Direction::Horizontal).unwrap();

        // Crossing through the shared 'A' at (1, 1) is legal.
        assert!(fits(&grid, &word("MAP"), Cell::new(0, 1), Direction::Vertical));
        // A differing letter at the shared cell is not.
        assert!(!fits(&grid, &word("MOP"), Cell::new(0, 1), Direction::Vertical));
    }

    #[test]
    fn test_place_at_writes_all_letters() {
        let mut grid = LetterGrid::new(6);
        let placed =
            place_at(&mut grid, &word("ZEBRA"), Cell::new(5, 0), Direction::DiagonalUp).unwrap();
        for (cell, letter) in placed.letter_cells() {
            assert_eq!(grid.get(cell).unwrap(), letter);
        }
    }

    #[test]
    fn test_place_at_leaves_grid_untouched_on_misfit() {
        let mut grid = LetterGrid::new(3);
        let before = grid.clone();
        assert!(place_at(&mut grid, &word("LION"), Cell::new(0, 0), Direction::Horizontal).is_none());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_crossing_placement_preserves_both_words() {
        let mut grid = LetterGrid::new(5);
        let cat = place_at(&mut grid, &word("CAT"), Cell::new(1, 0), Direction::Horizontal).unwrap();
        let map = place_at(&mut grid, &word("MAP"), Cell::new(0, 1), Direction::Vertical).unwrap();

        for placed in [&cat, &map] {
            let letters: String = placed.cells().map(|c| grid.get(c).unwrap()).collect();
            assert_eq!(letters, placed.word().as_str());
        }
    }
}
