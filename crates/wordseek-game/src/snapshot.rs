//! Serializable play-state snapshots.
//!
//! A snapshot captures everything persistence needs: the grid's letters,
//! the placed words as `(word, start, direction)`, and the *names* of the
//! found words. Found-word spans are deliberately not stored; restoring
//! replays the placement's direction math instead, so the snapshot never
//! carries redundant geometry that could drift out of sync.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wordseek_core::{
    Cell, Direction, GridError, LetterGrid, ParseDirectionError, PlacedWord, Word, WordListError,
};

use crate::game::{ColorToken, FoundWord, Game};

/// Error returned when restoring a snapshot.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SnapshotError {
    /// The snapshot contains no grid rows.
    #[display("snapshot grid is empty")]
    EmptyGrid,
    /// The snapshot has more rows than a grid can hold.
    #[display("snapshot grid has {rows} rows, the maximum is 255")]
    OversizedGrid {
        /// Number of rows in the rejected snapshot.
        rows: usize,
    },
    /// A row's letter count does not match the grid size.
    #[display("row {row} has {len} letters, expected {size}")]
    RowWidth {
        /// Index of the malformed row.
        row: u8,
        /// Number of letters found in the row.
        len: usize,
        /// Expected side length.
        size: u8,
    },
    /// A grid cell holds something other than `A`-`Z`.
    #[display("cell ({row}, {col}) holds {letter:?}, expected A-Z")]
    InvalidLetter {
        /// Row of the offending cell.
        row: u8,
        /// Column of the offending cell.
        col: u8,
        /// The rejected character.
        letter: char,
    },
    /// A placed word failed validation.
    #[from]
    #[display("invalid placed word: {_0}")]
    Word(WordListError),
    /// A placed word carries an unknown direction name.
    #[from]
    #[display("invalid direction: {_0}")]
    Direction(ParseDirectionError),
    /// A placed word's span does not fit the snapshot grid.
    #[from]
    #[display("placement leaves the grid: {_0}")]
    Placement(GridError),
    /// A found word is not among the placed words.
    #[display("found word {_0:?} is not among the placed words")]
    UnknownFoundWord(#[error(not(source))] String),
    /// The same found word appears twice.
    #[display("found word {_0:?} appears more than once")]
    DuplicateFoundWord(#[error(not(source))] String),
}

/// One placed word in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWordSnapshot {
    /// The hidden word.
    pub word: String,
    /// Row of the first letter.
    pub row: u8,
    /// Column of the first letter.
    pub col: u8,
    /// Direction name, as produced by
    /// [`Direction::as_str`](wordseek_core::Direction::as_str).
    pub direction: String,
}

/// The full serializable state of a play session.
///
/// # Examples
///
/// ```
/// use wordseek_core::WordList;
/// use wordseek_game::Game;
/// use wordseek_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let words = WordList::from_strs(["CAT", "DOG"]).unwrap();
/// let puzzle =
///     PuzzleGenerator::new().generate_with_seed(&words, 6, PuzzleSeed::from_phrase("snap"));
/// let game = Game::new(puzzle);
///
/// let snapshot = game.snapshot();
/// let restored = Game::restore(&snapshot).unwrap();
/// assert_eq!(restored.placed(), game.placed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Grid letters, one string per row.
    pub rows: Vec<String>,
    /// Every placed word with its start cell and direction.
    pub placed: Vec<PlacedWordSnapshot>,
    /// Names of the words found so far, in found order.
    pub found: Vec<String>,
}

impl Game {
    /// Captures the session state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let rows = (0..self.grid().size())
            .filter_map(|row| self.grid().row_letters(row).ok())
            .collect();
        let placed = self
            .placed()
            .iter()
            .map(|placed| PlacedWordSnapshot {
                word: placed.word().as_str().to_owned(),
                row: placed.start().row(),
                col: placed.start().col(),
                direction: placed.direction().to_string(),
            })
            .collect();
        let found = self
            .found()
            .iter()
            .map(|found| found.word().as_str().to_owned())
            .collect();
        GameSnapshot {
            rows,
            placed,
            found,
        }
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// Found-word spans are reconstructed from the placements' direction
    /// math, in their canonical orientation. Highlight colors are handed
    /// out again in found order, so they match the original assignment.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] describing the first inconsistency
    /// found: a malformed grid, an invalid placement, or a found word that
    /// does not belong to the puzzle.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let size = u8::try_from(snapshot.rows.len()).map_err(|_| SnapshotError::OversizedGrid {
            rows: snapshot.rows.len(),
        })?;
        if size == 0 {
            return Err(SnapshotError::EmptyGrid);
        }

        let mut grid = LetterGrid::new(size);
        for (row, letters) in (0..size).zip(&snapshot.rows) {
            let mut cols = 0..size;
            for letter in letters.chars() {
                let Some(col) = cols.next() else {
                    return Err(SnapshotError::RowWidth {
                        row,
                        len: letters.chars().count(),
                        size,
                    });
                };
                if !letter.is_ascii_uppercase() {
                    return Err(SnapshotError::InvalidLetter { row, col, letter });
                }
                grid.set(Cell::new(row, col), letter)?;
            }
            if cols.next().is_some() {
                return Err(SnapshotError::RowWidth {
                    row,
                    len: letters.chars().count(),
                    size,
                });
            }
        }

        let mut seen = HashSet::new();
        let mut placed = Vec::with_capacity(snapshot.placed.len());
        for entry in &snapshot.placed {
            if !seen.insert(entry.word.as_str()) {
                return Err(WordListError::Duplicate(entry.word.clone()).into());
            }
            let word = Word::new(entry.word.clone())?;
            let direction: Direction = entry.direction.parse()?;
            placed.push(PlacedWord::try_new(
                word,
                Cell::new(entry.row, entry.col),
                direction,
                size,
            )?);
        }

        let mut found: Vec<FoundWord> = Vec::with_capacity(snapshot.found.len());
        for name in &snapshot.found {
            if found.iter().any(|f| f.word().as_str() == name) {
                return Err(SnapshotError::DuplicateFoundWord(name.clone()));
            }
            let hit = placed
                .iter()
                .find(|p| p.word().as_str() == name)
                .ok_or_else(|| SnapshotError::UnknownFoundWord(name.clone()))?;
            found.push(FoundWord::new(
                hit.word().clone(),
                hit.start(),
                hit.end(),
                ColorToken::cycle(found.len()),
            ));
        }

        Ok(Self::from_parts(grid, placed, found))
    }
}

#[cfg(test)]
mod tests {
    use wordseek_core::WordList;
    use wordseek_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;
    use crate::game::DragOutcome;

    fn new_game(phrase: &str) -> Game {
        let words = WordList::from_strs(["CAT", "DOG", "BIRD"]).unwrap();
        let puzzle =
            PuzzleGenerator::new().generate_with_seed(&words, 8, PuzzleSeed::from_phrase(phrase));
        assert!(puzzle.is_complete());
        Game::new(puzzle)
    }

    fn find(game: &mut Game, nth: usize) -> DragOutcome {
        let target = game.placed()[nth].clone();
        game.begin_drag(target.start());
        game.drag_to(target.end());
        game.release()
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut game = new_game("json");
        find(&mut game, 0);

        let snapshot = game.snapshot();
        let text = serde_json::to_string(&snapshot).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, snapshot);

        let restored = Game::restore(&parsed).unwrap();
        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.placed(), game.placed());
        assert_eq!(restored.found().len(), 1);
    }

    #[test]
    fn test_restore_replays_spans_from_direction_math() {
        let mut game = new_game("spans");
        // Find the first word by dragging it backwards; the live span runs
        // backwards, but the restored span is the canonical placement.
        let target = game.placed()[0].clone();
        game.begin_drag(target.end());
        game.drag_to(target.start());
        assert!(game.release().is_found());

        let restored = Game::restore(&game.snapshot()).unwrap();
        let found = &restored.found()[0];
        assert_eq!(found.start(), target.start());
        assert_eq!(found.end(), target.end());
        assert_eq!(found.color(), game.found()[0].color());
    }

    #[test]
    fn test_restored_game_continues_to_completion() {
        let mut game = new_game("continue");
        find(&mut game, 0);
        find(&mut game, 1);

        let mut restored = Game::restore(&game.snapshot()).unwrap();
        assert!(!restored.is_complete());
        let outcome = find(&mut restored, 2);
        assert!(outcome.is_completed());
        assert!(restored.is_complete());
    }

    #[test]
    fn test_restore_rejects_malformed_grids() {
        let mut snapshot = new_game("bad-grid").snapshot();
        snapshot.rows[0].pop();
        assert!(matches!(
            Game::restore(&snapshot),
            Err(SnapshotError::RowWidth { row: 0, .. })
        ));

        let empty = GameSnapshot {
            rows: Vec::new(),
            placed: Vec::new(),
            found: Vec::new(),
        };
        assert_eq!(Game::restore(&empty), Err(SnapshotError::EmptyGrid));
    }

    #[test]
    fn test_restore_rejects_unknown_and_duplicate_found_words() {
        let mut snapshot = new_game("bad-found").snapshot();
        snapshot.found.push("UNICORN".to_owned());
        assert_eq!(
            Game::restore(&snapshot),
            Err(SnapshotError::UnknownFoundWord("UNICORN".to_owned()))
        );

        snapshot.found = vec!["CAT".to_owned(), "CAT".to_owned()];
        assert_eq!(
            Game::restore(&snapshot),
            Err(SnapshotError::DuplicateFoundWord("CAT".to_owned()))
        );
    }

    #[test]
    fn test_restore_rejects_out_of_grid_placements() {
        let mut snapshot = new_game("bad-placement").snapshot();
        snapshot.placed[0].row = 7;
        snapshot.placed[0].col = 7;
        snapshot.placed[0].direction = "diagonal-down".to_owned();
        assert!(matches!(
            Game::restore(&snapshot),
            Err(SnapshotError::Placement(_))
        ));
    }
}
