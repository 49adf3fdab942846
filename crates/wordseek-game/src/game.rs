//! A word-search play session.

use wordseek_core::{Cell, LetterGrid, PlacedWord, Word};
use wordseek_generator::GeneratedPuzzle;

use crate::selection::DragSelection;

/// Number of distinct highlight colors handed out before cycling.
pub const PALETTE_CYCLE: usize = 6;

/// Opaque handle to a highlight color.
///
/// The engine hands these out round-robin as words are found; the renderer
/// decides what each one actually looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(u8);

impl ColorToken {
    pub(crate) fn cycle(nth: usize) -> Self {
        Self(u8::try_from(nth % PALETTE_CYCLE).unwrap_or_default())
    }

    /// Returns the palette slot, in `0..PALETTE_CYCLE`.
    #[must_use]
    pub fn palette_index(self) -> u8 {
        self.0
    }
}

/// A word the player has found, with the grid span to highlight.
///
/// The span records the cells of the *gesture*: a player who dragged the
/// word backwards gets a highlight running backwards. Created at most once
/// per placed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    word: Word,
    start: Cell,
    end: Cell,
    color: ColorToken,
}

impl FoundWord {
    pub(crate) fn new(word: Word, start: Cell, end: Cell, color: ColorToken) -> Self {
        Self {
            word,
            start,
            end,
            color,
        }
    }

    /// Returns the found word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the first cell of the selection that found the word.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Returns the last cell of the selection that found the word.
    #[must_use]
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Returns the highlight color assigned to this word.
    #[must_use]
    pub fn color(&self) -> ColorToken {
        self.color
    }
}

/// Result of resolving a completed gesture.
///
/// An unmatched selection is normal game play, not a fault, so it is a
/// plain outcome rather than an error. [`DragOutcome::Completed`] is
/// returned exactly once per puzzle, on the gesture that finds the final
/// word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragOutcome {
    /// The selection matched no remaining word.
    NoMatch,
    /// The selection matched a word; more remain.
    Found(FoundWord),
    /// The selection matched the final word; the puzzle is now complete.
    Completed(FoundWord),
}

/// A word-search game session over a generated puzzle.
///
/// Drives the drag-gesture state machine and resolves released selections
/// against the puzzle's placed words. The grid is immutable during play;
/// the only state that changes is the in-progress selection and the
/// monotonically growing set of found words.
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
///     PuzzleGenerator::new().generate_with_seed(&words, 6, PuzzleSeed::from_phrase("doc"));
/// let mut game = Game::new(puzzle);
///
/// // Drag along the first placed word's span.
/// let target = game.placed()[0].clone();
/// game.begin_drag(target.start());
/// game.drag_to(target.end());
/// let outcome = game.release();
///
/// assert!(outcome.is_found());
/// assert_eq!(game.found().len(), 1);
/// assert!(!game.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: LetterGrid,
    placed: Vec<PlacedWord>,
    found: Vec<FoundWord>,
    active: Option<DragSelection>,
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// A best-effort puzzle is accepted as-is: only the words that were
    /// actually placed take part in matching and completion.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            grid,
            placed,
            unplaced: _,
            seed: _,
        } = puzzle;
        Self {
            grid,
            placed,
            found: Vec::new(),
            active: None,
        }
    }

    pub(crate) fn from_parts(
        grid: LetterGrid,
        placed: Vec<PlacedWord>,
        found: Vec<FoundWord>,
    ) -> Self {
        Self {
            grid,
            placed,
            found,
            active: None,
        }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the placed words, for word-bank display.
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Returns the words found so far, in the order they were found.
    #[must_use]
    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    /// Returns the live selection of the in-progress gesture, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&[Cell]> {
        self.active.as_ref().map(DragSelection::cells)
    }

    /// Returns whether every placed word has been found.
    ///
    /// A puzzle with no placed words is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.placed.is_empty() && self.found.len() == self.placed.len()
    }

    /// Starts a drag gesture at `cell`.
    ///
    /// A position outside the grid is ignored; no gesture becomes active.
    pub fn begin_drag(&mut self, cell: Cell) {
        if self.grid.contains(cell) {
            self.active = Some(DragSelection::begin(cell));
        }
    }

    /// Feeds the current drag position into the active gesture.
    ///
    /// Ignored when no gesture is active, when the position is outside the
    /// grid, or when it does not form a straight line with the anchor.
    pub fn drag_to(&mut self, cell: Cell) {
        if !self.grid.contains(cell) {
            return;
        }
        if let Some(selection) = &mut self.active {
            selection.drag_to(cell);
        }
    }

    /// Ends the gesture and resolves its selection.
    ///
    /// Returns [`DragOutcome::NoMatch`] when no gesture was active.
    pub fn release(&mut self) -> DragOutcome {
        match self.active.take() {
            Some(selection) => self.resolve_selection(selection.cells()),
            None => DragOutcome::NoMatch,
        }
    }

    /// Abandons the gesture without attempting a match.
    ///
    /// Used when the platform interrupts the drag.
    pub fn cancel_drag(&mut self) {
        self.active = None;
    }

    /// Resolves a completed selection against the remaining words.
    ///
    /// The letters along the path are matched both forward and reversed, so
    /// the drag direction never matters. A hit records a [`FoundWord`]
    /// spanning the selection's first and last cell; a miss changes
    /// nothing. Matching a word that was already found changes nothing
    /// either, so the found set never holds duplicates.
    pub fn resolve_selection(&mut self, cells: &[Cell]) -> DragOutcome {
        let Some(candidate) = self.letters_along(cells) else {
            return DragOutcome::NoMatch;
        };
        let reversed: String = candidate.chars().rev().collect();

        let hit = self.placed.iter().find(|placed| {
            let word = placed.word().as_str();
            (word == candidate || word == reversed)
                && !self.found.iter().any(|found| found.word().as_str() == word)
        });
        let (Some(hit), Some(&start), Some(&end)) = (hit, cells.first(), cells.last()) else {
            return DragOutcome::NoMatch;
        };

        let found = FoundWord::new(
            hit.word().clone(),
            start,
            end,
            ColorToken::cycle(self.found.len()),
        );
        self.found.push(found.clone());
        if self.is_complete() {
            DragOutcome::Completed(found)
        } else {
            DragOutcome::Found(found)
        }
    }

    /// Reads the letters along a path, or `None` for an empty or
    /// out-of-grid path.
    fn letters_along(&self, cells: &[Cell]) -> Option<String> {
        if cells.is_empty() {
            return None;
        }
        cells
            .iter()
            .map(|&cell| {
                self.grid
                    .contains(cell)
                    .then(|| self.grid.get(cell).ok())
                    .flatten()
            })
            .collect()
    }
}
