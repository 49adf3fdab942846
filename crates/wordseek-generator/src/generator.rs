//! Whole-puzzle generation.

use log::debug;
use rand::{Rng, RngExt};
use wordseek_core::{LetterGrid, PlacedWord, Word, WordList};

use crate::{placer::place_word, seed::PuzzleSeed};

/// Full from-scratch attempts before settling for a best-effort grid.
pub const GRID_ATTEMPTS: usize = 50;

/// A generated puzzle: the filled grid, the recorded placements, and any
/// words that could not be hidden.
///
/// `unplaced` is empty in the overwhelmingly common case. It is populated
/// only for pathological input (for example a word longer than the grid
/// side), after every full-grid attempt has failed; callers must be able to
/// present a puzzle with a reduced word bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The letter grid, fully filled (no empty sentinels remain).
    pub grid: LetterGrid,
    /// One entry per word successfully hidden in the grid.
    pub placed: Vec<PlacedWord>,
    /// Words that could not be placed anywhere, in placement order.
    pub unplaced: Vec<Word>,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns whether every requested word was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Generates word-search puzzles from validated word lists.
///
/// Words are placed longest first: long words have the fewest candidate
/// positions, so committing them into a sparse grid first raises the odds
/// that an attempt succeeds as a whole. If any word fails to place, the
/// whole grid is abandoned and rebuilt from scratch rather than repaired;
/// after [`GRID_ATTEMPTS`] failed attempts a final best-effort pass keeps
/// whatever subset it can.
///
/// # Examples
///
/// ```
/// use wordseek_core::WordList;
/// use wordseek_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let words = WordList::from_strs(["CAT", "DOG"]).unwrap();
/// let seed = PuzzleSeed::from_phrase("example");
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(&words, 4, seed);
///
/// // Both words fit on a 4x4 grid, reproducibly for this seed.
/// assert!(puzzle.is_complete());
/// assert_eq!(puzzle, generator.generate_with_seed(&words, 4, seed));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded in the returned puzzle, so any result can be
    /// reproduced later with [`PuzzleGenerator::generate_with_seed`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn generate(&self, words: &WordList, size: u8) -> GeneratedPuzzle {
        self.generate_with_seed(words, size, PuzzleSeed::generate())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        words: &WordList,
        size: u8,
        seed: PuzzleSeed,
    ) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        // Longest first; equal lengths keep their input order.
        let mut order: Vec<&Word> = words.iter().collect();
        order.sort_by(|a, b| b.len().cmp(&a.len()));

        for attempt in 1..=GRID_ATTEMPTS {
            match place_all(&order, size, &mut rng) {
                Ok((mut grid, placed)) => {
                    fill_remaining(&mut grid, &mut rng);
                    return GeneratedPuzzle {
                        grid,
                        placed,
                        unplaced: Vec::new(),
                        seed,
                    };
                }
                Err(word) => {
                    debug!("attempt {attempt}/{GRID_ATTEMPTS}: could not place {word}");
                }
            }
        }

        debug!("all {GRID_ATTEMPTS} attempts failed, keeping a best-effort grid");
        let (mut grid, placed, unplaced) = place_best_effort(&order, size, &mut rng);
        fill_remaining(&mut grid, &mut rng);
        GeneratedPuzzle {
            grid,
            placed,
            unplaced,
            seed,
        }
    }
}

/// Places every word or reports the first one that failed, abandoning the
/// grid. Partial states from a failed attempt are never reused.
fn place_all<'w>(
    order: &[&'w Word],
    size: u8,
    rng: &mut impl Rng,
) -> Result<(LetterGrid, Vec<PlacedWord>), &'w Word> {
    let mut grid = LetterGrid::new(size);
    let mut placed = Vec::with_capacity(order.len());
    for &word in order {
        match place_word(&mut grid, word, rng) {
            Some(placement) => placed.push(placement),
            None => return Err(word),
        }
    }
    Ok((grid, placed))
}

/// Places as many words as possible, skipping any that fit nowhere.
fn place_best_effort(
    order: &[&Word],
    size: u8,
    rng: &mut impl Rng,
) -> (LetterGrid, Vec<PlacedWord>, Vec<Word>) {
    let mut grid = LetterGrid::new(size);
    let mut placed = Vec::new();
    let mut unplaced = Vec::new();
    for &word in order {
        match place_word(&mut grid, word, rng) {
            Some(placement) => placed.push(placement),
            None => unplaced.push(word.clone()),
        }
    }
    (grid, placed, unplaced)
}

/// Fills every still-empty cell with a uniformly random letter.
fn fill_remaining(grid: &mut LetterGrid, rng: &mut impl Rng) {
    grid.fill_empty_with(|| char::from(rng.random_range(b'A'..=b'Z')));
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordseek_core::Cell;

    use super::*;

    fn generate(words: &[&str], size: u8, phrase: &str) -> GeneratedPuzzle {
        let words = WordList::from_strs(words).unwrap();
        PuzzleGenerator::new().generate_with_seed(&words, size, PuzzleSeed::from_phrase(phrase))
    }

    fn assert_invariants(puzzle: &GeneratedPuzzle, words: &WordList) {
        // Placement correctness: the grid reproduces every placed word.
        for placed in &puzzle.placed {
            let letters: String = placed
                .cells()
                .map(|cell| puzzle.grid.get(cell).unwrap())
                .collect();
            assert_eq!(letters, placed.word().as_str());
        }

        // Bounds: every touched cell lies inside the grid.
        for placed in &puzzle.placed {
            for cell in placed.cells() {
                assert!(puzzle.grid.contains(cell));
            }
        }

        // Fill completeness: only printable letters remain.
        for cell in puzzle.grid.cells() {
            assert!(puzzle.grid.get(cell).unwrap().is_ascii_uppercase());
        }

        // Every input word is accounted for exactly once.
        assert_eq!(puzzle.placed.len() + puzzle.unplaced.len(), words.len());
        let mut names: Vec<&str> = puzzle
            .placed
            .iter()
            .map(|p| p.word().as_str())
            .chain(puzzle.unplaced.iter().map(Word::as_str))
            .collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = words.iter().map(Word::as_str).collect();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_cat_and_dog_fit_on_a_four_grid() {
        let words = WordList::from_strs(["CAT", "DOG"]).unwrap();
        let puzzle = generate(&["CAT", "DOG"], 4, "cat-dog");
        assert!(puzzle.is_complete());
        assert_invariants(&puzzle, &words);
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        let a = generate(&["APPLE", "PEAR", "PLUM"], 8, "fruit");
        let b = generate(&["APPLE", "PEAR", "PLUM"], 8, "fruit");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let a = generate(&["APPLE", "PEAR", "PLUM"], 8, "fruit");
        let b = generate(&["APPLE", "PEAR", "PLUM"], 8, "veggies");
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_oversized_word_ends_up_unplaced() {
        let words = WordList::from_strs(["ELEPHANT", "CAT"]).unwrap();
        let puzzle = generate(&["ELEPHANT", "CAT"], 4, "zoo");
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.unplaced, vec!["ELEPHANT".parse::<Word>().unwrap()]);
        assert_eq!(puzzle.placed.len(), 1);
        assert_invariants(&puzzle, &words);
    }

    #[test]
    fn test_longest_words_are_placed_first() {
        let puzzle = generate(&["OX", "GIRAFFE", "BEE"], 10, "order");
        let lengths: Vec<usize> = puzzle.placed.iter().map(|p| p.word().len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_shared_cells_agree_between_crossing_words() {
        // Dense input on a small grid forces crossings often; whenever two
        // placements share a cell, both expect the same letter there.
        let puzzle = generate(&["STONE", "NOTES", "ONSET", "SETON"], 5, "dense");
        for a in &puzzle.placed {
            for b in &puzzle.placed {
                for (cell_a, letter_a) in a.letter_cells() {
                    for (cell_b, letter_b) in b.letter_cells() {
                        if cell_a == cell_b {
                            assert_eq!(letter_a, letter_b, "conflict at {cell_a}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_letter_grid() {
        let words = WordList::from_strs(["A"]).unwrap();
        let puzzle = generate(&["A"], 1, "tiny");
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.placed[0].start(), Cell::new(0, 0));
        assert_invariants(&puzzle, &words);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_generation_upholds_invariants(
            picks in proptest::collection::btree_set(0_usize..POOL.len(), 1..6),
            bytes in proptest::array::uniform32(any::<u8>()),
        ) {
            let words = WordList::from_strs(picks.iter().map(|&i| POOL[i])).unwrap();
            let puzzle = PuzzleGenerator::new().generate_with_seed(
                &words,
                10,
                PuzzleSeed::from_bytes(bytes),
            );
            prop_assert!(puzzle.is_complete());
            assert_invariants(&puzzle, &words);
        }
    }

    const POOL: [&str; 12] = [
        "CAT", "DOG", "BIRD", "FISH", "HORSE", "SHEEP", "MONKEY", "RABBIT", "TURTLE", "LION",
        "TIGER", "PANDA",
    ];
}
