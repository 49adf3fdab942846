//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed driving every random choice made during generation.
///
/// The same seed, word list, and grid size always produce the same puzzle.
/// Seeds display as 64 lowercase hexadecimal characters and parse back from
/// the same form, so they can be logged, shared, or replayed.
///
/// # Examples
///
/// ```
/// use wordseek_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
///
/// // Phrases hash to stable seeds, e.g. for a daily puzzle.
/// assert_eq!(
///     PuzzleSeed::from_phrase("animals-2026-08-07"),
///     PuzzleSeed::from_phrase("animals-2026-08-07"),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn generate() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed by hashing a free-text phrase with SHA-256.
    ///
    /// Useful for human-memorable reproducible puzzles such as a shared
    /// daily challenge.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the PCG generator seeded by this value.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a seed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("seed contains a non-hexadecimal character")]
    InvalidCharacter,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = s
                .get(i * 2..i * 2 + 2)
                .ok_or(ParseSeedError::InvalidCharacter)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidCharacter)?;
        }
        Ok(Self(bytes))
    }
}
