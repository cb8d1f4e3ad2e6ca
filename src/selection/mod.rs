//! Random selection of difficulty, category and word
//!
//! All draws go through [`Selector::index`], which samples uniformly from
//! `0..n` for the actual `n` of each call by rejection sampling. The random
//! source is any [`TryRngCore`]; by default the operating system's entropy
//! source, whose failures surface as [`SelectionError::RandomSource`].

use crate::core::{Category, Difficulty, Word};
use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

/// Why a selection could not be made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("random source failed: {0}")]
    RandomSource(String),
    #[error("nothing to choose from")]
    EmptyInput,
    #[error("cannot draw words for difficulty {0}")]
    InvalidDifficulty(Difficulty),
    #[error("category '{category}' has no {difficulty} words")]
    EmptyWordList {
        category: String,
        difficulty: Difficulty,
    },
}

/// Uniform random picker over catalog data
pub struct Selector<R> {
    rng: R,
}

impl Selector<OsRng> {
    /// Selector backed by the operating system's entropy source
    #[must_use]
    pub const fn from_os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Selector<OsRng> {
    fn default() -> Self {
        Self::from_os()
    }
}

impl<R: TryRngCore> Selector<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw an index uniformly from `0..n`
    ///
    /// Values from the top of the `u64` range that would bias the remainder
    /// are rejected and redrawn.
    ///
    /// # Errors
    /// `EmptyInput` when `n == 0`, `RandomSource` when the source fails.
    pub fn index(&mut self, n: usize) -> Result<usize, SelectionError> {
        if n == 0 {
            return Err(SelectionError::EmptyInput);
        }

        let n = n as u64;
        let zone = u64::MAX - u64::MAX % n;

        loop {
            let value = self
                .rng
                .try_next_u64()
                .map_err(|e| SelectionError::RandomSource(e.to_string()))?;

            if value < zone {
                // value % n < n, which came from a usize
                return Ok((value % n) as usize);
            }
        }
    }

    /// Draw one of Easy, Medium or Hard
    ///
    /// # Errors
    /// `RandomSource` when the source fails.
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, SelectionError> {
        let index = self.index(Difficulty::TIERS.len())?;
        Ok(Difficulty::TIERS[index])
    }

    /// Draw one category
    ///
    /// # Errors
    /// `EmptyInput` for an empty slice, `RandomSource` when the source fails.
    pub fn choose_category<'c>(
        &mut self,
        categories: &'c [Category],
    ) -> Result<&'c Category, SelectionError> {
        let index = self.index(categories.len())?;
        Ok(&categories[index])
    }

    /// Draw one word from a category's tier
    ///
    /// # Errors
    /// `InvalidDifficulty` for `Unknown`, `EmptyWordList` when the tier has
    /// no words, `RandomSource` when the source fails.
    pub fn choose_word<'c>(
        &mut self,
        category: &'c Category,
        difficulty: Difficulty,
    ) -> Result<&'c Word, SelectionError> {
        let words = category
            .words(difficulty)
            .ok_or(SelectionError::InvalidDifficulty(difficulty))?;

        if words.is_empty() {
            return Err(SelectionError::EmptyWordList {
                category: category.name().to_string(),
                difficulty,
            });
        }

        let index = self.index(words.len())?;
        Ok(&words[index])
    }
}
