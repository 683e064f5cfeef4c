//! Placement policy constants

use serde::{Deserialize, Serialize};

/// Side length of every generated grid
pub const GRID_SIZE: usize = 15;

/// Words considered from the sorted input; the rest are never attempted
pub const MAX_WORDS: usize = 8;

/// Randomized placement tries per word when no intersection fits
pub const RANDOM_ATTEMPTS: usize = 50;

/// Random fallback is only allowed while fewer than this many words are placed
pub const RANDOM_FALLBACK_LIMIT: usize = 4;

/// Tunable placement policy
///
/// `Default` reproduces the fixed policy: 8 words considered, 50 random
/// attempts, random fallback while fewer than 4 words are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub max_words: usize,
    pub random_attempts: usize,
    pub random_fallback_limit: usize,
}

impl LayoutConfig {
    #[must_use]
    pub const fn new(max_words: usize, random_attempts: usize, random_fallback_limit: usize) -> Self {
        Self {
            max_words,
            random_attempts,
            random_fallback_limit,
        }
    }

    /// Same policy without the random fallback
    ///
    /// Layouts produced this way depend only on the input order.
    #[must_use]
    pub const fn deterministic() -> Self {
        Self::new(MAX_WORDS, 0, 0)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(MAX_WORDS, RANDOM_ATTEMPTS, RANDOM_FALLBACK_LIMIT)
    }
}
