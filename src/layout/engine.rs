//! Greedy crossword layout
//!
//! Words are tried longest first. The first word that fits is centered
//! horizontally; each later word is crossed with an already placed word on
//! the first shared letter that validates, falling back to random positions
//! while the grid is still sparse. Nothing is backtracked.

use super::config::{GRID_SIZE, LayoutConfig};
use super::intersections::intersect_letters;
use super::materialize::materialize;
use super::ordering::order_words;
use super::working_grid::WorkingGrid;
use crate::core::{CellGrid, Direction, PlacedWord, WordEntry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Why an input word is missing from the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// Longer than the grid side
    TooLong,
    /// Attempted, but no crossing or random position validated
    NoFit,
    /// Beyond the word cap, never attempted
    OverCap,
}

/// An input word that did not make it into the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedWord {
    pub id: String,
    pub text: String,
    pub reason: UnplacedReason,
}

/// Output of one layout run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub grid: CellGrid,
    pub placed_words: Vec<PlacedWord>,
    pub unplaced: Vec<UnplacedWord>,
}

impl LayoutResult {
    /// Whether every input word was placed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Look up a placement by word id
    #[must_use]
    pub fn placed(&self, id: &str) -> Option<&PlacedWord> {
        self.placed_words.iter().find(|w| w.id == id)
    }
}

/// Layout generator holding the placement policy
///
/// The engine keeps no state between calls; every call to [`Self::generate`]
/// builds and discards its own working grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `words` on a fresh `GRID_SIZE` grid
    ///
    /// Never fails: words that cannot be placed are reported in
    /// `LayoutResult::unplaced`. `rng` only drives the random fallback, so a
    /// seeded generator reproduces the exact same layout.
    pub fn generate<R: Rng>(&self, words: &[WordEntry], rng: &mut R) -> LayoutResult {
        let mut working = WorkingGrid::new(GRID_SIZE);
        let mut unplaced = Vec::new();
        let ordered = order_words(words);

        for (index, word) in ordered.iter().enumerate() {
            if index >= self.config.max_words {
                debug!(word = %word.text, "over word cap, not attempted");
                unplaced.push(unplaced_word(word, UnplacedReason::OverCap));
                continue;
            }

            let letters = word.letters();
            if letters.len() > GRID_SIZE {
                debug!(word = %word.text, len = letters.len(), "longer than grid");
                unplaced.push(unplaced_word(word, UnplacedReason::TooLong));
                continue;
            }

            let number = next_number(&working);
            let placement = if working.placed().is_empty() {
                Some(anchor_position(letters.len()))
            } else {
                find_crossing(&working, &letters).or_else(|| {
                    if working.placed().len() < self.config.random_fallback_limit {
                        self.find_random(&working, &letters, rng)
                    } else {
                        None
                    }
                })
            };

            match placement {
                Some((row, col, direction)) => {
                    debug!(word = %word.text, row, col, %direction, number, "placed");
                    working.place(word, row, col, direction, number);
                }
                None => {
                    debug!(word = %word.text, "no legal placement");
                    unplaced.push(unplaced_word(word, UnplacedReason::NoFit));
                }
            }
        }

        let grid = materialize(&working);
        let placed_words = working.placed().to_vec();
        info!(
            placed = placed_words.len(),
            unplaced = unplaced.len(),
            "layout generated"
        );

        LayoutResult {
            grid,
            placed_words,
            unplaced,
        }
    }

    /// Up to `random_attempts` uniformly random positions in the grid interior
    fn find_random<R: Rng>(
        &self,
        working: &WorkingGrid,
        letters: &[char],
        rng: &mut R,
    ) -> Option<(usize, usize, Direction)> {
        let interior = 1..=GRID_SIZE - 2;
        for _ in 0..self.config.random_attempts {
            let direction = if rng.random_bool(0.5) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let row = rng.random_range(interior.clone());
            let col = rng.random_range(interior.clone());

            if working.can_place(letters, row, col, direction) {
                return Some((row, col, direction));
            }
        }
        None
    }
}

/// Lay out `words` with the default policy and an entropy-seeded generator
#[must_use]
pub fn generate_layout(words: &[WordEntry]) -> LayoutResult {
    LayoutEngine::default().generate(words, &mut rand::rng())
}

/// Lay out `words` with the default policy and a caller-supplied generator
pub fn generate_layout_with_rng<R: Rng>(words: &[WordEntry], rng: &mut R) -> LayoutResult {
    LayoutEngine::default().generate(words, rng)
}

/// Centered horizontal position for the first word
///
/// `len` must not exceed `GRID_SIZE`.
fn anchor_position(len: usize) -> (usize, usize, Direction) {
    (GRID_SIZE / 2, (GRID_SIZE - len) / 2, Direction::Horizontal)
}

/// First crossing that validates, scanning placed words in placement order
///
/// The candidate runs perpendicular to the placed word, shifted so that the
/// shared letters land on the same cell.
fn find_crossing(working: &WorkingGrid, letters: &[char]) -> Option<(usize, usize, Direction)> {
    for placed in working.placed() {
        let placed_letters: Vec<char> = placed.text.chars().collect();
        let direction = placed.direction.crossing();

        for hit in intersect_letters(&placed_letters, letters) {
            let anchor = match placed.direction {
                Direction::Horizontal => placed
                    .start_row
                    .checked_sub(hit.pos_b)
                    .map(|row| (row, placed.start_col + hit.pos_a)),
                Direction::Vertical => placed
                    .start_col
                    .checked_sub(hit.pos_b)
                    .map(|col| (placed.start_row + hit.pos_a, col)),
            };

            if let Some((row, col)) = anchor
                && working.can_place(letters, row, col, direction)
            {
                return Some((row, col, direction));
            }
        }
    }
    None
}

fn next_number(working: &WorkingGrid) -> u32 {
    u32::try_from(working.placed().len() + 1).unwrap_or(u32::MAX)
}

fn unplaced_word(word: &WordEntry, reason: UnplacedReason) -> UnplacedWord {
    UnplacedWord {
        id: word.id.clone(),
        text: word.text.clone(),
        reason,
    }
}
