//! Committed word placements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis a word runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The perpendicular axis
    #[inline]
    #[must_use]
    pub const fn crossing(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// (row, col) step taken to move one letter forward along this axis
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }

    /// Cell at `offset` letters from (`row`, `col`) along this axis
    #[inline]
    #[must_use]
    pub const fn advance(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        let (dr, dc) = self.step();
        (row + dr * offset, col + dc * offset)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// A word committed to the grid
///
/// Created once per successfully placed word and never changed afterwards.
/// `number` is the clue number, assigned in placement order starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub id: String,
    pub text: String,
    pub clue: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub number: u32,
}

impl PlacedWord {
    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Every (row, col, letter) along the word's run, start to end
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.text.chars().enumerate().map(|(offset, letter)| {
            let (row, col) = self
                .direction
                .advance(self.start_row, self.start_col, offset);
            (row, col, letter)
        })
    }

    /// Whether (`row`, `col`) lies on this word's run
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.cells().any(|(r, c, _)| r == row && c == col)
    }
}
