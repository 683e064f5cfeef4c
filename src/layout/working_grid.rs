//! Placement validation and commitment
//!
//! The working grid is the mutable letter matrix used while a layout is being
//! built. It checks candidate placements against the letters already written
//! and records each committed word in placement order.

use crate::core::{Direction, PlacedWord, WordEntry};

/// Letter matrix plus the placements committed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingGrid {
    size: usize,
    letters: Vec<Option<char>>,
    placed: Vec<PlacedWord>,
}

impl WorkingGrid {
    /// An empty `size` × `size` grid with no placements
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
            placed: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letter at (`row`, `col`), `None` when empty or out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row < self.size && col < self.size {
            self.letters[row * self.size + col]
        } else {
            None
        }
    }

    /// Placements in the order they were committed
    #[inline]
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Check whether `letters` fits at (`row`, `col`) running along `direction`
    ///
    /// A placement is legal when:
    /// - the whole run stays inside the grid
    /// - every cell on the run is empty or already holds the same letter
    /// - the cell just before the start and just after the end, on the same
    ///   axis, are empty (when inside the grid)
    ///
    /// Cells beside the run on the perpendicular axis are not inspected, so
    /// parallel words may sit in adjacent rows or columns.
    #[must_use]
    pub fn can_place(&self, letters: &[char], row: usize, col: usize, direction: Direction) -> bool {
        let len = letters.len();
        if len == 0 {
            return false;
        }

        let (along, across) = match direction {
            Direction::Horizontal => (col, row),
            Direction::Vertical => (row, col),
        };
        if across >= self.size || along + len > self.size {
            return false;
        }

        let conflict = letters.iter().enumerate().any(|(offset, &letter)| {
            let (r, c) = direction.advance(row, col, offset);
            self.letter(r, c).is_some_and(|existing| existing != letter)
        });
        if conflict {
            return false;
        }

        if along > 0 {
            let (r, c) = match direction {
                Direction::Horizontal => (row, col - 1),
                Direction::Vertical => (row - 1, col),
            };
            if self.letter(r, c).is_some() {
                return false;
            }
        }

        // letter() reports None past the edge, which counts as empty
        let (r, c) = direction.advance(row, col, len);
        self.letter(r, c).is_none()
    }

    /// Write `word` into the grid and record it with clue `number`
    ///
    /// The caller must have checked the placement with [`Self::can_place`];
    /// cells are overwritten unconditionally.
    pub fn place(&mut self, word: &WordEntry, row: usize, col: usize, direction: Direction, number: u32) {
        debug_assert!(
            self.can_place(&word.letters(), row, col, direction),
            "placement of {} at ({row}, {col}) {direction} was not validated",
            word.text
        );

        for (offset, letter) in word.text.chars().enumerate() {
            let (r, c) = direction.advance(row, col, offset);
            if r < self.size && c < self.size {
                self.letters[r * self.size + c] = Some(letter);
            }
        }

        self.placed.push(PlacedWord {
            id: word.id.clone(),
            text: word.text.clone(),
            clue: word.clue.clone(),
            start_row: row,
            start_col: col,
            direction,
            number,
        });
    }
}
