//! Annotated output cells
//!
//! The grid handed to consumers: one `Cell` per square with its letter, clue
//! number (on start cells) and the ids of the words running through it.

use serde::{Deserialize, Serialize};

/// One square of the materialized grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub is_start: bool,
    /// Lowest clue number starting here
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub number: Option<u32>,
    /// Every clue number starting here, ascending
    ///
    /// Holds two entries when an across and a down word share a first letter.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub numbers: Vec<u32>,
    pub owner_word_ids: Vec<String>,
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            ..Self::default()
        }
    }

    /// Whether any word passes through this cell
    #[inline]
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.letter.is_some()
    }

    /// Whether more than one word starts here
    #[inline]
    #[must_use]
    pub fn is_shared_start(&self) -> bool {
        self.numbers.len() > 1
    }

    /// Whether two words cross here
    #[inline]
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.owner_word_ids.len() >= 2
    }
}

/// Square grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// A `size` × `size` grid with every cell empty
    #[must_use]
    pub fn empty(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Cell::empty(i / size, i % size))
            .collect();
        Self { size, cells }
    }

    /// Side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.size && col < self.size {
            self.cells.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over every cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_used()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_coordinates() {
        let grid = CellGrid::empty(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.iter().count(), 9);
        let cell = grid.get(2, 1).unwrap();
        assert_eq!((cell.row, cell.col), (2, 1));
        assert!(!cell.is_used());
        assert!(cell.owner_word_ids.is_empty());
    }

    #[test]
    fn out_of_bounds_lookup() {
        let grid = CellGrid::empty(3);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn rows_are_size_long() {
        let grid = CellGrid::empty(4);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 4));
        assert_eq!(rows[1][0].row, 1);
    }

    #[test]
    fn intersection_needs_two_owners() {
        let mut cell = Cell::empty(0, 0);
        cell.owner_word_ids.push("a".to_string());
        assert!(!cell.is_intersection());
        cell.owner_word_ids.push("b".to_string());
        assert!(cell.is_intersection());
    }
}
