//! Conversion of a working grid into consumer-facing cells

use super::working_grid::WorkingGrid;
use crate::core::CellGrid;

/// Build the annotated cell grid from committed letters and placements
///
/// Copies every letter, marks each placed word's first cell as a start cell
/// carrying its clue number, and lists the word's id on every cell of its run.
/// When two words start on the same cell, the cell keeps both numbers and
/// displays the lower one.
/// Pure: the same working grid always produces the same cells.
#[must_use]
pub fn materialize(working: &WorkingGrid) -> CellGrid {
    let size = working.size();
    let mut grid = CellGrid::empty(size);

    for row in 0..size {
        for col in 0..size {
            if let Some(cell) = grid.get_mut(row, col) {
                cell.letter = working.letter(row, col);
            }
        }
    }

    for word in working.placed() {
        if let Some(start) = grid.get_mut(word.start_row, word.start_col) {
            start.is_start = true;
            start.numbers.push(word.number);
            start.numbers.sort_unstable();
            start.number = start.numbers.first().copied();
        }

        for (row, col, _) in word.cells() {
            if let Some(cell) = grid.get_mut(row, col)
                && !cell.owner_word_ids.contains(&word.id)
            {
                cell.owner_word_ids.push(word.id.clone());
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Direction, WordEntry};

    fn entry(id: &str, text: &str) -> WordEntry {
        WordEntry::new(id, text, "clue", Difficulty::Easy).unwrap()
    }

    fn crossed_grid() -> WorkingGrid {
        let mut working = WorkingGrid::new(15);
        working.place(&entry("chat", "CHAT"), 7, 5, Direction::Horizontal, 1);
        working.place(&entry("arbre", "ARBRE"), 7, 7, Direction::Vertical, 2);
        working
    }

    #[test]
    fn empty_working_grid_gives_empty_cells() {
        let grid = materialize(&WorkingGrid::new(15));
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.iter().all(|c| !c.is_start && c.number.is_none()));
    }

    #[test]
    fn letters_copied() {
        let grid = materialize(&crossed_grid());
        assert_eq!(grid.get(7, 5).unwrap().letter, Some('C'));
        assert_eq!(grid.get(11, 7).unwrap().letter, Some('E'));
        assert_eq!(grid.get(0, 0).unwrap().letter, None);
        assert_eq!(grid.filled_count(), 8);
    }

    #[test]
    fn start_cells_carry_numbers() {
        let grid = materialize(&crossed_grid());

        let first = grid.get(7, 5).unwrap();
        assert!(first.is_start);
        assert_eq!(first.number, Some(1));

        let second = grid.get(7, 7).unwrap();
        assert!(second.is_start);
        assert_eq!(second.number, Some(2));
        assert_eq!(second.numbers, vec![2]);
        assert!(!second.is_shared_start());

        let interior = grid.get(7, 6).unwrap();
        assert!(!interior.is_start);
        assert_eq!(interior.number, None);

        assert_eq!(grid.iter().filter(|c| c.is_start).count(), 2);
    }

    #[test]
    fn owners_recorded_and_shared_at_crossing() {
        let grid = materialize(&crossed_grid());

        assert_eq!(grid.get(7, 6).unwrap().owner_word_ids, vec!["chat"]);
        assert_eq!(grid.get(9, 7).unwrap().owner_word_ids, vec!["arbre"]);
        assert_eq!(
            grid.get(7, 7).unwrap().owner_word_ids,
            vec!["chat", "arbre"]
        );
        assert!(grid.get(7, 7).unwrap().is_intersection());
        assert!(grid.get(0, 0).unwrap().owner_word_ids.is_empty());
    }

    #[test]
    fn shared_start_cell_keeps_both_numbers() {
        let mut working = WorkingGrid::new(15);
        working.place(&entry("chat", "CHAT"), 7, 5, Direction::Horizontal, 1);
        working.place(&entry("cat", "CAT"), 7, 5, Direction::Vertical, 2);
        let grid = materialize(&working);

        let start = grid.get(7, 5).unwrap();
        assert!(start.is_start);
        assert!(start.is_shared_start());
        assert_eq!(start.number, Some(1));
        assert_eq!(start.numbers, vec![1, 2]);
        assert_eq!(grid.iter().filter(|c| c.is_start).count(), 1);
    }

    #[test]
    fn materialization_is_repeatable() {
        let working = crossed_grid();
        assert_eq!(materialize(&working), materialize(&working));
    }
}
