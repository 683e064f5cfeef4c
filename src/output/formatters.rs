//! Formatting utilities for terminal output

use crate::core::{CellGrid, Difficulty, Direction, PlacedWord};

/// Character drawn for a cell no word passes through
pub const EMPTY_CELL: char = '·';

/// Render the grid as plain text, one line per row
///
/// Letters are separated by a space; empty cells use [`EMPTY_CELL`].
#[must_use]
pub fn grid_lines(grid: &CellGrid) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.letter.unwrap_or(EMPTY_CELL).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Placed words running along `direction`, sorted by clue number
#[must_use]
pub fn clues_for(words: &[PlacedWord], direction: Direction) -> Vec<&PlacedWord> {
    let mut clues: Vec<&PlacedWord> = words.iter().filter(|w| w.direction == direction).collect();
    clues.sort_by_key(|w| w.number);
    clues
}

/// Clue number as listed, pointing at the numbered square when it differs
///
/// A word that starts on the same square as an earlier word reads
/// `"2 (in 1)"`, since the square only shows the lower number.
#[must_use]
pub fn clue_label(word: &PlacedWord, grid: &CellGrid) -> String {
    match grid.get(word.start_row, word.start_col).and_then(|c| c.number) {
        Some(shown) if shown != word.number => format!("{} (in {shown})", word.number),
        _ => word.number.to_string(),
    }
}

/// Heading used for a clue column
#[must_use]
pub const fn direction_heading(direction: Direction) -> &'static str {
    match direction {
        Direction::Horizontal => "Horizontal →",
        Direction::Vertical => "Vertical ↓",
    }
}

/// Emoji badge for a difficulty
#[must_use]
pub const fn difficulty_badge(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "😊",
        Difficulty::Medium => "🤔",
        Difficulty::Hard => "🤯",
    }
}

/// Up to five stars, then a `+n` overflow count
#[must_use]
pub fn star_string(stars: u32) -> String {
    let shown = stars.min(5) as usize;
    let mut out = "⭐".repeat(shown);
    if stars > 5 {
        out.push_str(&format!(" +{}", stars - 5));
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
