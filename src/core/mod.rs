//! Core domain types for crossword layouts
//!
//! Plain data shared by the layout engine, the play session and the front ends.

mod cell;
mod placement;
mod word;

pub use cell::{Cell, CellGrid};
pub use placement::{Direction, PlacedWord};
pub use word::{Difficulty, WordEntry, WordError, normalize_text};
