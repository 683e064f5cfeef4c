//! Crossword layout engine
//!
//! Turns an ordered list of word entries into a fixed-size letter grid plus
//! the placement of every word that fit.

pub mod config;
mod engine;
mod intersections;
mod materialize;
mod ordering;
mod working_grid;

pub use config::{GRID_SIZE, LayoutConfig, MAX_WORDS, RANDOM_ATTEMPTS, RANDOM_FALLBACK_LIMIT};
pub use engine::{
    LayoutEngine, LayoutResult, UnplacedReason, UnplacedWord, generate_layout,
    generate_layout_with_rng,
};
pub use intersections::{Intersection, find_intersections, intersect_letters};
pub use materialize::materialize;
pub use ordering::order_words;
pub use working_grid::WorkingGrid;
