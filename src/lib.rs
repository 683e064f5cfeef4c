//! Crossword Builder
//!
//! Lays out a short list of (word, clue) pairs on a fixed 15×15 grid and lets
//! a player solve the result in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_builder::core::{Difficulty, WordEntry};
//! use crossword_builder::layout::generate_layout_with_rng;
//! use rand::SeedableRng;
//!
//! let words = vec![
//!     WordEntry::new("1", "chat", "Il miaule", Difficulty::Easy).unwrap(),
//!     WordEntry::new("2", "achats", "Emplettes", Difficulty::Medium).unwrap(),
//! ];
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let layout = generate_layout_with_rng(&words, &mut rng);
//! assert_eq!(layout.placed_words.len(), 2);
//! ```

// Core domain types
pub mod core;

// Placement algorithm
pub mod layout;

// Player progress on a layout
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
