//! Player progress on one generated layout

use crate::core::PlacedWord;
use crate::layout::LayoutResult;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Points awarded per completed word
pub const POINTS_PER_WORD: u32 = 100;

/// Running score for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub words_completed: usize,
    pub total_words: usize,
    pub score: u32,
    pub streak: u32,
    pub stars: u32,
}

/// Rejected player input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cell ({row}, {col}) is not part of any word")]
    NotALetterCell { row: usize, col: usize },
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// Answers typed by a player against a fixed layout
#[derive(Debug, Clone)]
pub struct Session {
    layout: LayoutResult,
    answers: FxHashMap<(usize, usize), char>,
    completed: FxHashSet<String>,
    stats: GameStats,
}

impl Session {
    #[must_use]
    pub fn new(layout: LayoutResult) -> Self {
        let stats = GameStats {
            total_words: layout.placed_words.len(),
            ..GameStats::default()
        };
        Self {
            layout,
            answers: FxHashMap::default(),
            completed: FxHashSet::default(),
            stats,
        }
    }

    #[inline]
    #[must_use]
    pub const fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Letter the player typed at (`row`, `col`)
    #[must_use]
    pub fn answer(&self, row: usize, col: usize) -> Option<char> {
        self.answers.get(&(row, col)).copied()
    }

    #[must_use]
    pub fn is_completed(&self, word_id: &str) -> bool {
        self.completed.contains(word_id)
    }

    /// All placed words are filled in correctly
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.layout.placed_words.is_empty()
            && self.completed.len() == self.layout.placed_words.len()
    }

    /// Type `letter` into a cell and return the ids of words it completed
    ///
    /// # Errors
    /// Returns `SessionError` if the cell holds no letter of the solution or
    /// `letter` is not alphabetic.
    pub fn enter(&mut self, row: usize, col: usize, letter: char) -> Result<Vec<String>, SessionError> {
        if !letter.is_alphabetic() {
            return Err(SessionError::InvalidLetter(letter));
        }
        if !self.is_letter_cell(row, col) {
            return Err(SessionError::NotALetterCell { row, col });
        }

        let upper = letter.to_uppercase().next().unwrap_or(letter);
        self.answers.insert((row, col), upper);
        Ok(self.refresh_completed())
    }

    /// Erase a cell; returns whether something was there
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        let removed = self.answers.remove(&(row, col)).is_some();
        if removed {
            self.refresh_completed();
        }
        removed
    }

    /// Fill the first empty cell of a random unfinished word with its letter
    ///
    /// Returns the revealed cell, or `None` when every unfinished word is
    /// already fully typed in.
    pub fn reveal_hint<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize, char)> {
        let candidates: Vec<&PlacedWord> = self
            .layout
            .placed_words
            .iter()
            .filter(|w| !self.completed.contains(&w.id))
            .filter(|w| w.cells().any(|(r, c, _)| !self.answers.contains_key(&(r, c))))
            .collect();

        let word = candidates.choose(rng)?;
        let hint = word
            .cells()
            .find(|(r, c, _)| !self.answers.contains_key(&(*r, *c)))?;

        debug!(word = %word.text, row = hint.0, col = hint.1, "hint revealed");
        self.answers.insert((hint.0, hint.1), hint.2);
        self.refresh_completed();
        Some(hint)
    }

    /// Clear every answer and the score
    pub fn reset(&mut self) {
        self.answers.clear();
        self.completed.clear();
        self.stats = GameStats {
            total_words: self.layout.placed_words.len(),
            ..GameStats::default()
        };
    }

    fn is_letter_cell(&self, row: usize, col: usize) -> bool {
        self.layout
            .grid
            .get(row, col)
            .is_some_and(crate::core::Cell::is_used)
    }

    fn is_word_correct(&self, word: &PlacedWord) -> bool {
        word.cells()
            .all(|(r, c, letter)| self.answers.get(&(r, c)) == Some(&letter))
    }

    /// Recompute completed words and award points for new completions
    fn refresh_completed(&mut self) -> Vec<String> {
        let now: FxHashSet<String> = self
            .layout
            .placed_words
            .iter()
            .filter(|w| self.is_word_correct(w))
            .map(|w| w.id.clone())
            .collect();

        let newly: Vec<String> = self
            .layout
            .placed_words
            .iter()
            .filter(|w| now.contains(&w.id) && !self.completed.contains(&w.id))
            .map(|w| w.id.clone())
            .collect();

        // A single edit can complete one word while breaking a crossing one
        if !newly.is_empty() {
            let gained = u32::try_from(newly.len()).unwrap_or(u32::MAX);
            self.stats.score = self.stats.score.saturating_add(gained * POINTS_PER_WORD);
            self.stats.streak += gained;
            self.stats.stars = self.stats.score / POINTS_PER_WORD;
        }
        self.stats.words_completed = now.len();
        self.completed = now;
        newly
    }
}
