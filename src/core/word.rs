//! Word entries supplied to the layout engine
//!
//! A `WordEntry` is one (word, clue) pair as entered by whoever prepares the puzzle.
//! The text is normalized to uppercase letters on construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How hard a clue is meant to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facile" => Ok(Self::Easy),
            "medium" | "moyen" => Ok(Self::Medium),
            "hard" | "difficile" => Ok(Self::Hard),
            other => Err(WordError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only letters")]
    InvalidCharacters(String),
    #[error("clue must not be empty")]
    EmptyClue,
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// A (word, clue) pair handed to the layout engine
///
/// `id` must be unique within one input list; the engine copies it onto
/// every placement and cell that belongs to this word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub text: String,
    pub clue: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl WordEntry {
    /// Create a validated entry
    ///
    /// The text is trimmed and uppercased. Letters outside ASCII (accented
    /// letters, for instance) are kept as long as they are alphabetic.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty after trimming
    /// - The text contains anything other than letters
    /// - The clue is empty after trimming
    ///
    /// # Examples
    /// ```
    /// use crossword_builder::core::{Difficulty, WordEntry};
    ///
    /// let entry = WordEntry::new("1", " chat ", "Il miaule", Difficulty::Easy).unwrap();
    /// assert_eq!(entry.text, "CHAT");
    /// assert_eq!(entry.len(), 4);
    ///
    /// assert!(WordEntry::new("2", "pas bon", "clue", Difficulty::Easy).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        text: &str,
        clue: &str,
        difficulty: Difficulty,
    ) -> Result<Self, WordError> {
        let text = normalize_text(text)?;
        let clue = clue.trim();
        if clue.is_empty() {
            return Err(WordError::EmptyClue);
        }

        Ok(Self {
            id: id.into(),
            text,
            clue: clue.to_string(),
            difficulty,
        })
    }

    /// Number of letters (not bytes) in the word
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

    /// The word as a vector of letters, indexable by position
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }
}

/// Trim and uppercase a raw word, rejecting anything that is not a letter
///
/// # Errors
/// Returns `WordError::Empty` or `WordError::InvalidCharacters`.
pub fn normalize_text(raw: &str) -> Result<String, WordError> {
    let text = raw.trim().to_uppercase();
    if text.is_empty() {
        return Err(WordError::Empty);
    }
    if !text.chars().all(char::is_alphabetic) {
        return Err(WordError::InvalidCharacters(text));
    }
    Ok(text)
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
