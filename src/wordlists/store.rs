//! Persistent word list
//!
//! The list a puzzle author edits between sessions, stored as a JSON array of
//! word entries.

use super::{DEFAULT_WORDS, loader::entries_from_slice};
use crate::core::{Difficulty, WordEntry, WordError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reading, writing or validating a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode word list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("duplicate word id '{0}'")]
    DuplicateId(String),
    #[error("invalid entry '{id}': {source}")]
    InvalidEntry {
        id: String,
        #[source]
        source: WordError,
    },
}

/// Ordered, id-unique collection of word entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Build a list, validating ids and re-normalizing every entry
    ///
    /// # Errors
    /// Returns `WordListError::DuplicateId` or `WordListError::InvalidEntry`.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, WordListError> {
        let mut seen = FxHashSet::default();
        let mut normalized = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.id.clone()) {
                return Err(WordListError::DuplicateId(entry.id));
            }
            let checked = WordEntry::new(entry.id.clone(), &entry.text, &entry.clue, entry.difficulty)
                .map_err(|source| WordListError::InvalidEntry {
                    id: entry.id,
                    source,
                })?;
            normalized.push(checked);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The embedded starter list
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            entries: entries_from_slice(DEFAULT_WORDS),
        }
    }

    /// Read a list from `path`; a missing file yields an empty list
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, or holds duplicate ids or invalid entries.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "word list not found, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<WordEntry> =
            serde_json::from_str(&content).map_err(|source| WordListError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let list = Self::from_entries(entries)?;
        info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    /// Write the list to `path` as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WordListError> {
        let path = path.as_ref();
        let io_err = |source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json).map_err(io_err)?;

        info!(path = %path.display(), words = self.len(), "word list saved");
        Ok(())
    }

    /// Append a new entry with a fresh id and return it
    ///
    /// # Errors
    /// Returns `WordError` if the word or clue is invalid.
    pub fn add(&mut self, text: &str, clue: &str, difficulty: Difficulty) -> Result<&WordEntry, WordError> {
        let id = self.fresh_id();
        let entry = WordEntry::new(id, text, clue, difficulty)?;
        debug!(id = %entry.id, word = %entry.text, "word added");
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the entry with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Millisecond timestamp id, bumped past any id already in the list
    fn fresh_id(&self) -> String {
        let mut candidate = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        while self.entries.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
