//! Word list management command
//!
//! Add, remove and list entries in the JSON word list.

use crate::core::{Difficulty, WordEntry};
use crate::wordlists::{WordList, WordListError, loader};
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Load the list at `path`, falling back to the embedded defaults when the
/// file is absent or empty
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_or_defaults(path: &Path) -> Result<WordList, WordListError> {
    let list = WordList::load(path)?;
    if list.is_empty() {
        Ok(WordList::defaults())
    } else {
        Ok(list)
    }
}

/// Load the list at `path` for editing
///
/// A missing file starts from the embedded defaults, so the first edit keeps
/// the words `play` and `generate` were already using.
fn load_for_edit(path: &Path) -> Result<WordList, WordListError> {
    if path.exists() {
        WordList::load(path)
    } else {
        info!(path = %path.display(), "creating word list from the embedded defaults");
        Ok(WordList::defaults())
    }
}

/// Add a word to the list stored at `path` and save it
///
/// A missing file is created from the embedded defaults plus the new word.
///
/// # Errors
///
/// Returns an error if the entry is invalid or the file cannot be read or written.
pub fn add_word(
    path: &Path,
    text: &str,
    clue: &str,
    difficulty: Difficulty,
) -> anyhow::Result<WordEntry> {
    let mut list = load_for_edit(path)?;
    let entry = list.add(text, clue, difficulty)?.clone();
    list.save(path)?;
    Ok(entry)
}

/// Remove the word with `id` from the list stored at `path`
///
/// Returns whether an entry was removed; the file is only rewritten when it was.
/// Ids of the embedded defaults can be removed before the file exists.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn remove_word(path: &Path, id: &str) -> Result<bool, WordListError> {
    let mut list = load_for_edit(path)?;
    let removed = list.remove(id);
    if removed {
        list.save(path)?;
    }
    Ok(removed)
}

/// Append every valid `WORD|clue|difficulty` line of `source` to the list at `path`
///
/// Returns the number of words added.
///
/// # Errors
///
/// Returns an error if `source` cannot be read or the list cannot be read or written.
pub fn import_words(path: &Path, source: &Path) -> anyhow::Result<usize> {
    let imported = loader::load_from_file(source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let mut list = load_for_edit(path)?;
    for entry in &imported {
        list.add(&entry.text, &entry.clue, entry.difficulty)?;
    }
    if !imported.is_empty() {
        list.save(path)?;
    }
    Ok(imported.len())
}
