//! Word list loading utilities
//!
//! Converts the embedded triples and plain-text files into `WordEntry` values.

use crate::core::{Difficulty, WordEntry};
use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a `WORD|clue|difficulty` text file
///
/// Blank lines, `#` comments and invalid entries are skipped. A missing
/// difficulty defaults to easy. Ids are the 1-based line numbers.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Parse `WORD|clue|difficulty` lines, skipping anything invalid
#[must_use]
pub fn parse_lines(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let mut fields = trimmed.splitn(3, '|');
            let word = fields.next()?;
            let clue = fields.next()?;
            let difficulty = fields
                .next()
                .map_or(Ok(Difficulty::Easy), |d| d.parse::<Difficulty>())
                .ok()?;
            WordEntry::new((index + 1).to_string(), word, clue, difficulty).ok()
        })
        .collect()
}

/// Convert embedded (word, clue, difficulty) triples to entries
///
/// Ids are the 1-based positions in the slice.
///
/// # Examples
/// ```
/// use crossword_builder::wordlists::loader::entries_from_slice;
/// use crossword_builder::wordlists::DEFAULT_WORDS;
///
/// let entries = entries_from_slice(DEFAULT_WORDS);
/// assert_eq!(entries.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .enumerate()
        .filter_map(|(index, &(word, clue, difficulty))| {
            let difficulty = difficulty.parse().unwrap_or_default();
            WordEntry::new((index + 1).to_string(), word, clue, difficulty).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_from_slice_converts_valid_words() {
        let input = &[("chat", "Il miaule", "easy"), ("lune", "La nuit", "hard")];
        let entries = entries_from_slice(input);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].text, "CHAT");
        assert_eq!(entries[1].difficulty, Difficulty::Hard);
    }

    #[test]
    fn entries_from_slice_skips_invalid() {
        let input = &[("chat", "Il miaule", "easy"), ("a b", "bad", "easy"), ("sol", "", "easy")];
        let entries = entries_from_slice(input);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "CHAT");
    }

    #[test]
    fn unknown_difficulty_in_slice_defaults_to_easy() {
        let entries = entries_from_slice(&[("chat", "Il miaule", "??")]);
        assert_eq!(entries[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn parse_lines_handles_comments_and_defaults() {
        let content = "# header\n\nCHAT|Il miaule\nlune|Elle brille|medium\nbad line\nsol|Par terre|weird\n";
        let entries = parse_lines(content);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "3");
        assert_eq!(entries[0].difficulty, Difficulty::Easy);
        assert_eq!(entries[1].text, "LUNE");
        assert_eq!(entries[1].difficulty, Difficulty::Medium);
    }

    #[test]
    fn load_from_embedded_defaults() {
        use crate::wordlists::DEFAULT_WORDS;

        let entries = entries_from_slice(DEFAULT_WORDS);
        assert_eq!(entries.len(), DEFAULT_WORDS.len());
    }
}
