//! Attempt order for input words

use crate::core::WordEntry;
use std::cmp::Reverse;

/// Sort words longest first
///
/// The sort is stable: words of equal length keep their input order, so the
/// same input always yields the same attempt order.
#[must_use]
pub fn order_words(words: &[WordEntry]) -> Vec<&WordEntry> {
    let mut ordered: Vec<&WordEntry> = words.iter().collect();
    ordered.sort_by_key(|w| Reverse(w.len()));
    ordered
}
