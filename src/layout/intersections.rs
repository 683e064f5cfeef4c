//! Shared-letter detection between two words

/// A pair of positions, one in each word, holding the same letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intersection {
    pub pos_a: usize,
    pub pos_b: usize,
}

/// Every (position in `a`, position in `b`) where the letters match
///
/// Pairs come out ordered by `pos_a`, then `pos_b`. Nothing is deduplicated
/// or ranked; callers decide which pair to try first.
///
/// # Examples
/// ```
/// use crossword_builder::layout::find_intersections;
///
/// let pairs = find_intersections("CHAT", "ACHATS");
/// assert_eq!(pairs[0].pos_a, 0);
/// assert_eq!(pairs[0].pos_b, 1);
/// ```
#[must_use]
pub fn find_intersections(a: &str, b: &str) -> Vec<Intersection> {
    let b: Vec<char> = b.chars().collect();
    intersect_letters(&a.chars().collect::<Vec<_>>(), &b)
}

/// Same as [`find_intersections`] over pre-split letters
#[must_use]
pub fn intersect_letters(a: &[char], b: &[char]) -> Vec<Intersection> {
    let mut pairs = Vec::new();
    for (pos_a, la) in a.iter().enumerate() {
        for (pos_b, lb) in b.iter().enumerate() {
            if la == lb {
                pairs.push(Intersection { pos_a, pos_b });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(a: &str, b: &str) -> Vec<(usize, usize)> {
        find_intersections(a, b)
            .into_iter()
            .map(|i| (i.pos_a, i.pos_b))
            .collect()
    }

    #[test]
    fn chat_achats() {
        assert_eq!(
            pairs("CHAT", "ACHATS"),
            vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]
        );
    }

    #[test]
    fn no_common_letters() {
        assert!(pairs("CHAT", "ZOO").is_empty());
    }

    #[test]
    fn repeated_letters_not_deduplicated() {
        assert_eq!(pairs("AA", "AA"), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn empty_words() {
        assert!(pairs("", "CHAT").is_empty());
        assert!(pairs("CHAT", "").is_empty());
    }

    #[test]
    fn multibyte_letters_use_letter_positions() {
        assert_eq!(pairs("ÉTÉ", "TÉ"), vec![(0, 1), (1, 0), (2, 1)]);
    }
}
