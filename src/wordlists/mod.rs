//! Word lists for fallback candidate generation
//!
//! Provides an embedded lexicon compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_count_matches_const() {
        assert_eq!(LEXICON.len(), LEXICON_COUNT);
    }

    #[test]
    fn lexicon_words_are_uppercase_letters() {
        for &word in LEXICON {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn lexicon_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = LEXICON.iter().collect();
        assert_eq!(unique.len(), LEXICON.len());
    }

    #[test]
    fn lexicon_covers_common_lengths() {
        for length in 3..=6 {
            assert!(
                LEXICON.iter().filter(|w| w.len() == length).count() >= 6,
                "too few {length}-letter words"
            );
        }
    }
}
