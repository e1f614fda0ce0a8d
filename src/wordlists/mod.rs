//! Word list and random selection
//!
//! Provides the embedded candidate vocabulary and a seedable picker for
//! choosing the secret word.

mod embedded;
pub mod picker;

pub use embedded::{WORD_COUNT, WORDS};
pub use picker::WordPicker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORD_COUNT);
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
