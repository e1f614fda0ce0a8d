//! Secret word representation
//!
//! A `SecretWord` stores the mystery word along with letter position indices
//! used when revealing a correctly guessed letter.

use rustc_hash::FxHashMap;
use std::fmt;

/// The mystery word the player must uncover
///
/// Stores the word as uppercase text and maintains a map of letter positions
/// so a hit can be revealed at every matching index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAscii => write!(f, "Secret word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Secret word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// The input is normalized to uppercase; the game compares and displays
    /// uppercase letters only.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, or contains
    /// non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("python").unwrap();
    /// assert_eq!(word.text(), "PYTHON");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("h4ngman").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Build position map for revealing hits
        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, b) in text.bytes().enumerate() {
            letter_positions.entry(b).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters (never true after validation)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("python").unwrap();
        assert_eq!(word.text(), "PYTHON");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_mixed_case_normalized() {
        let word = SecretWord::new("HangMan").unwrap();
        assert_eq!(word.text(), "HANGMAN");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(SecretWord::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(SecretWord::new("ardu1no").is_err()); // Number
        assert!(SecretWord::new("two words").is_err()); // Space
        assert!(SecretWord::new("becode!").is_err()); // Punctuation
    }

    #[test]
    fn word_contains() {
        let word = SecretWord::new("becode").unwrap();
        assert!(word.contains(b'B'));
        assert!(word.contains(b'E'));
        assert!(!word.contains(b'Z'));
        // Lookup is uppercase only
        assert!(!word.contains(b'b'));
    }

    #[test]
    fn word_positions_of() {
        let word = SecretWord::new("becode").unwrap();
        assert_eq!(word.positions_of(b'B'), &[0]);
        assert_eq!(word.positions_of(b'C'), &[2]);
        assert_eq!(word.positions_of(b'Z'), &[]);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("sessions").unwrap();
        assert_eq!(word.positions_of(b'S'), &[0, 2, 3, 7]);
        assert_eq!(word.positions_of(b'E'), &[1]);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("arduino").unwrap();
        assert_eq!(format!("{word}"), "ARDUINO");
    }

    #[test]
    fn word_equality_case_insensitive_input() {
        let word1 = SecretWord::new("learning").unwrap();
        let word2 = SecretWord::new("LEARNING").unwrap();
        assert_eq!(word1, word2);
    }
}
