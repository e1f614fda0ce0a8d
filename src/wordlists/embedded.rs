//! Embedded candidate word list
//!
//! The vocabulary the mystery word is drawn from, compiled into the binary.
//! Words are stored lowercase; `SecretWord` normalizes on construction.

/// Candidate mystery words
pub const WORDS: &[&str] = &[
    "becode",
    "learning",
    "mathematics",
    "sessions",
    "arduino",
    "python",
    "hangman",
];

/// Number of candidate words
pub const WORD_COUNT: usize = 7;
