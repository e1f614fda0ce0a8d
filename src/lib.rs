//! Hangman
//!
//! A terminal hangman game. A mystery word is drawn from a fixed vocabulary
//! and the player guesses one letter per turn until the word is revealed or
//! all five lives are spent.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameStatus, SecretWord};
//!
//! let secret = SecretWord::new("cat").unwrap();
//! let mut session = GameSession::new(secret);
//!
//! session.submit_guess("c").unwrap();
//! assert_eq!(session.mask(), b"C__");
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Word list and random selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
