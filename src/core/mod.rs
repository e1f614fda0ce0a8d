//! Core domain types for hangman
//!
//! This module contains the game-state machine and its supporting types with
//! zero terminal dependencies. Everything here is pure and directly testable.

mod guess;
mod session;
mod word;

pub use guess::{Guess, GuessError};
pub use session::{GameSession, GameStatus, GuessOutcome, PLACEHOLDER, STARTING_LIVES};
pub use word::{SecretWord, WordError};
