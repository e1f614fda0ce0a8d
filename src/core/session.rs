//! Game session state machine
//!
//! A `GameSession` owns all mutable state for one round: the reveal mask,
//! the wrong-guess list, lives, and turn/error counters. State changes only
//! through `submit_guess`; everything else is a read-only view, which keeps
//! the session testable without capturing terminal output.

use super::{Guess, GuessError, SecretWord};

/// Lives a player starts each round with
pub const STARTING_LIVES: u32 = 5;

/// Placeholder byte for an unrevealed mask position
pub const PLACEHOLDER: u8 = b'_';

/// Terminal-state indicator for a session
///
/// `Won` and `Lost` are terminal; drivers must stop accepting guesses once
/// either is reached. A fully revealed word wins even if the last guess also
/// spent the last life, because the win check runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of applying one validated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret word
    ///
    /// `newly_revealed` is the number of mask positions this guess opened;
    /// zero means the letter was already revealed (the turn still counts).
    Hit { letter: u8, newly_revealed: usize },
    /// The letter does not occur in the secret word
    ///
    /// `repeated` is true when the same wrong letter was guessed before. A
    /// repeat still costs a life and an error, but the displayed wrong-guess
    /// list keeps a single entry.
    Miss { letter: u8, repeated: bool },
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    mask: Vec<u8>,
    wrong_guesses: Vec<u8>,
    lives: u32,
    turn_count: u32,
    error_count: u32,
}

impl GameSession {
    /// Start a new round for the given secret word
    ///
    /// The mask starts fully hidden, lives at [`STARTING_LIVES`], and all
    /// counters at zero.
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let mask = vec![PLACEHOLDER; secret.len()];
        Self {
            secret,
            mask,
            wrong_guesses: Vec::new(),
            lives: STARTING_LIVES,
            turn_count: 0,
            error_count: 0,
        }
    }

    /// Validate raw player input and apply it as a guess
    ///
    /// Invalid input leaves the session untouched: no turn, no life, no
    /// counter changes. Callers handle the error by re-prompting.
    ///
    /// # Errors
    /// Returns [`GuessError`] when the input does not normalize to a single
    /// A-Z letter.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let guess = Guess::parse(raw)?;
        Ok(self.apply(guess))
    }

    /// Apply an already-validated guess
    ///
    /// Hits reveal the letter at every matching position. Misses cost one
    /// life and one error each time, even for a letter already on the
    /// wrong-guess list. Every applied guess advances the turn counter.
    pub fn apply(&mut self, guess: Guess) -> GuessOutcome {
        let letter = guess.letter();

        let outcome = if self.secret.contains(letter) {
            let newly_revealed = self.reveal(letter);
            GuessOutcome::Hit {
                letter,
                newly_revealed,
            }
        } else {
            self.error_count += 1;
            self.lives = self.lives.saturating_sub(1);
            let repeated = self.wrong_guesses.contains(&letter);
            if !repeated {
                self.wrong_guesses.push(letter);
            }
            GuessOutcome::Miss { letter, repeated }
        };

        self.turn_count += 1;
        outcome
    }

    /// Evaluate the session's terminal status
    ///
    /// Pure function of state: calling it repeatedly without an intervening
    /// guess always returns the same answer. The win check precedes the loss
    /// check.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_fully_revealed() {
            GameStatus::Won
        } else if self.lives == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether every mask position has been revealed
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        !self.mask.contains(&PLACEHOLDER)
    }

    /// The reveal mask: `_` for hidden positions, the letter otherwise
    #[inline]
    #[must_use]
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Wrong letters guessed so far, in first-guess order, deduplicated
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> &[u8] {
        &self.wrong_guesses
    }

    /// Lives remaining
    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Validated guesses processed so far
    #[inline]
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Wrong guesses counted so far (repeats included)
    #[inline]
    #[must_use]
    pub const fn error_count(&self) -> u32 {
        self.error_count
    }

    /// The secret word for this round
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    fn reveal(&mut self, letter: u8) -> usize {
        let mut newly_revealed = 0;
        for &i in self.secret.positions_of(letter) {
            if self.mask[i] == PLACEHOLDER {
                newly_revealed += 1;
            }
            self.mask[i] = letter;
        }
        newly_revealed
    }
}
