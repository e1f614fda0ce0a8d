//! Classic prompt-driven mode
//!
//! Plain text flow: welcome banner, per-turn status block, and a
//! blocking `Choose a letter:` prompt. Status is re-evaluated at the top of
//! every iteration, so a guess that finishes the word or spends the last
//! life ends the game on the next check rather than mid-turn.

use crate::core::{GameSession, GameStatus, GuessError};
use crate::output::display;
use anyhow::{Result, bail};
use std::io::{self, Write};

/// Drive one session to completion on stdin/stdout
///
/// # Errors
///
/// Returns an error if stdin or stdout fails, or if the input stream closes
/// before the game reaches a terminal state.
pub fn run_classic(session: &mut GameSession) -> Result<()> {
    loop {
        match session.status() {
            GameStatus::Won => {
                display::print_win(session);
                return Ok(());
            }
            GameStatus::Lost => {
                display::print_loss(session);
                return Ok(());
            }
            GameStatus::InProgress => {
                if session.turn_count() == 0 {
                    display::print_welcome();
                    display::print_mystery_word(session);
                } else {
                    display::print_turn_status(session);
                }
                prompt_guess(session)?;
            }
        }
    }
}

/// Prompt until the player submits a well-formed guess
///
/// Malformed input prints the matching error message and re-prompts without
/// advancing the session.
fn prompt_guess(session: &mut GameSession) -> Result<()> {
    loop {
        let raw = read_line("Choose a letter: ")?;
        match session.submit_guess(&raw) {
            Ok(_) => return Ok(()),
            Err(GuessError::NotSingleChar(_)) => {
                println!("ERROR: please insert only one character");
            }
            Err(GuessError::NotALetter(_)) => {
                println!("ERROR: please insert a letter from the alphabet only: ");
            }
        }
    }
}

/// Read one line of player input with a prompt
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        bail!("input stream closed before the game finished");
    }

    Ok(input)
}
