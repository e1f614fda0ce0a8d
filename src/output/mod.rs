//! Terminal output formatting
//!
//! Rendering-only layer: every function here reads session or result state
//! and prints, never mutates.

pub mod display;
pub mod formatters;

pub use display::{
    print_loss, print_mystery_word, print_simulation_result, print_turn_status, print_welcome,
    print_win,
};
