//! Formatting utilities for terminal output

use crate::core::STARTING_LIVES;

/// Render a run of letters as a space-separated string
///
/// Used for both the reveal mask (`_ A _`) and the wrong-guess list (`X Z`).
#[must_use]
pub fn spaced(letters: &[u8]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, &b) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(b as char);
    }
    result
}

/// Pick the singular or plural form based on a count
#[must_use]
pub fn pluralize<'a>(count: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Render remaining lives as a bar of filled and empty blocks
#[must_use]
pub fn lives_bar(lives: u32, width: usize) -> String {
    let filled = ((f64::from(lives) / f64::from(STARTING_LIVES)) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_mask() {
        assert_eq!(spaced(b"_A_"), "_ A _");
    }

    #[test]
    fn spaced_single_letter() {
        assert_eq!(spaced(b"X"), "X");
    }

    #[test]
    fn spaced_empty() {
        assert_eq!(spaced(b""), "");
    }

    #[test]
    fn pluralize_one() {
        assert_eq!(pluralize(1, "life", "lives"), "life");
        assert_eq!(pluralize(1, "error", "errors"), "error");
    }

    #[test]
    fn pluralize_many() {
        assert_eq!(pluralize(0, "life", "lives"), "lives");
        assert_eq!(pluralize(5, "error", "errors"), "errors");
    }

    #[test]
    fn lives_bar_full() {
        assert_eq!(lives_bar(STARTING_LIVES, 5), "█████");
    }

    #[test]
    fn lives_bar_empty() {
        assert_eq!(lives_bar(0, 5), "░░░░░");
    }

    #[test]
    fn lives_bar_partial() {
        assert_eq!(lives_bar(3, 5), "███░░");
    }
}
