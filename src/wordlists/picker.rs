//! Random word selection
//!
//! Wraps a seedable RNG so the secret word can be fixed deterministically in
//! tests and via the `--seed` flag, instead of relying on live randomness.

use crate::core::SecretWord;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Uniform word picker over a candidate list
#[derive(Debug)]
pub struct WordPicker {
    rng: StdRng,
}

impl WordPicker {
    /// Create a picker seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic picker from a fixed seed
    ///
    /// The same seed over the same list always selects the same sequence of
    /// words.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a picker from an optional seed
    ///
    /// `Some(seed)` gives a deterministic picker, `None` an OS-seeded one.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Pick a secret word uniformly at random from the candidate list
    ///
    /// Returns `None` if the list is empty or the chosen entry is not a
    /// valid word.
    pub fn pick(&mut self, words: &[&str]) -> Option<SecretWord> {
        words
            .choose(&mut self.rng)
            .and_then(|w| SecretWord::new(*w).ok())
    }
}

impl Default for WordPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn seeded_picker_is_deterministic() {
        let mut picker1 = WordPicker::seeded(42);
        let mut picker2 = WordPicker::seeded(42);

        for _ in 0..10 {
            assert_eq!(picker1.pick(WORDS), picker2.pick(WORDS));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut picker1 = WordPicker::seeded(1);
        let mut picker2 = WordPicker::seeded(2);

        let seq1: Vec<_> = (0..10).map(|_| picker1.pick(WORDS).unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| picker2.pick(WORDS).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn pick_comes_from_the_list() {
        let mut picker = WordPicker::seeded(7);
        let word = picker.pick(WORDS).unwrap();
        assert!(
            WORDS
                .iter()
                .any(|w| w.to_uppercase() == word.text())
        );
    }

    #[test]
    fn pick_empty_list_is_none() {
        let mut picker = WordPicker::seeded(7);
        assert!(picker.pick(&[]).is_none());
    }

    #[test]
    fn from_seed_routes_to_seeded() {
        let mut picker1 = WordPicker::from_seed(Some(99));
        let mut picker2 = WordPicker::seeded(99);
        assert_eq!(picker1.pick(WORDS), picker2.pick(WORDS));
    }
}
