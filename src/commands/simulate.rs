//! Bot simulation command
//!
//! Plays many full games with a random-letter bot and aggregates the
//! results. Games run in parallel; each game derives its own seed from the
//! base seed and game index, so a seeded run is reproducible regardless of
//! thread scheduling.

use crate::core::{GameSession, GameStatus, Guess};
use crate::wordlists::WordPicker;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_turns: f64,
    pub min_turns: u32,
    pub max_turns: u32,
    pub turn_distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

struct GameRecord {
    won: bool,
    turns: u32,
}

/// Run `count` bot games over the given vocabulary
///
/// With `Some(seed)` the entire run is deterministic; with `None` a fresh
/// base seed is drawn from the thread RNG.
#[must_use]
pub fn run_simulation(words: &[&str], count: usize, seed: Option<u64>) -> SimulationResult {
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..count)
        .into_par_iter()
        .filter_map(|i| {
            let game_seed = base_seed.wrapping_add((i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
            let record = play_one(words, game_seed);
            pb.inc(1);
            record
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_and_clear();

    aggregate(&records, duration)
}

/// Play a single bot game to a terminal state
///
/// The bot guesses uniformly among letters it has not tried this game, so
/// every game ends within 26 turns. Returns `None` only for an empty
/// vocabulary.
fn play_one(words: &[&str], seed: u64) -> Option<GameRecord> {
    let mut picker = WordPicker::seeded(seed);
    let secret = picker.pick(words)?;
    let mut session = GameSession::new(secret);

    // Letter choice gets its own stream, independent of word selection
    let mut rng = StdRng::seed_from_u64(seed ^ 0xA076_1D64_78BD_642F);
    let mut untried: Vec<u8> = (b'A'..=b'Z').collect();

    while session.status() == GameStatus::InProgress && !untried.is_empty() {
        let idx = rng.random_range(0..untried.len());
        let letter = untried.swap_remove(idx);
        if let Some(guess) = Guess::from_letter(letter) {
            session.apply(guess);
        }
    }

    Some(GameRecord {
        won: session.status() == GameStatus::Won,
        turns: session.turn_count(),
    })
}

fn aggregate(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();
    let total_turns: u64 = records.iter().map(|r| u64::from(r.turns)).sum();

    let mut turn_distribution: HashMap<u32, usize> = HashMap::new();
    let mut min_turns = u32::MAX;
    let mut max_turns = 0;
    for record in records {
        *turn_distribution.entry(record.turns).or_insert(0) += 1;
        min_turns = min_turns.min(record.turns);
        max_turns = max_turns.max(record.turns);
    }

    if records.is_empty() {
        min_turns = 0;
    }

    let average_turns = if total_games == 0 {
        0.0
    } else {
        total_turns as f64 / total_games as f64
    };

    SimulationResult {
        total_games,
        wins,
        losses: total_games - wins,
        average_turns,
        min_turns,
        max_turns,
        turn_distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn simulation_accounts_for_every_game() {
        let result = run_simulation(WORDS, 50, Some(42));

        assert_eq!(result.total_games, 50);
        assert_eq!(result.wins + result.losses, result.total_games);

        let distribution_sum: usize = result.turn_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);
    }

    #[test]
    fn simulation_is_deterministic_under_seed() {
        let result1 = run_simulation(WORDS, 30, Some(7));
        let result2 = run_simulation(WORDS, 30, Some(7));

        assert_eq!(result1.wins, result2.wins);
        assert_eq!(result1.turn_distribution, result2.turn_distribution);
    }

    #[test]
    fn simulation_metrics_consistency() {
        let result = run_simulation(WORDS, 20, Some(3));

        assert!(result.average_turns >= f64::from(result.min_turns));
        assert!(result.average_turns <= f64::from(result.max_turns));

        // The bot never repeats a letter, so every game fits in 26 turns
        for &turns in result.turn_distribution.keys() {
            assert!((1..=26).contains(&turns));
        }
    }

    #[test]
    fn simulation_empty_vocabulary() {
        let result = run_simulation(&[], 10, Some(1));

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.losses, 0);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn bot_game_reaches_terminal_state() {
        let record = play_one(WORDS, 123).unwrap();
        assert!(record.turns >= 1);
        assert!(record.turns <= 26);
    }
}
