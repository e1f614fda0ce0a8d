//! Display functions for the classic mode and command results

use super::formatters::{lives_bar, pluralize, spaced};
use crate::commands::SimulationResult;
use crate::core::GameSession;
use colored::Colorize;

/// Print the one-time welcome banner
pub fn print_welcome() {
    println!();
    println!("{}", "WELCOME TO ## HANGMAN ##".bright_cyan().bold());
    println!("FIND OUR MYSTERY WORD BEFORE YOU RUN OUT OF LIVES");
    println!("YOU HAVE FIVE");
    println!("GOOD LUCK!");
    println!();
}

/// Print the reveal mask as spaced letters
pub fn print_mystery_word(session: &GameSession) {
    println!(
        "MYSTERY WORD:  {}",
        spaced(session.mask()).bright_yellow().bold()
    );
    println!();
}

/// Print the per-turn status block: turn number, mask, used letters, lives,
/// errors
pub fn print_turn_status(session: &GameSession) {
    println!();
    println!("{}", format!("TURN {}", session.turn_count()).bold());
    println!("======");
    println!();

    print_mystery_word(session);

    println!(
        "These letters you already used:  {}",
        spaced(session.wrong_guesses()).red()
    );
    println!();

    let lives = session.lives();
    println!(
        "You have {} {} left  [{}]",
        lives,
        pluralize(lives, "life", "lives"),
        lives_bar(lives, 10).green()
    );

    let errors = session.error_count();
    println!(
        "You have made {} {}",
        errors,
        pluralize(errors, "error", "errors")
    );
    println!();
}

/// Print the win summary: turns taken, revealed word, lives left
pub fn print_win(session: &GameSession) {
    let lives = session.lives();
    println!();
    println!("{}", "Well played!".bright_green().bold());
    println!(
        "It took you {} turns to solve the puzzle and find the mystery word: {}",
        session.turn_count(),
        session.secret().text().bright_yellow().bold()
    );
    println!(
        "You had {} {} left",
        lives,
        pluralize(lives, "life", "lives")
    );
    println!();
}

/// Print the loss summary: turns taken, the unmasked word, GAME OVER banner
pub fn print_loss(session: &GameSession) {
    println!();
    println!("Auwch. You do not have any lives left.");
    println!(
        "You had {} turns and you still were not capable of finding the mystery word ;)",
        session.turn_count()
    );
    println!(
        "The mystery word was {}",
        session.secret().text().bright_yellow().bold()
    );
    println!("{}", "***********".red());
    println!("{}", "*GAME OVER*".red().bold());
    println!("{}", "***********".red());
    println!();
}

/// Print the result of a bot simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games == 0 {
        0.0
    } else {
        result.wins as f64 / result.total_games as f64 * 100.0
    };

    println!("\n  Games played:   {}", result.total_games);
    println!(
        "  Wins:           {} ({})",
        result.wins.to_string().green().bold(),
        format!("{win_rate:.1}%").green()
    );
    println!("  Losses:         {}", result.losses.to_string().red());
    println!("  Average turns:  {:.2}", result.average_turns);
    println!(
        "  Turn range:     {}-{}",
        result.min_turns, result.max_turns
    );
    println!(
        "  Time:           {:.2}s ({:.0} games/sec)",
        result.duration.as_secs_f64(),
        result.games_per_second
    );

    if !result.turn_distribution.is_empty() {
        println!("\n  Turn distribution:");

        let max_count = result
            .turn_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(1);

        let mut turns: Vec<_> = result.turn_distribution.keys().copied().collect();
        turns.sort_unstable();

        for turn in turns {
            let count = result.turn_distribution[&turn];
            let bar_len = (count as f64 / max_count as f64 * 30.0) as usize;
            println!(
                "  {:>4}: {} {}",
                turn,
                "█".repeat(bar_len.max(1)).cyan(),
                count
            );
        }
    }

    println!();
}
