//! Hangman - CLI
//!
//! Classic prompt-driven mode, a ratatui TUI mode, and a parallel bot
//! simulation for vocabulary statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_classic, run_simulation},
    core::GameSession,
    output::print_simulation_result,
    wordlists::{WORDS, WordPicker},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the mystery word one letter at a time before your five lives run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for deterministic word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classic prompt-driven mode (default)
    Classic,

    /// Interactive TUI mode
    Play,

    /// Run bot games and report win/loss statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the classic mode if no command given
    let command = cli.command.unwrap_or(Commands::Classic);

    match command {
        Commands::Classic => run_classic_command(cli.seed),
        Commands::Play => run_play_command(cli.seed),
        Commands::Simulate { count } => {
            let result = run_simulation(WORDS, count, cli.seed);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_classic_command(seed: Option<u64>) -> Result<()> {
    let mut picker = WordPicker::from_seed(seed);
    let secret = picker.pick(WORDS).context("vocabulary is empty")?;
    let mut session = GameSession::new(secret);
    run_classic(&mut session)
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(seed)?;
    run_tui(app)
}
