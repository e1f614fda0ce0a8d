//! TUI application state and logic

use crate::core::{GameSession, GameStatus, Guess, GuessOutcome};
use crate::wordlists::{WORDS, WordPicker};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    picker: WordPicker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letter keys are guesses
    Guessing,
    /// The round ended; waiting for new-game or quit
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    /// Create the app and start the first round
    ///
    /// # Errors
    /// Returns an error if no secret word can be drawn from the vocabulary.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let mut picker = WordPicker::from_seed(seed);
        let session = draw_session(&mut picker)?;

        Ok(Self {
            session,
            messages: vec![Message {
                text: "Welcome! Type a letter to guess the mystery word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            picker,
        })
    }

    /// Handle a letter key as a guess
    pub fn handle_guess(&mut self, c: char) {
        let guess = c
            .is_ascii_alphabetic()
            .then(|| Guess::from_letter(c.to_ascii_uppercase() as u8))
            .flatten();
        let Some(guess) = guess else {
            self.add_message(
                &format!("'{c}' is not a letter from the alphabet"),
                MessageStyle::Error,
            );
            return;
        };

        match self.session.apply(guess) {
            GuessOutcome::Hit {
                letter,
                newly_revealed,
            } => {
                let letter = letter as char;
                if newly_revealed == 0 {
                    self.add_message(
                        &format!("'{letter}' was already revealed"),
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(
                        &format!("'{letter}' appears {newly_revealed} more time(s)!"),
                        MessageStyle::Success,
                    );
                }
            }
            GuessOutcome::Miss { letter, repeated } => {
                let letter = letter as char;
                if repeated {
                    self.add_message(
                        &format!("'{letter}' again - another life lost"),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("'{letter}' is not in the word"),
                        MessageStyle::Error,
                    );
                }
            }
        }

        self.check_round_end();
    }

    /// Start a new round with a freshly drawn word
    ///
    /// # Errors
    /// Returns an error if no secret word can be drawn from the vocabulary.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = draw_session(&mut self.picker)?;
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New round! Type a letter to guess.", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn check_round_end(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!(
                        "Well played! Solved in {} turns.",
                        self.session.turn_count()
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("Out of lives! The word was {}.", self.session.secret()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }
}

fn draw_session(picker: &mut WordPicker) -> Result<GameSession> {
    let secret = picker.pick(WORDS).context("vocabulary is empty")?;
    Ok(GameSession::new(secret))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    // Every letter key is a guess here, including 'q' and 'n'
                    KeyCode::Char(c) => {
                        app.handle_guess(c);
                    }
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game()?;
                    }
                    _ => {
                        // Ignore other keys between rounds
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
