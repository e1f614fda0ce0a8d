//! TUI rendering with ratatui
//!
//! Read-only views over the session state: mask, used letters, lives gauge,
//! round statistics, and message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, STARTING_LIVES};
use crate::output::formatters::spaced;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN - Mystery Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced(session.mask()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("Turn:   {}", session.turn_count()))
            .alignment(Alignment::Center),
        Line::from(format!("Errors: {}", session.error_count()))
            .alignment(Alignment::Center),
    ];

    if session.status() == GameStatus::Lost {
        content.push(Line::from(""));
        content.push(
            Line::from(Span::styled(
                format!("The word was: {}", session.secret()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Mystery Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Length(3), // Used letters
            Constraint::Min(3),    // Round stats
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_used_letters(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.session.lives();

    let color = match lives {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(lives) / f64::from(STARTING_LIVES))
        .label(format!("{lives}/{STARTING_LIVES}"));

    f.render_widget(gauge, area);
}

fn render_used_letters(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app.session.wrong_guesses();

    let content = if wrong.is_empty() {
        Line::from(Span::styled(
            "none yet",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            spaced(wrong),
            Style::default().fg(Color::Red),
        ))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Used Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;

    let content = vec![
        Line::from(format!("Rounds played: {}", stats.total_games)),
        Line::from(format!("Rounds won:    {}", stats.games_won)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(m.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Guessing => "Type a letter to guess | Esc/Ctrl-C: quit",
        InputMode::RoundOver => "n: new round | q/Esc: quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}
