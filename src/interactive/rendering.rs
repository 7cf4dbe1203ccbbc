//! TUI rendering with ratatui
//!
//! Draws the tile board, the on-screen keyboard with hint colors, and the
//! notification/result areas.

use super::app::{App, WordInfo};
use crate::core::{KEY_ROWS, LetterState};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(6), // Result / word info
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_result(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Initial => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.game.word_length();
    let mut lines: Vec<Line> = Vec::with_capacity(app.game.max_guesses() * 2);

    for i in 0..app.game.max_guesses() {
        let mut spans: Vec<Span> = Vec::with_capacity(word_length * 2);

        if let Some(row) = app.game.guesses().get(i) {
            for letter in row {
                spans.push(Span::styled(
                    format!(" {} ", letter.ch),
                    tile_style(letter.state),
                ));
                spans.push(Span::raw(" "));
            }
        } else if i == app.game.guesses().len() {
            // Active row: typed letters, then blanks. While a reveal is
            // pending the buffer still holds the submitted word.
            let buffer = app.game.buffer();
            for j in 0..word_length {
                match buffer.get(j) {
                    Some(ch) => spans.push(Span::styled(
                        format!(" {ch} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    None => spans.push(Span::styled(
                        " · ",
                        Style::default().fg(Color::DarkGray),
                    )),
                }
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..word_length {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|ch| {
                    [
                        Span::styled(format!(" {ch} "), tile_style(keyboard.state_of(ch))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let secret = app
        .game
        .secret()
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    let mut lines: Vec<Line> = match app.game.status() {
        GameStatus::Won => vec![Line::from(Span::styled(
            format!(
                "Congratulations! You guessed {secret} in {} guesses.",
                app.game.guesses().len()
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        GameStatus::Lost => vec![Line::from(Span::styled(
            format!("Game over. The word was {secret}."),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))],
        GameStatus::Playing | GameStatus::Settings => Vec::new(),
    };

    if matches!(app.game.status(), GameStatus::Won | GameStatus::Lost) {
        match &app.word_info {
            WordInfo::Idle => {}
            WordInfo::Loading(_) => {
                lines.push(Line::from("Loading word information..."));
            }
            WordInfo::Ready(entry) => {
                if let Some(phonetic) = &entry.phonetic {
                    lines.push(Line::from(format!("Phonetic: {phonetic}")));
                }
                if let Some(definition) = &entry.definition {
                    lines.push(Line::from(format!("Meaning: {definition}")));
                }
                if entry.phonetic.is_none() && entry.definition.is_none() {
                    lines.push(Line::from("No word information available."));
                }
            }
            WordInfo::Failed(message) => {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = if let Some(notification) = &app.notification {
        (notification.text.clone(), Color::Yellow)
    } else {
        match app.game.status() {
            GameStatus::Playing if app.is_revealing() => {
                ("Revealing...".to_string(), Color::Cyan)
            }
            GameStatus::Playing => (
                format!(
                    "Guess {}/{} | type letters, Enter to submit, Backspace to erase, Ctrl+C to quit",
                    app.game.guesses().len() + 1,
                    app.game.max_guesses()
                ),
                Color::DarkGray,
            ),
            GameStatus::Won | GameStatus::Lost => (
                "n: play again | q: quit".to_string(),
                Color::DarkGray,
            ),
            GameStatus::Settings => ("q: quit".to_string(), Color::DarkGray),
        }
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
