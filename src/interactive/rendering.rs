//! TUI rendering with ratatui
//!
//! Board of letter tiles, on-screen keyboard and status line.

use super::app::{App, NoticeStyle};
use crate::core::{LetterResult, WORD_LENGTH};
use crate::game::{BoardSnapshot, KeyState, Row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(3),  // Notice
            Constraint::Length(5),  // Keyboard
            Constraint::Min(1),     // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_notice(f, app, chunks[2]);
    render_keyboard(f, &snapshot, chunks[3]);
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
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

/// Style of a scored tile
#[must_use]
pub fn tile_style(result: LetterResult) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match result {
        LetterResult::Correct => style.fg(Color::Black).bg(Color::Green),
        LetterResult::Present => style.fg(Color::Black).bg(Color::Yellow),
        LetterResult::Absent => style.fg(Color::White).bg(Color::DarkGray),
    }
}

fn board_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for i in 0..WORD_LENGTH {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match row {
            Row::Scored(guess) => {
                let letter = char::from(guess.word.char_at(i)).to_ascii_uppercase();
                let result = guess.feedback.get(i).unwrap_or(LetterResult::Absent);
                Span::styled(format!(" {letter} "), tile_style(result))
            }
            Row::Pending(buffer) => match buffer.chars().nth(i) {
                Some(letter) => Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            },
            Row::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, snapshot: &BoardSnapshot, area: Rect) {
    let mut lines = Vec::with_capacity(snapshot.rows.len() * 2);
    for row in &snapshot.rows {
        lines.push(board_line(row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{} ", snapshot.attempts_used, snapshot.rows.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.notice {
        Some(notice) => {
            let color = match notice.style {
                NoticeStyle::Info => Color::White,
                NoticeStyle::Success => Color::Green,
                NoticeStyle::Error => Color::Red,
            };
            (
                notice.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (String::new(), Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Style of a keyboard key
#[must_use]
pub fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Unused => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        KeyState::Used => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        KeyState::Excluded => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

fn render_keyboard(f: &mut Frame, snapshot: &BoardSnapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    Span::styled(
                        format!(" {key} "),
                        key_style(snapshot.key_state(key)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Played: {} | Win: {:.0}% | Streak: {} | Rule: {}",
        app.stats.played,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.game.rule()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.game.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
