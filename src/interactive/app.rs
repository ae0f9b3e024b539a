//! TUI application state and event loop

use crate::core::ScoringRule;
use crate::dictionary::Dictionary;
use crate::game::{GameState, GameStatus, GuessOutcome, InputEffect, InputToken, SessionStats};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a rejection message stays on screen
pub const NOTICE_TTL: Duration = Duration::from_millis(1500);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

/// A message shown above the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
    /// `None` keeps the notice until it is replaced
    pub expires_at: Option<Instant>,
}

/// Application state
pub struct App<'a> {
    pub game: GameState<'a>,
    pub stats: SessionStats,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary is empty.
    pub fn new(dictionary: &'a Dictionary, rule: ScoringRule, mut rng: StdRng) -> Result<Self> {
        let game = GameState::start(dictionary, rule, &mut rng)?;

        Ok(Self {
            game,
            stats: SessionStats::default(),
            notice: Some(Notice {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: NoticeStyle::Info,
                expires_at: None,
            }),
            should_quit: false,
            rng,
        })
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let token = match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('n') if ctrl => return self.new_game(),
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Enter if self.game.is_over() => return self.new_game(),
            KeyCode::Enter => InputToken::Enter,
            KeyCode::Backspace => InputToken::Backspace,
            KeyCode::Char(c) if !ctrl => InputToken::Letter(c),
            _ => return Ok(()),
        };

        match self.game.apply(token) {
            InputEffect::Submitted(outcome) => self.on_submitted(outcome),
            InputEffect::Rejected(err) => self.flash(err.to_string(), NoticeStyle::Error, now),
            InputEffect::Edited | InputEffect::Ignored => {}
        }
        Ok(())
    }

    fn on_submitted(&mut self, outcome: GuessOutcome) {
        match outcome.status {
            GameStatus::Won => {
                self.stats.record(&self.game);
                let text = match self.game.attempts_used() {
                    1 => "🎯 Genius! Press Enter for a new game",
                    2 => "🔥 Magnificent! Press Enter for a new game",
                    3 => "✨ Impressive! Press Enter for a new game",
                    4 => "👏 Splendid! Press Enter for a new game",
                    5 => "🎉 Great! Press Enter for a new game",
                    _ => "😅 Phew! Press Enter for a new game",
                };
                self.pin(text.to_string(), NoticeStyle::Success);
            }
            GameStatus::Lost => {
                self.stats.record(&self.game);
                let text = format!(
                    "The word was: {}. Press Enter for a new game",
                    self.game.solution().text().to_uppercase()
                );
                self.pin(text, NoticeStyle::Error);
            }
            GameStatus::InProgress => self.notice = None,
        }
    }

    /// Abandon the current game and draw a new solution
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary is empty.
    pub fn new_game(&mut self) -> Result<()> {
        self.game = self.game.reset(&mut self.rng)?;
        self.pin("New game started!".to_string(), NoticeStyle::Info);
        Ok(())
    }

    /// Drop the notice once it has expired
    pub fn tick(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .and_then(|notice| notice.expires_at)
            .is_some_and(|expires_at| now >= expires_at)
        {
            self.notice = None;
        }
    }

    fn flash(&mut self, text: String, style: NoticeStyle, now: Instant) {
        self.notice = Some(Notice {
            text,
            style,
            expires_at: Some(now + NOTICE_TTL),
        });
    }

    fn pin(&mut self, text: String, style: NoticeStyle) {
        self.notice = Some(Notice {
            text,
            style,
            expires_at: None,
        });
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now())?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
