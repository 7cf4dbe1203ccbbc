//! TUI application state and event loop
//!
//! Wraps a [`GameSession`] with the presentation concerns the engine leaves
//! to front-ends: reveal timing, transient notifications, and the
//! best-effort dictionary lookup after a round ends.

use crate::dictionary::{LookupError, TsvDictionary, WordEntry, lookup_in_background};
use crate::game::{GameSession, GameStatus, Rejection};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// How long a transient notification stays on screen
const NOTIFICATION_TTL: Duration = Duration::from_secs(2);

/// A transient on-screen message
pub struct Notification {
    pub text: String,
    expires: Instant,
}

/// Progress of the post-game dictionary lookup
pub enum WordInfo {
    Idle,
    Loading(Receiver<Result<WordEntry, LookupError>>),
    Ready(WordEntry),
    Failed(String),
}

/// Application state
pub struct App {
    pub game: GameSession,
    pub notification: Option<Notification>,
    pub word_info: WordInfo,
    pub should_quit: bool,
    dictionary: Option<Arc<TsvDictionary>>,
    reveal_deadline: Option<Instant>,
}

impl App {
    /// Wrap an already-started session
    #[must_use]
    pub fn new(game: GameSession, dictionary: Option<Arc<TsvDictionary>>) -> Self {
        Self {
            game,
            notification: None,
            word_info: WordInfo::Idle,
            should_quit: false,
            dictionary,
            reveal_deadline: None,
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification {
            text: text.into(),
            expires: Instant::now() + NOTIFICATION_TTL,
        });
    }

    /// Whether the reveal animation window is still open
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.game.is_revealing()
    }

    /// Advance time-driven state: expire notifications, release the reveal
    /// lock once its window has elapsed, and poll the lookup channel
    pub fn tick(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| Instant::now() >= n.expires)
        {
            self.notification = None;
        }

        if let Some(deadline) = self.reveal_deadline {
            if Instant::now() >= deadline {
                self.reveal_deadline = None;
                if let Some(outcome) = self.game.finish_reveal() {
                    match outcome.status {
                        GameStatus::Won => {
                            self.notify("You guessed it!");
                            self.begin_lookup();
                        }
                        GameStatus::Lost => {
                            self.notify("Out of guesses!");
                            self.begin_lookup();
                        }
                        GameStatus::Playing | GameStatus::Settings => {}
                    }
                }
            }
        }

        self.poll_lookup();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only key presses; release events double up on Windows terminals.
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
        {
            self.should_quit = true;
            return;
        }

        match self.game.status() {
            GameStatus::Playing => self.handle_playing_key(key.code),
            GameStatus::Won | GameStatus::Lost => self.handle_finished_key(key.code),
            GameStatus::Settings => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => match self.game.submit_guess() {
                Ok(()) => {
                    self.reveal_deadline = Some(Instant::now() + self.game.reveal_duration());
                }
                Err(rejection @ Rejection::WrongLength { .. }) => {
                    self.notify(rejection.to_string());
                }
                // Reveal in progress or no round; the board already shows it.
                Err(_) => {}
            },
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Char(ch) => self.game.append_char(ch),
            _ => {}
        }
    }

    fn handle_finished_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => match self.game.play_again() {
                Ok(()) => {
                    self.word_info = WordInfo::Idle;
                    self.notification = None;
                }
                Err(rejection) => self.notify(rejection.to_string()),
            },
            _ => {}
        }
    }

    fn begin_lookup(&mut self) {
        let Some(dictionary) = self.dictionary.clone() else {
            return;
        };
        let Some(secret) = self.game.secret() else {
            return;
        };
        let rx = lookup_in_background(dictionary, secret.text().to_string());
        self.word_info = WordInfo::Loading(rx);
    }

    fn poll_lookup(&mut self) {
        if let WordInfo::Loading(rx) = &self.word_info {
            match rx.try_recv() {
                Ok(Ok(entry)) => self.word_info = WordInfo::Ready(entry),
                Ok(Err(err)) => self.word_info = WordInfo::Failed(err.to_string()),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.word_info = WordInfo::Failed("lookup was abandoned".to_string());
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Short poll so reveal deadlines and lookups stay responsive even
        // without input.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
