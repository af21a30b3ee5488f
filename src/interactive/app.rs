//! TUI application state and logic

use crate::core::{Equation, KEYBOARD_ROWS};
use crate::equations::CorpusError;
use crate::game::{GameSession, GuessEvent, MAX_ATTEMPTS};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Application state
pub struct App {
    pub corpus: Vec<Equation>,
    pub rng: StdRng,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    inbox: Rc<RefCell<Vec<GuessEvent>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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
    /// Wins indexed by the number of guesses taken
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if `corpus` has no equations.
    pub fn new(corpus: Vec<Equation>, mut rng: StdRng) -> Result<Self, CorpusError> {
        let session = GameSession::new_game(&corpus, &mut rng)?;

        let mut app = Self {
            corpus,
            rng,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 7-character equation.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Each guess must be a true equation, e.g. 12+3=15".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            inbox: Rc::default(),
        };
        app.subscribe_inbox();
        Ok(app)
    }

    fn subscribe_inbox(&mut self) {
        let inbox = Rc::clone(&self.inbox);
        self.session
            .subscribe(move |event| inbox.borrow_mut().push(event.clone()));
    }

    /// Append a typed character if it belongs to the equation alphabet
    pub fn push_char(&mut self, c: char) {
        let allowed = KEYBOARD_ROWS.iter().any(|row| row.contains(c));
        if allowed && self.input_buffer.chars().count() < Equation::LEN {
            self.input_buffer.push(c);
        }
    }

    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();

        if let Err(e) = self.session.submit_guess(&input) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        let events: Vec<GuessEvent> = self.inbox.borrow_mut().drain(..).collect();
        for event in events {
            self.add_message(
                &format!(
                    "Guess {}: {} {}",
                    event.attempt,
                    event.guess,
                    event.result.to_emoji()
                ),
                MessageStyle::Info,
            );
        }

        if self.session.is_won() {
            let guess_count = self.session.history().len();
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            if guess_count <= MAX_ATTEMPTS {
                self.stats.guess_distribution[guess_count] += 1;
            }
            self.input_mode = InputMode::GameOver;

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if self.session.is_over() {
            self.stats.total_games += 1;
            self.input_mode = InputMode::GameOver;
            self.add_message(
                &format!(
                    "Out of attempts! The equation was {}",
                    self.session.target_equation()
                ),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!(
                    "{} attempts remaining",
                    self.session.remaining_attempts()
                ),
                MessageStyle::Info,
            );
        }
    }

    /// Empty the input row
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
    }

    /// A new game may be started once the current one has an accepted guess
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.session.is_over() || !self.session.history().is_empty()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                if self.can_restart() {
                    self.new_game();
                }
            }
            code if self.input_mode == InputMode::Guessing => match code {
                KeyCode::Char('c') | KeyCode::Delete => self.clear_input(),
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn new_game(&mut self) {
        if !self.session.is_over() {
            tracing::info!(
                attempts = self.session.history().len(),
                "Game abandoned"
            );
        }

        match GameSession::new_game(&self.corpus, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.inbox.borrow_mut().clear();
                self.subscribe_inbox();
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI terminated with an error");
    }

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
