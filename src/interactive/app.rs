//! TUI application state and logic

use crate::core::{self, Audience};
use crate::engine::{RoundStatus, WordGuessEngine};
use crate::output::formatters::tries_left;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R = StdRng> {
    pub engine: WordGuessEngine<R>,
    pub audience: Audience,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_solved: usize,
    pub best_round: u32,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: WordGuessEngine<R>, audience: Audience) -> Self {
        Self {
            engine,
            audience,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome, detective! Read the clue and type your guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        match self.engine.start_new_round(self.audience) {
            Ok(()) => {
                self.stats.rounds_played += 1;
                self.input_mode = InputMode::Guessing;
                self.add_message("New word! Here's your first clue.", MessageStyle::Info);
            }
            Err(e) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let guess = guess.trim();

        if core::normalize(guess).is_empty() {
            self.add_message(
                "I didn't hear anything. Please try again!",
                MessageStyle::Error,
            );
            return;
        }

        if self.engine.submit_guess(guess) {
            self.finish_round();
        } else if self.engine.is_active() {
            let text = format!(
                "\"{guess}\" is not quite right. {}",
                tries_left(self.engine.remaining_attempts())
            );
            self.add_message(&text, MessageStyle::Error);
            // A wrong answer earns the next clue when there is one
            if self.engine.advance_clue() {
                self.add_message("Here's another clue.", MessageStyle::Info);
            }
        } else {
            self.finish_round();
        }
    }

    pub fn next_clue(&mut self) {
        if self.engine.advance_clue() {
            self.add_message("Here's another clue.", MessageStyle::Info);
        } else {
            self.add_message("That was the last clue!", MessageStyle::Error);
        }
    }

    pub fn skip_clue(&mut self) {
        let revealed = self.engine.skip_clue();
        if !self.engine.is_active() {
            self.finish_round();
        } else if revealed {
            self.add_message("Skipped! That cost a try.", MessageStyle::Info);
        } else {
            self.add_message(
                "No more clues to skip to, but it still cost a try.",
                MessageStyle::Error,
            );
        }
    }

    fn finish_round(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.input_buffer.clear();

        match self.engine.status() {
            Some(RoundStatus::Solved { points }) => {
                self.stats.rounds_solved += 1;
                self.stats.best_round = self.stats.best_round.max(points);
                self.add_message(
                    &format!("🎉 Correct! +{points} points"),
                    MessageStyle::Success,
                );
            }
            Some(RoundStatus::Exhausted) => {
                self.add_message("Game over! No tries left.", MessageStyle::Error);
            }
            Some(RoundStatus::Active) | None => {}
        }
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_round();
                }
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.skip_clue();
                }
                KeyCode::Tab => self.next_clue(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        rounds = app.stats.rounds_played,
        solved = app.stats.rounds_solved,
        score = app.engine.score(),
        "session finished"
    );
    Ok(())
}
