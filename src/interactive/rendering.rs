//! TUI rendering with ratatui
//!
//! Clue card, attempts, word details and message log for Word Detective.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::{RoundState, RoundStatus};
use crate::output::formatters::{clue_progress, hearts, tries_left};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Clue card
            Constraint::Percentage(40), // Attempts and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🔍 WORD DETECTIVE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("⭐ Score: {}", app.engine.score()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_main_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    match app.engine.state() {
        Some(round) if app.input_mode == InputMode::RoundOver => {
            render_word_details(f, round, area);
        }
        Some(round) => render_clue_card(f, round, area),
        None => {
            let paragraph = Paragraph::new("No word yet. Press Ctrl-N for a new word.").block(
                Block::default()
                    .title(" Clue ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(paragraph, area);
        }
    }
}

fn render_clue_card(f: &mut Frame, round: &RoundState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Current clue
            Constraint::Percentage(50), // Earlier clues
        ])
        .split(area);

    let total = round.target().clues().len();
    let content = vec![
        Line::from(Span::styled(
            format!("{}:", clue_progress(round.clue_index() + 1, total)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", round.current_clue()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC | Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Category: {}", round.target().category()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Clue ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    let earlier: Vec<ListItem> = round
        .revealed_clues()
        .iter()
        .enumerate()
        .rev()
        .skip(1)
        .map(|(i, clue)| ListItem::new(format!("{}: {clue}", i + 1)))
        .collect();

    let history = List::new(earlier).block(
        Block::default()
            .title(" Earlier Clues ")
            .borders(Borders::ALL),
    );
    f.render_widget(history, chunks[1]);
}

fn render_word_details(f: &mut Frame, round: &RoundState, area: Rect) {
    let (title, headline, color) = match round.status() {
        RoundStatus::Solved { points } => (
            " 🎉 Congratulations! 🎉 ",
            format!("You got it right! +{points} points"),
            Color::Green,
        ),
        RoundStatus::Exhausted | RoundStatus::Active => {
            (" Game Over ", "Out of tries this time.".to_string(), Color::Red)
        }
    };

    let target = round.target();
    let mut content = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                target.word().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Word Details:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if !target.pronunciation().is_empty() {
        content.push(Line::from(format!(
            "  🗣  Pronunciation: {}",
            target.pronunciation()
        )));
    }
    if let Some(fact) = target.fun_fact() {
        content.push(Line::from(format!("  💡 Fun Fact: {fact}")));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Attempts
            Constraint::Length(3), // Clue progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_clue_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let remaining = app.engine.remaining_attempts();
    let max = app.engine.max_attempts();
    let used = max - remaining.min(max);

    let content = vec![
        Line::from(Span::styled(
            hearts(remaining, max),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(tries_left(remaining)),
        Line::from(if used == 0 {
            String::new()
        } else {
            format!("{used} of {max} used")
        }),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Attempts ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_clue_gauge<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let total = app.engine.total_clues();
    let shown = app.engine.clue_number();
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(shown * 100 / total).map_or(100, |p| p.min(100))
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Clues Revealed ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{shown}/{total}"));
    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Press 'n' for a new word or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your Guess | Enter: submit  Tab: next clue  Ctrl-S: skip ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Audience: {}", app.audience)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Words: {}/{} solved | Best: {}",
        app.stats.rounds_solved, app.stats.rounds_played, app.stats.best_round
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Word")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Audience, WordEntry};
    use crate::engine::WordGuessEngine;
    use crate::wordbank::WordBank;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let entry = WordEntry::new("umbrella", ["I keep you dry", "I open up"])
            .unwrap()
            .with_audience(Audience::Kids)
            .with_pronunciation("um-BREL-uh")
            .with_fun_fact(Some("Very old invention".to_string()));
        let engine = WordGuessEngine::with_seed(WordBank::new(vec![entry]), 9);
        let mut app = App::new(engine, Audience::Kids);
        app.new_round();
        app
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_clue_and_score() {
        let text = screen_text(&app());
        assert!(text.contains("WORD DETECTIVE"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Clue 1 of 2"));
        assert!(text.contains("I keep you dry"));
    }

    #[test]
    fn renders_word_details_after_round() {
        let mut app = app();
        app.input_buffer = "umbrella".to_string();
        app.submit_guess();

        let text = screen_text(&app);
        assert!(text.contains("UMBRELLA"));
        assert!(text.contains("um-BREL-uh"));
        assert!(text.contains("Score: 35"));
    }
}
