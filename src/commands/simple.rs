//! Simple interactive CLI mode
//!
//! Line-based Word Detective without the TUI. Anything that isn't a `/command` is
//! treated as a guess.

use crate::core::{self, Audience};
use crate::engine::{RoundState, RoundStatus, WordGuessEngine};
use crate::output::formatters::{clue_progress, hearts, tries_left};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Totals for one interactive session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_solved: usize,
    pub score: u32,
}

/// A parsed line of player input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Next,
    Skip,
    New,
    Unknown(&'a str),
    Blank,
    Guess(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/q" | "/exit" => Input::Quit,
        "/help" | "/h" | "/?" => Input::Help,
        "/next" | "/n" => Input::Next,
        "/skip" | "/s" => Input::Skip,
        "/new" => Input::New,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        guess if core::normalize(guess).is_empty() => Input::Blank,
        guess => Input::Guess(guess),
    }
}

/// Run the simple interactive CLI on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word bank has no words for the audience or if reading
/// input fails.
pub fn run_simple<R: Rng>(
    engine: &mut WordGuessEngine<R>,
    audience: Audience,
) -> Result<SessionSummary, String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, audience, stdin.lock(), stdout.lock())
}

/// Run an interactive session over arbitrary input and output
///
/// The session ends at `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if the word bank has no words for the audience or on I/O failure.
pub fn run_session<R: Rng, I: BufRead, O: Write>(
    engine: &mut WordGuessEngine<R>,
    audience: Audience,
    input: I,
    mut out: O,
) -> Result<SessionSummary, String> {
    let io_err = |e: io::Error| format!("I/O error: {e}");

    print_banner(&mut out, audience).map_err(io_err)?;

    engine.start_new_round(audience).map_err(|e| e.to_string())?;
    let mut summary = SessionSummary {
        rounds_played: 1,
        ..SessionSummary::default()
    };
    print_clue(&mut out, engine).map_err(io_err)?;

    for line in input.lines() {
        let line = line.map_err(io_err)?;

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => print_help(&mut out).map_err(io_err)?,
            Input::Unknown(cmd) => {
                writeln!(out, "Unknown command '{cmd}'. Type /help for commands.")
                    .map_err(io_err)?;
            }
            Input::New => {
                engine.start_new_round(audience).map_err(|e| e.to_string())?;
                summary.rounds_played += 1;
                writeln!(out, "\n🔍 New word! Listen carefully...").map_err(io_err)?;
                print_clue(&mut out, engine).map_err(io_err)?;
            }
            _ if !engine.is_active() => {
                writeln!(out, "This round is over. Type /new for another word or /quit to exit.")
                    .map_err(io_err)?;
            }
            Input::Next => {
                if engine.advance_clue() {
                    print_clue(&mut out, engine).map_err(io_err)?;
                } else {
                    writeln!(out, "That was the last clue. Take your best guess!")
                        .map_err(io_err)?;
                }
            }
            Input::Skip => {
                let revealed = engine.skip_clue();
                if !engine.is_active() {
                    print_round_over(&mut out, engine).map_err(io_err)?;
                } else if revealed {
                    print_clue(&mut out, engine).map_err(io_err)?;
                } else {
                    writeln!(
                        out,
                        "No more clues to skip to, and that cost a try. {}",
                        tries_left(engine.remaining_attempts())
                    )
                    .map_err(io_err)?;
                }
            }
            Input::Blank => {
                writeln!(out, "I didn't hear anything. Please try again!").map_err(io_err)?;
            }
            Input::Guess(guess) => {
                if engine.submit_guess(guess) {
                    summary.rounds_solved += 1;
                    print_round_over(&mut out, engine).map_err(io_err)?;
                } else if engine.is_active() {
                    writeln!(out, "{}", "Not quite right. Try again!".yellow()).map_err(io_err)?;
                    // A wrong answer earns the next clue when there is one
                    if engine.advance_clue() {
                        print_clue(&mut out, engine).map_err(io_err)?;
                    } else {
                        print_attempts(&mut out, engine).map_err(io_err)?;
                    }
                } else {
                    print_round_over(&mut out, engine).map_err(io_err)?;
                }
            }
        }

        out.flush().map_err(io_err)?;
    }

    summary.score = engine.score();
    writeln!(
        out,
        "\n👋 Thanks for playing! Solved {}/{} words, final score {}.",
        summary.rounds_solved, summary.rounds_played, summary.score
    )
    .map_err(io_err)?;

    Ok(summary)
}

fn print_banner<O: Write>(out: &mut O, audience: Audience) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 🔍 Word Detective - Simple Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Audience: {audience}")?;
    writeln!(out, "Read the clue and type the word you think it describes.")?;
    writeln!(out, "Commands: /next, /skip, /new, /help, /quit\n")
}

fn print_help<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "  <word>  guess the word")?;
    writeln!(out, "  /next   show the next clue (free)")?;
    writeln!(out, "  /skip   skip this clue (costs a try)")?;
    writeln!(out, "  /new    start a new word")?;
    writeln!(out, "  /quit   exit")
}

fn print_clue<R: Rng, O: Write>(out: &mut O, engine: &WordGuessEngine<R>) -> io::Result<()> {
    let Some(clue) = engine.current_clue() else {
        return Ok(());
    };

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} | Score: {}",
        clue_progress(engine.clue_number(), engine.total_clues()).bright_cyan(),
        engine.score()
    )?;
    writeln!(out, "  \"{}\"", clue.italic())?;
    print_attempts(out, engine)
}

fn print_attempts<R: Rng, O: Write>(out: &mut O, engine: &WordGuessEngine<R>) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        hearts(engine.remaining_attempts(), engine.max_attempts()).red(),
        tries_left(engine.remaining_attempts())
    )
}

fn print_round_over<R: Rng, O: Write>(
    out: &mut O,
    engine: &WordGuessEngine<R>,
) -> io::Result<()> {
    let Some(round) = engine.state() else {
        return Ok(());
    };

    match round.status() {
        RoundStatus::Solved { points } => {
            writeln!(out, "\n{}", "🎉 Congratulations! You got it right!".green().bold())?;
            writeln!(
                out,
                "The word was: {}  (+{points} points, score {})",
                round.target().word().bright_yellow().bold(),
                engine.score()
            )?;
        }
        RoundStatus::Exhausted => {
            writeln!(out, "\n{}", "Game Over".red().bold())?;
            writeln!(
                out,
                "The word was: {}",
                round.target().word().bright_yellow().bold()
            )?;
        }
        RoundStatus::Active => return Ok(()),
    }

    print_word_details(out, round)?;
    writeln!(out, "\nType /new for another word or /quit to exit.")
}

fn print_word_details<O: Write>(out: &mut O, round: &RoundState) -> io::Result<()> {
    let target = round.target();
    if !target.pronunciation().is_empty() {
        writeln!(out, "  🗣  Pronunciation: {}", target.pronunciation())?;
    }
    if let Some(fact) = target.fun_fact() {
        writeln!(out, "  💡 Fun Fact: {fact}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, WordEntry};
    use crate::wordbank::WordBank;
    use std::io::Cursor;

    fn engine() -> WordGuessEngine {
        let entry = WordEntry::new("penguin", ["I can't fly", "I love fish", "I wear a suit"])
            .unwrap()
            .with_difficulty(Difficulty::Medium)
            .with_audience(Audience::Kids)
            .with_pronunciation("PENG-gwin")
            .with_fun_fact(Some("I swim fast!".to_string()));
        WordGuessEngine::with_seed(WordBank::new(vec![entry]), 7)
    }

    fn play(script: &str) -> (SessionSummary, String) {
        let mut engine = engine();
        let mut out = Vec::new();
        let summary =
            run_session(&mut engine, Audience::Kids, Cursor::new(script), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input(" /next "), Input::Next);
        assert_eq!(parse_input("/s"), Input::Skip);
        assert_eq!(parse_input("/new"), Input::New);
        assert_eq!(parse_input("/dance"), Input::Unknown("/dance"));
        assert_eq!(parse_input("  a penguin "), Input::Guess("a penguin"));
        assert_eq!(parse_input(""), Input::Blank);
        assert_eq!(parse_input(" ?! "), Input::Blank);
    }

    #[test]
    fn correct_first_guess() {
        let (summary, output) = play("penguin\n/quit\n");
        assert_eq!(
            summary,
            SessionSummary {
                rounds_played: 1,
                rounds_solved: 1,
                score: 35,
            }
        );
        assert!(output.contains("Congratulations"));
        assert!(output.contains("PENG-gwin"));
        assert!(output.contains("I swim fast!"));
    }

    #[test]
    fn wrong_guess_reveals_next_clue() {
        let (summary, output) = play("walrus\n");
        assert_eq!(summary.rounds_solved, 0);
        assert!(output.contains("Not quite right"));
        assert!(output.contains("Clue 2 of 3"));
        assert!(output.contains("I love fish"));
    }

    #[test]
    fn three_wrong_guesses_end_round() {
        let (summary, output) = play("walrus\nseal\norca\npenguin\n");
        assert_eq!(summary.score, 0);
        assert!(output.contains("Game Over"));
        assert!(output.contains("This round is over"));
    }

    #[test]
    fn empty_guess_costs_nothing() {
        let (summary, output) = play("\n\n\n\npenguin\n");
        assert!(output.contains("I didn't hear anything"));
        assert_eq!(summary.score, 35);
    }

    #[test]
    fn punctuation_only_guess_costs_nothing() {
        let (summary, output) = play("?!\n.\npenguin\n");
        assert!(output.contains("I didn't hear anything"));
        assert!(!output.contains("Not quite right"));
        assert_eq!(summary.score, 35);
    }

    #[test]
    fn skip_then_guess_scores_less() {
        let (summary, output) = play("/skip\npenguin\n");
        assert!(output.contains("Clue 2 of 3"));
        assert_eq!(summary.score, 30);
    }

    #[test]
    fn next_clue_is_free() {
        let (summary, output) = play("/next\n/next\n/next\npenguin\n");
        assert!(output.contains("That was the last clue"));
        assert_eq!(summary.score, 35);
    }

    #[test]
    fn new_round_keeps_score() {
        let (summary, _) = play("penguin\n/new\npenguin\n");
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.rounds_solved, 2);
        assert_eq!(summary.score, 70);
    }

    #[test]
    fn empty_audience_is_an_error() {
        let mut engine = engine();
        let result = run_session(&mut engine, Audience::General, Cursor::new(""), Vec::<u8>::new());
        assert!(result.is_err());
    }
}
