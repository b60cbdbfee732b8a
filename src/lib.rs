//! Word Detective
//!
//! A clue-based word guessing game: the player reads progressively more revealing
//! clues and tries to name the hidden word within three attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use word_detective::core::Audience;
//! use word_detective::engine::WordGuessEngine;
//! use word_detective::wordbank::WordBank;
//!
//! let mut engine = WordGuessEngine::with_seed(WordBank::builtin(), 7);
//! engine.start_new_round(Audience::Kids).unwrap();
//!
//! println!("Clue: {}", engine.current_clue().unwrap());
//! let correct = engine.submit_guess("elephant");
//! println!("Correct: {correct}, score: {}", engine.score());
//! ```

// Core domain types
pub mod core;

// Round state, scoring and the game engine
pub mod engine;

// Word banks
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
