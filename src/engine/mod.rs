//! Word Detective game engine
//!
//! A round picks a word, reveals its clues one by one and judges free-text guesses.
//! Three attempts per round; wrong guesses and skips each cost one.

mod game;
mod rules;
mod state;

pub use game::{EngineError, WordGuessEngine};
pub use rules::{ATTEMPT_BONUS, BASE_POINTS, HARD_BASE_POINTS, MAX_ATTEMPTS, points_for};
pub use state::{RoundState, RoundStatus};
