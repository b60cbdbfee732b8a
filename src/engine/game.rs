//! Word Detective game engine

use super::rules::{self, MAX_ATTEMPTS};
use super::state::{RoundState, RoundStatus};
use crate::core::{self, Audience};
use crate::wordbank::WordBank;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, warn};

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No bank entry matches the requested audience
    EmptyWordBank { audience: Audience },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordBank { audience } => {
                write!(f, "No words available for the '{audience}' audience")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Word Detective engine
///
/// Owns the word bank, the random source, the cumulative score and the current round.
/// All operations are synchronous; callers must not interleave calls from several
/// threads.
///
/// # Examples
/// ```
/// use word_detective::core::{Audience, Difficulty, WordEntry};
/// use word_detective::engine::WordGuessEngine;
/// use word_detective::wordbank::WordBank;
///
/// let cat = WordEntry::new("cat", ["I purr", "I chase mice"])
///     .unwrap()
///     .with_difficulty(Difficulty::Easy);
/// let mut engine = WordGuessEngine::with_seed(WordBank::new(vec![cat]), 42);
///
/// engine.start_new_round(Audience::General).unwrap();
/// assert_eq!(engine.current_clue(), Some("I purr"));
///
/// assert!(engine.submit_guess("a cat!"));
/// assert_eq!(engine.score(), 35);
/// ```
pub struct WordGuessEngine<R = StdRng> {
    bank: WordBank,
    rng: R,
    score: u32,
    round: Option<RoundState>,
}

impl WordGuessEngine<StdRng> {
    /// Create an engine seeded from the operating system
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    /// Create an engine whose word selection is reproducible for a given seed
    #[must_use]
    pub fn with_seed(bank: WordBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordGuessEngine<R> {
    /// Create an engine with a caller-supplied random source
    pub const fn with_rng(bank: WordBank, rng: R) -> Self {
        Self {
            bank,
            rng,
            score: 0,
            round: None,
        }
    }

    /// Start a new round with a random word for the audience
    ///
    /// Any round in progress is discarded. The score is kept.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyWordBank` if no entry matches the audience. The
    /// current round is left untouched in that case.
    pub fn start_new_round(&mut self, audience: Audience) -> Result<(), EngineError> {
        let Some(target) = self.bank.choose(audience, &mut self.rng).cloned() else {
            warn!(%audience, "no words available for audience");
            return Err(EngineError::EmptyWordBank { audience });
        };

        debug!(
            word = target.word(),
            category = target.category(),
            difficulty = %target.difficulty(),
            clues = target.clues().len(),
            "starting new round"
        );
        self.round = Some(RoundState::new(target));
        Ok(())
    }

    /// Judge a guess against the current target
    ///
    /// A wrong guess spends one attempt; spending the last one ends the round. A correct
    /// guess adds the round's points to the score and ends the round. Guesses made while
    /// no round is active are ignored and return `false`.
    pub fn submit_guess(&mut self, raw_text: &str) -> bool {
        let Some(round) = self.round.as_mut().filter(|round| round.is_active) else {
            debug!("guess ignored: no active round");
            return false;
        };

        if core::is_match(raw_text, round.target.word()) {
            let points = rules::points_for(round.target.difficulty(), round.remaining_attempts);
            self.score += points;
            round.awarded = Some(points);
            round.is_active = false;

            debug!(guess = raw_text, points, score = self.score, "correct guess");
            true
        } else {
            rules::apply_wrong_guess_penalty(round);

            debug!(
                guess = raw_text,
                remaining = round.remaining_attempts,
                "wrong guess"
            );
            false
        }
    }

    /// Reveal the next clue without spending an attempt
    ///
    /// Returns `false` and changes nothing when the last clue is already showing.
    pub fn advance_clue(&mut self) -> bool {
        match self.round.as_mut() {
            Some(round) if round.is_active && round.has_next_clue() => {
                round.clue_index += 1;
                true
            }
            _ => false,
        }
    }

    /// Skip the current clue at the cost of one attempt
    ///
    /// Skipping with one attempt left forfeits the round.
    /// Returns whether a next clue was revealed.
    pub fn skip_clue(&mut self) -> bool {
        match self.round.as_mut() {
            Some(round) if round.is_active => {
                let revealed = rules::apply_skip_penalty(round);
                debug!(
                    revealed,
                    remaining = round.remaining_attempts,
                    active = round.is_active,
                    "clue skipped"
                );
                revealed
            }
            _ => false,
        }
    }

    /// The current round, if one has been started
    #[inline]
    #[must_use]
    pub const fn state(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Cumulative score across rounds
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub fn status(&self) -> Option<RoundStatus> {
        self.round.as_ref().map(RoundState::status)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.is_active)
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&str> {
        self.round.as_ref().map(RoundState::current_clue)
    }

    /// 1-based number of the clue being shown, 0 before the first round
    #[must_use]
    pub fn clue_number(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.clue_index + 1)
    }

    #[must_use]
    pub fn total_clues(&self) -> usize {
        self.round
            .as_ref()
            .map_or(0, |round| round.target.clues().len())
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.round
            .as_ref()
            .map_or(MAX_ATTEMPTS, |round| round.remaining_attempts)
    }
}
