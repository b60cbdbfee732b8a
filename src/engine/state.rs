//! Per-round game state

use super::rules::MAX_ATTEMPTS;
use crate::core::WordEntry;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Accepting guesses and skips
    Active,
    /// Guessed correctly; holds the points awarded
    Solved { points: u32 },
    /// Ran out of attempts without finding the word
    Exhausted,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// State of the round currently being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) target: WordEntry,
    pub(crate) clue_index: usize,
    pub(crate) remaining_attempts: u32,
    pub(crate) is_active: bool,
    pub(crate) awarded: Option<u32>,
}

impl RoundState {
    pub(crate) const fn new(target: WordEntry) -> Self {
        Self {
            target,
            clue_index: 0,
            remaining_attempts: MAX_ATTEMPTS,
            is_active: true,
            awarded: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &WordEntry {
        &self.target
    }

    /// Index of the most advanced clue shown
    #[inline]
    #[must_use]
    pub const fn clue_index(&self) -> usize {
        self.clue_index
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Attempts spent so far this round
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        MAX_ATTEMPTS - self.remaining_attempts
    }

    /// The clue at `clue_index`
    #[must_use]
    pub fn current_clue(&self) -> &str {
        // clues is never empty and clue_index stays in bounds
        &self.target.clues()[self.clue_index]
    }

    /// Clues revealed so far, oldest first
    #[must_use]
    pub fn revealed_clues(&self) -> &[String] {
        &self.target.clues()[..=self.clue_index]
    }

    #[must_use]
    pub fn has_next_clue(&self) -> bool {
        self.clue_index + 1 < self.target.clues().len()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        match (self.is_active, self.awarded) {
            (true, _) => RoundStatus::Active,
            (false, Some(points)) => RoundStatus::Solved { points },
            (false, None) => RoundStatus::Exhausted,
        }
    }
}
