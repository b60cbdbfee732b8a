//! Scoring and attempt rules
//!
//! Every rule that spends attempts or awards points lives here so the round logic in
//! `game.rs` only has to sequence them.

use super::state::RoundState;
use crate::core::Difficulty;

/// Attempts available per round
pub const MAX_ATTEMPTS: u32 = 3;

/// Points per attempt left unused when the word is found
pub const ATTEMPT_BONUS: u32 = 5;

/// Base points for a hard word
pub const HARD_BASE_POINTS: u32 = 30;

/// Base points for easy and medium words
pub const BASE_POINTS: u32 = 20;

/// Points for a correct guess
///
/// `remaining_attempts` is the count before the winning guess is charged, so a
/// first-try guess has `MAX_ATTEMPTS` remaining.
///
/// # Examples
/// ```
/// use word_detective::core::Difficulty;
/// use word_detective::engine::points_for;
///
/// assert_eq!(points_for(Difficulty::Hard, 3), 45);
/// assert_eq!(points_for(Difficulty::Easy, 3), 35);
/// assert_eq!(points_for(Difficulty::Easy, 1), 25);
/// ```
#[must_use]
pub const fn points_for(difficulty: Difficulty, remaining_attempts: u32) -> u32 {
    let remaining = if remaining_attempts > MAX_ATTEMPTS {
        MAX_ATTEMPTS
    } else {
        remaining_attempts
    };

    let base = match difficulty {
        Difficulty::Hard => HARD_BASE_POINTS,
        Difficulty::Easy | Difficulty::Medium => BASE_POINTS,
    };
    // 1-indexed attempt that produced the correct guess; 0 remaining gives no bonus
    let attempts_used = MAX_ATTEMPTS + 1 - remaining;
    let bonus = (MAX_ATTEMPTS + 1 - attempts_used) * ATTEMPT_BONUS;

    base + bonus
}

/// Charge one attempt for a wrong guess
///
/// Ends the round when the last attempt is spent.
pub(crate) fn apply_wrong_guess_penalty(round: &mut RoundState) {
    round.remaining_attempts = round.remaining_attempts.saturating_sub(1);
    if round.remaining_attempts == 0 {
        round.is_active = false;
    }
}

/// Charge one attempt for skipping the current clue
///
/// With more than one attempt left, the attempt is spent and the next clue is revealed
/// if there is one. Skipping when every clue is already visible still costs the
/// attempt. With one attempt (or none) left, the skip forfeits the round.
///
/// Returns whether a next clue was revealed.
pub(crate) fn apply_skip_penalty(round: &mut RoundState) -> bool {
    if round.remaining_attempts <= 1 {
        round.remaining_attempts = 0;
        round.is_active = false;
        return false;
    }

    round.remaining_attempts -= 1;

    let has_more_clues = round.has_next_clue();
    if has_more_clues {
        round.clue_index += 1;
    }
    has_more_clues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn round_with_clues(count: usize) -> RoundState {
        let clues: Vec<String> = (1..=count).map(|i| format!("clue {i}")).collect();
        RoundState::new(WordEntry::new("cat", clues).unwrap())
    }

    #[test]
    fn points_first_try_hard() {
        assert_eq!(points_for(Difficulty::Hard, 3), 45);
    }

    #[test]
    fn points_first_try_easy_and_medium() {
        assert_eq!(points_for(Difficulty::Easy, 3), 35);
        assert_eq!(points_for(Difficulty::Medium, 3), 35);
    }

    #[test]
    fn points_decrease_with_attempts_used() {
        assert_eq!(points_for(Difficulty::Easy, 2), 30);
        assert_eq!(points_for(Difficulty::Easy, 1), 25);
        assert_eq!(points_for(Difficulty::Hard, 2), 40);
        assert_eq!(points_for(Difficulty::Hard, 1), 35);
    }

    #[test]
    fn points_clamp_out_of_range_attempts() {
        assert_eq!(points_for(Difficulty::Easy, 99), points_for(Difficulty::Easy, 3));
        assert_eq!(points_for(Difficulty::Easy, 0), 20);
    }

    #[test]
    fn points_without_attempts_left_is_base_only() {
        assert_eq!(points_for(Difficulty::Easy, 0), BASE_POINTS);
        assert_eq!(points_for(Difficulty::Hard, 0), HARD_BASE_POINTS);
    }

    #[test]
    fn wrong_guess_spends_attempt() {
        let mut round = round_with_clues(3);
        apply_wrong_guess_penalty(&mut round);
        assert_eq!(round.remaining_attempts, 2);
        assert!(round.is_active);
    }

    #[test]
    fn last_wrong_guess_ends_round() {
        let mut round = round_with_clues(3);
        for _ in 0..MAX_ATTEMPTS {
            apply_wrong_guess_penalty(&mut round);
        }
        assert_eq!(round.remaining_attempts, 0);
        assert!(!round.is_active);

        // Never goes negative
        apply_wrong_guess_penalty(&mut round);
        assert_eq!(round.remaining_attempts, 0);
    }

    #[test]
    fn skip_reveals_next_clue() {
        let mut round = round_with_clues(3);
        assert!(apply_skip_penalty(&mut round));
        assert_eq!(round.clue_index, 1);
        assert_eq!(round.remaining_attempts, 2);
        assert!(round.is_active);
    }

    #[test]
    fn skip_on_last_clue_still_costs_attempt() {
        let mut round = round_with_clues(1);
        assert!(!apply_skip_penalty(&mut round));
        assert_eq!(round.clue_index, 0);
        assert_eq!(round.remaining_attempts, 2);
        assert!(round.is_active);
    }

    #[test]
    fn skip_with_one_attempt_forfeits() {
        let mut round = round_with_clues(3);
        round.remaining_attempts = 1;

        assert!(!apply_skip_penalty(&mut round));
        assert_eq!(round.remaining_attempts, 0);
        assert!(!round.is_active);
        assert_eq!(round.clue_index, 0);
    }
}
