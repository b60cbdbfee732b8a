//! Benchmark command
//!
//! Plays many seeded rounds with scripted players to show how the scoring rules
//! reward different play styles.

use crate::core::Audience;
use crate::engine::{EngineError, RoundStatus, WordGuessEngine};
use crate::wordbank::WordBank;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Scripted play style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Answers correctly on the first clue
    Perfect,
    /// Skips one clue, then answers correctly
    LateGuesser,
    /// Guesses random bank words until the round ends
    Random,
}

impl Player {
    pub const ALL: [Self; 3] = [Self::Perfect, Self::LateGuesser, Self::Random];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::LateGuesser => "late-guesser",
            Self::Random => "random",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub audience: Audience,
    pub rounds: usize,
    pub seed: u64,
    pub players: Vec<Player>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(audience: Audience, rounds: usize) -> Self {
        Self {
            audience,
            rounds,
            seed: 0,
            players: Player::ALL.to_vec(),
            show_progress: true,
        }
    }
}

/// Outcome of a single simulated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub word: String,
    pub solved: bool,
    pub points: u32,
    pub attempts_used: u32,
    pub clues_seen: usize,
}

/// Aggregate results for one player
#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub player: Player,
    pub rounds: usize,
    pub solved: usize,
    pub total_points: u64,
    pub average_clues: f64,
    pub points_distribution: FxHashMap<u32, usize>,
}

impl PlayerReport {
    fn from_results(player: Player, results: &[RoundResult]) -> Self {
        let mut points_distribution: FxHashMap<u32, usize> = FxHashMap::default();
        for result in results.iter().filter(|r| r.solved) {
            *points_distribution.entry(result.points).or_insert(0) += 1;
        }

        let rounds = results.len();
        let average_clues = if rounds > 0 {
            results.iter().map(|r| r.clues_seen).sum::<usize>() as f64 / rounds as f64
        } else {
            0.0
        };

        Self {
            player,
            rounds,
            solved: results.iter().filter(|r| r.solved).count(),
            total_points: results.iter().map(|r| u64::from(r.points)).sum(),
            average_clues,
            points_distribution,
        }
    }

    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.solved as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn average_points(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_points as f64 / self.rounds as f64
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkReport {
    pub audience: Audience,
    pub rounds_per_player: usize,
    pub players: Vec<PlayerReport>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round to completion with a scripted player
///
/// `rng` drives the player's own choices; the engine keeps its own source for word
/// selection.
///
/// # Errors
///
/// Returns `EngineError::EmptyWordBank` if the audience has no words.
pub fn play_round<R: Rng, P: Rng>(
    engine: &mut WordGuessEngine<R>,
    audience: Audience,
    player: Player,
    rng: &mut P,
) -> Result<RoundResult, EngineError> {
    engine.start_new_round(audience)?;

    let score_before = engine.score();
    let target = engine
        .state()
        .map(|round| round.target().word().to_string())
        .unwrap_or_default();

    match player {
        Player::Perfect => {
            engine.submit_guess(&target);
        }
        Player::LateGuesser => {
            engine.skip_clue();
            engine.submit_guess(&target);
        }
        Player::Random => {
            let pool: Vec<String> = engine
                .bank()
                .filter(audience)
                .iter()
                .map(|entry| entry.word().to_string())
                .collect();

            while engine.is_active() {
                let Some(guess) = pool.choose(rng) else {
                    break;
                };
                if !engine.submit_guess(guess) && engine.is_active() {
                    engine.advance_clue();
                }
            }
        }
    }

    let round = engine.state();
    Ok(RoundResult {
        word: target,
        solved: matches!(engine.status(), Some(RoundStatus::Solved { .. })),
        points: engine.score() - score_before,
        attempts_used: round.map_or(0, |r| r.attempts_used()),
        clues_seen: round.map_or(0, |r| r.clue_index() + 1),
    })
}

/// Seed for the `index`-th round of a run
fn round_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run every configured player over `rounds` seeded rounds
///
/// Rounds are independent and run in parallel; round `i` draws the same word for every
/// player so the reports are directly comparable.
///
/// # Errors
///
/// Returns `EngineError::EmptyWordBank` if the audience has no words.
pub fn run_benchmark(
    bank: &WordBank,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, EngineError> {
    if bank.filter(config.audience).is_empty() {
        return Err(EngineError::EmptyWordBank {
            audience: config.audience,
        });
    }

    let total_rounds = (config.rounds * config.players.len()) as u64;
    let pb = if config.show_progress {
        ProgressBar::new(total_rounds)
    } else {
        ProgressBar::with_draw_target(Some(total_rounds), ProgressDrawTarget::hidden())
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut players = Vec::with_capacity(config.players.len());

    for &player in &config.players {
        pb.set_message(player.name());

        let results = (0..config.rounds)
            .into_par_iter()
            .map(|index| {
                let seed = round_seed(config.seed, index);
                let mut engine = WordGuessEngine::with_seed(bank.clone(), seed);
                let mut player_rng = StdRng::seed_from_u64(seed.rotate_left(17));
                let result = play_round(&mut engine, config.audience, player, &mut player_rng);
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>, _>>()?;

        let report = PlayerReport::from_results(player, &results);
        tracing::info!(
            player = player.name(),
            rounds = report.rounds,
            solved = report.solved,
            average_points = report.average_points(),
            "benchmark player finished"
        );
        players.push(report);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let rounds_per_second = if duration.as_secs_f64() > 0.0 {
        total_rounds as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(BenchmarkReport {
        audience: config.audience,
        rounds_per_player: config.rounds,
        players,
        duration,
        rounds_per_second,
    })
}
