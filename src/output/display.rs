//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkReport, WordListing};
use crate::core::Difficulty;
use colored::Colorize;

/// Print the word bank listing
pub fn print_word_listing(listing: &WordListing) {
    let scope = listing
        .audience
        .map_or_else(|| "all audiences".to_string(), |a| format!("{a} audience"));

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD BANK:".bright_cyan().bold(),
        scope.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if listing.groups.is_empty() {
        println!("\n   No words available.");
        return;
    }

    for group in &listing.groups {
        println!(
            "\n📂 {} ({})",
            group.category.bright_cyan().bold(),
            group.words.len()
        );
        for word in &group.words {
            let difficulty = match word.difficulty {
                Difficulty::Easy => word.difficulty.name().green(),
                Difficulty::Medium => word.difficulty.name().yellow(),
                Difficulty::Hard => word.difficulty.name().red(),
            };
            println!(
                "   {:<18} {:<8} {:<8} {} clues  {}",
                word.word,
                difficulty,
                word.audience.name(),
                word.clues,
                word.pronunciation.bright_black()
            );
        }
    }

    println!("\n   Total: {} words", listing.total);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Audience:          {}", report.audience);
    println!("   Rounds per player: {}", report.rounds_per_player);
    println!("   Time taken:        {:.2}s", report.duration.as_secs_f64());
    println!("   Rounds/second:     {:.1}", report.rounds_per_second);

    for player in &report.players {
        println!("\n🕵  {}", player.player.name().bright_cyan().bold());
        println!(
            "   Solved:         {}/{} {}",
            player.solved,
            player.rounds,
            format!("({:.1}%)", player.solve_rate() * 100.0).green()
        );
        println!(
            "   Average points: {}",
            format!("{:.2}", player.average_points())
                .bright_yellow()
                .bold()
        );
        println!("   Average clues:  {:.2}", player.average_clues);

        if player.solved == 0 {
            continue;
        }

        let mut distribution: Vec<(u32, usize)> = player
            .points_distribution
            .iter()
            .map(|(&points, &count)| (points, count))
            .collect();
        distribution.sort_by_key(|&(points, _)| std::cmp::Reverse(points));

        for (points, count) in distribution {
            let pct = count as f64 / player.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {points:>3} pts: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
