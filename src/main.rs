//! Word Detective - CLI
//!
//! Clue-based word guessing game with TUI and CLI modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_detective::{
    commands::{BenchmarkConfig, Player, list_words, run_benchmark, run_simple},
    core::Audience,
    engine::WordGuessEngine,
    output::{print_benchmark_result, print_word_listing},
    wordbank::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_detective",
    about = "Guess the hidden word from progressively revealing clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Audience: general (default) or kids
    #[arg(short, long, global = true, default_value = "general")]
    audience: String,

    /// Word bank: 'builtin' (default) or path to a JSON file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordbank: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List the words in the bank
    Words {
        /// List every audience instead of only the selected one
        #[arg(long)]
        all: bool,
    },

    /// Simulate scripted players to exercise the scoring rules
    Benchmark {
        /// Number of rounds per player
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Only run this player: perfect, late-guesser, random
        #[arg(short, long)]
        player: Option<String>,
    },
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_detective={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Load the word bank selected with -w
///
/// - "builtin": the bank compiled into the binary
/// - "<path>": a JSON array of entries
fn load_wordbank(source: &str) -> Result<WordBank> {
    match source {
        "builtin" => Ok(WordBank::builtin()),
        path => {
            let bank = load_from_file(path)?;
            tracing::info!(path, entries = bank.len(), "loaded custom word bank");
            Ok(bank)
        }
    }
}

fn parse_audience(name: &str) -> Result<Audience> {
    Audience::from_name(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown audience '{name}' (expected kids or general)"))
}

fn make_engine(bank: WordBank, seed: Option<u64>) -> WordGuessEngine {
    match seed {
        Some(seed) => WordGuessEngine::with_seed(bank, seed),
        None => WordGuessEngine::new(bank),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let audience = parse_audience(&cli.audience)?;
    let bank = load_wordbank(&cli.wordbank)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(bank, audience, cli.seed),
        Commands::Simple => run_simple_command(bank, audience, cli.seed),
        Commands::Words { all } => {
            let listing = list_words(&bank, (!all).then_some(audience));
            print_word_listing(&listing);
            Ok(())
        }
        Commands::Benchmark { count, player } => {
            run_benchmark_command(&bank, audience, count, player.as_deref(), cli.seed)
        }
    }
}

fn run_play_command(bank: WordBank, audience: Audience, seed: Option<u64>) -> Result<()> {
    use word_detective::interactive::{App, run_tui};

    let app = App::new(make_engine(bank, seed), audience);
    run_tui(app)
}

fn run_simple_command(bank: WordBank, audience: Audience, seed: Option<u64>) -> Result<()> {
    let mut engine = make_engine(bank, seed);
    let summary = run_simple(&mut engine, audience).map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "\n{} {} of {} words solved, final score {}",
        "Thanks for playing!".bold(),
        summary.rounds_solved,
        summary.rounds_played,
        summary.score.to_string().yellow().bold()
    );
    Ok(())
}

fn run_benchmark_command(
    bank: &WordBank,
    audience: Audience,
    count: usize,
    player: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = BenchmarkConfig::new(audience, count);
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(name) = player {
        let player = Player::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown player '{name}'"))?;
        config.players = vec![player];
    }

    println!("Running benchmark: {count} {audience} rounds per player...");
    let report = run_benchmark(bank, &config)?;
    print_benchmark_result(&report);
    Ok(())
}
