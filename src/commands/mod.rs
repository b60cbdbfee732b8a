//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod words;

pub use benchmark::{BenchmarkConfig, BenchmarkReport, Player, PlayerReport, run_benchmark};
pub use simple::{SessionSummary, run_session, run_simple};
pub use words::{WordListing, list_words};
