//! Core domain types for Word Detective
//!
//! Word entries and guess matching. Everything here is pure and free of randomness.

mod entry;
mod guess;

pub use entry::{Audience, Difficulty, EntryError, WordEntry};
pub use guess::{is_match, normalize};
