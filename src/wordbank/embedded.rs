//! Embedded word bank
//!
//! Entries compiled into the binary at build time from `data/words.tsv`.

use crate::core::{Audience, Difficulty, EntryError, WordEntry};

/// A word bank row as generated by the build script
#[derive(Debug, Clone, Copy)]
pub struct RawEntry {
    pub word: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub audience: &'static str,
    pub pronunciation: &'static str,
    pub fun_fact: Option<&'static str>,
    pub clues: &'static [&'static str],
}

impl RawEntry {
    /// Convert the generated row into a validated `WordEntry`
    ///
    /// # Errors
    ///
    /// Returns `EntryError` if the difficulty or audience name is unknown, or the row
    /// fails `WordEntry` validation.
    pub fn to_entry(&self) -> Result<WordEntry, EntryError> {
        let difficulty = Difficulty::from_name(self.difficulty)
            .ok_or_else(|| EntryError::UnknownDifficulty(self.difficulty.to_string()))?;
        let audience = Audience::from_name(self.audience)
            .ok_or_else(|| EntryError::UnknownAudience(self.audience.to_string()))?;

        Ok(WordEntry::new(self.word, self.clues.iter().copied())?
            .with_category(self.category)
            .with_difficulty(difficulty)
            .with_audience(audience)
            .with_pronunciation(self.pronunciation)
            .with_fun_fact(self.fun_fact.map(str::to_string)))
    }
}

// Include generated entries from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
