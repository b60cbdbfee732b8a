//! Word bank loading utilities
//!
//! Custom word banks are JSON arrays of entries:
//!
//! ```json
//! [
//!   {
//!     "word": "volcano",
//!     "category": "nature",
//!     "difficulty": "medium",
//!     "audience": "kids",
//!     "clues": ["I am a mountain", "I can erupt"],
//!     "pronunciation": "vol-KAY-noh",
//!     "fun_fact": "Some volcanoes are under the sea!"
//!   }
//! ]
//! ```

use super::WordBank;
use crate::core::{Audience, Difficulty, EntryError, WordEntry};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// One entry as it appears in a word bank file
#[derive(Debug, Deserialize)]
struct EntryRecord {
    word: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_difficulty")]
    difficulty: Difficulty,
    #[serde(default = "default_audience")]
    audience: Audience,
    clues: Vec<String>,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    fun_fact: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

const fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

const fn default_audience() -> Audience {
    Audience::General
}

impl EntryRecord {
    fn into_entry(self) -> Result<WordEntry, EntryError> {
        Ok(WordEntry::new(self.word, self.clues)?
            .with_category(self.category)
            .with_difficulty(self.difficulty)
            .with_audience(self.audience)
            .with_pronunciation(self.pronunciation)
            .with_fun_fact(self.fun_fact))
    }
}

/// Error type for word bank loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidEntry { index: usize, source: EntryError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word bank: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse word bank: {e}"),
            Self::InvalidEntry { index, source } => {
                write!(f, "Invalid word bank entry #{index}: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidEntry { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Load a word bank from a JSON file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, is not valid JSON, or contains an
/// entry without a word or clues.
///
/// # Examples
/// ```no_run
/// use word_detective::wordbank::loader::load_from_file;
///
/// let bank = load_from_file("my_words.json").unwrap();
/// println!("Loaded {} entries", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parse a word bank from a JSON string
///
/// # Errors
///
/// Returns `LoadError::Parse` for malformed JSON and `LoadError::InvalidEntry` for the
/// first entry that fails validation.
pub fn parse_str(json: &str) -> Result<WordBank, LoadError> {
    let records: Vec<EntryRecord> = serde_json::from_str(json)?;

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_entry()
                .map_err(|source| LoadError::InvalidEntry { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(entries = entries.len(), "parsed word bank");
    Ok(WordBank::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_entry() {
        let json = r#"[
            {
                "word": "volcano",
                "category": "nature",
                "difficulty": "hard",
                "audience": "kids",
                "clues": ["I am a mountain", "I can erupt"],
                "pronunciation": "vol-KAY-noh",
                "fun_fact": "Some volcanoes are under the sea!"
            }
        ]"#;

        let bank = parse_str(json).unwrap();
        assert_eq!(bank.len(), 1);

        let entry = &bank.entries()[0];
        assert_eq!(entry.word(), "volcano");
        assert_eq!(entry.category(), "nature");
        assert_eq!(entry.difficulty(), Difficulty::Hard);
        assert_eq!(entry.audience(), Audience::Kids);
        assert_eq!(entry.clues().len(), 2);
        assert_eq!(entry.pronunciation(), "vol-KAY-noh");
        assert_eq!(entry.fun_fact(), Some("Some volcanoes are under the sea!"));
    }

    #[test]
    fn parse_applies_defaults() {
        let bank = parse_str(r#"[{"word": "cat", "clues": ["meow"]}]"#).unwrap();
        let entry = &bank.entries()[0];

        assert_eq!(entry.category(), "general");
        assert_eq!(entry.difficulty(), Difficulty::Medium);
        assert_eq!(entry.audience(), Audience::General);
        assert_eq!(entry.pronunciation(), "");
        assert_eq!(entry.fun_fact(), None);
    }

    #[test]
    fn parse_empty_array() {
        let bank = parse_str("[]").unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn parse_rejects_entry_without_clues() {
        let json = r#"[
            {"word": "cat", "clues": ["meow"]},
            {"word": "dog", "clues": []}
        ]"#;

        let err = parse_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidEntry {
                index: 1,
                source: EntryError::NoClues
            }
        ));
    }

    #[test]
    fn parse_rejects_unknown_difficulty() {
        let json = r#"[{"word": "cat", "difficulty": "extreme", "clues": ["meow"]}]"#;
        assert!(matches!(parse_str(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(parse_str("{not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/word_bank.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn error_messages_name_the_entry() {
        let err = parse_str(r#"[{"word": " ", "clues": ["x"]}]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid word bank entry #0: Entry word must not be empty"
        );
    }
}
