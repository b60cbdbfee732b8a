//! Word bank entry representation
//!
//! A `WordEntry` is one target word together with the ordered clues that describe it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard a word is to guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from its lowercase name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which subset of the word bank a round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Kids,
    General,
}

impl Audience {
    /// Parse an audience from its name
    ///
    /// Accepts `kids`/`kid` and `general`/`adult`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "kids" | "kid" => Some(Self::Kids),
            "general" | "adult" => Some(Self::General),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kids => "kids",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for invalid entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyWord,
    NoClues,
    UnknownDifficulty(String),
    UnknownAudience(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Entry word must not be empty"),
            Self::NoClues => write!(f, "Entry must have at least one clue"),
            Self::UnknownDifficulty(name) => write!(f, "Unknown difficulty '{name}'"),
            Self::UnknownAudience(name) => write!(f, "Unknown audience '{name}'"),
        }
    }
}

impl std::error::Error for EntryError {}

/// A target word with its clues and post-round details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    category: String,
    difficulty: Difficulty,
    audience: Audience,
    clues: Vec<String>,
    pronunciation: String,
    fun_fact: Option<String>,
}

impl WordEntry {
    /// Create a new entry from a word and its clues
    ///
    /// Defaults to the `general` category, medium difficulty and the general audience;
    /// use the `with_*` methods to fill in the rest.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty after trimming
    /// - There are no clues
    ///
    /// # Examples
    /// ```
    /// use word_detective::core::{Difficulty, WordEntry};
    ///
    /// let entry = WordEntry::new("cat", ["I purr", "I chase mice"])
    ///     .unwrap()
    ///     .with_difficulty(Difficulty::Easy);
    /// assert_eq!(entry.word(), "cat");
    /// assert_eq!(entry.clues().len(), 2);
    ///
    /// assert!(WordEntry::new("cat", Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(word: impl Into<String>, clues: I) -> Result<Self, EntryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let word: String = word.into().trim().to_string();
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        let clues: Vec<String> = clues.into_iter().map(Into::into).collect();
        if clues.is_empty() {
            return Err(EntryError::NoClues);
        }

        Ok(Self {
            word,
            category: "general".to_string(),
            difficulty: Difficulty::Medium,
            audience: Audience::General,
            clues,
            pronunciation: String::new(),
            fun_fact: None,
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub const fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    #[must_use]
    pub fn with_fun_fact(mut self, fun_fact: Option<String>) -> Self {
        self.fun_fact = fun_fact.filter(|fact| !fact.trim().is_empty());
        self
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn audience(&self) -> Audience {
        self.audience
    }

    /// Ordered clues, least revealing first. Never empty.
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    #[inline]
    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[inline]
    #[must_use]
    pub fn fun_fact(&self) -> Option<&str> {
        self.fun_fact.as_deref()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
