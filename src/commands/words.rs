//! Word bank listing command
//!
//! Groups bank entries by category for display.

use crate::core::{Audience, Difficulty, WordEntry};
use crate::wordbank::WordBank;

/// One word as shown in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub word: String,
    pub difficulty: Difficulty,
    pub audience: Audience,
    pub clues: usize,
    pub pronunciation: String,
}

impl From<&WordEntry> for WordSummary {
    fn from(entry: &WordEntry) -> Self {
        Self {
            word: entry.word().to_string(),
            difficulty: entry.difficulty(),
            audience: entry.audience(),
            clues: entry.clues().len(),
            pronunciation: entry.pronunciation().to_string(),
        }
    }
}

/// Words of one category
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: String,
    pub words: Vec<WordSummary>,
}

/// Result of listing the word bank
#[derive(Debug, Clone)]
pub struct WordListing {
    pub audience: Option<Audience>,
    pub groups: Vec<CategoryGroup>,
    pub total: usize,
}

/// List bank entries grouped by category
///
/// Categories are sorted by name; words within a category by difficulty, then
/// alphabetically. Pass `None` to list every audience.
#[must_use]
pub fn list_words(bank: &WordBank, audience: Option<Audience>) -> WordListing {
    let counts = bank.category_counts(audience);

    let groups: Vec<CategoryGroup> = bank
        .categories()
        .into_iter()
        .filter(|category| counts.get(category).is_some_and(|&n| n > 0))
        .map(|category| {
            let mut words: Vec<WordSummary> = bank
                .entries()
                .iter()
                .filter(|e| e.category() == category)
                .filter(|e| audience.is_none_or(|a| e.audience() == a))
                .map(WordSummary::from)
                .collect();
            words.sort_by(|a, b| a.difficulty.cmp(&b.difficulty).then_with(|| a.word.cmp(&b.word)));

            CategoryGroup {
                category: category.to_string(),
                words,
            }
        })
        .collect();

    let total = groups.iter().map(|g| g.words.len()).sum();

    WordListing {
        audience,
        groups,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, category: &str, difficulty: Difficulty, audience: Audience) -> WordEntry {
        WordEntry::new(word, ["a", "b"])
            .unwrap()
            .with_category(category)
            .with_difficulty(difficulty)
            .with_audience(audience)
    }

    fn bank() -> WordBank {
        WordBank::new(vec![
            entry("penguin", "animals", Difficulty::Medium, Audience::Kids),
            entry("elephant", "animals", Difficulty::Easy, Audience::Kids),
            entry("giraffe", "animals", Difficulty::Easy, Audience::Kids),
            entry("nostalgia", "emotions", Difficulty::Medium, Audience::General),
        ])
    }

    #[test]
    fn list_all_audiences() {
        let listing = list_words(&bank(), None);
        assert_eq!(listing.total, 4);
        assert_eq!(listing.groups.len(), 2);
        assert_eq!(listing.groups[0].category, "animals");
        assert_eq!(listing.groups[1].category, "emotions");
    }

    #[test]
    fn list_sorts_by_difficulty_then_word() {
        let listing = list_words(&bank(), Some(Audience::Kids));
        let words: Vec<&str> = listing.groups[0]
            .words
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(words, vec!["elephant", "giraffe", "penguin"]);
    }

    #[test]
    fn list_skips_categories_without_matches() {
        let listing = list_words(&bank(), Some(Audience::General));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.groups.len(), 1);
        assert_eq!(listing.groups[0].category, "emotions");
        assert_eq!(listing.groups[0].words[0].clues, 2);
    }

    #[test]
    fn list_empty_bank() {
        let listing = list_words(&WordBank::new(Vec::new()), None);
        assert_eq!(listing.total, 0);
        assert!(listing.groups.is_empty());
    }
}
