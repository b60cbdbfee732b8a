//! Word banks for Word Detective
//!
//! A `WordBank` is a shared, read-only list of entries. The built-in bank is compiled
//! into the binary; custom banks are loaded from JSON files.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN_ENTRIES, BUILTIN_ENTRIES_COUNT, RawEntry};

use crate::core::{Audience, WordEntry};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Read-only collection of word entries
///
/// Cloning is cheap: entries are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Arc<[WordEntry]>,
}

impl WordBank {
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// The built-in word bank
    ///
    /// # Examples
    /// ```
    /// use word_detective::core::Audience;
    /// use word_detective::wordbank::WordBank;
    ///
    /// let bank = WordBank::builtin();
    /// assert!(!bank.filter(Audience::Kids).is_empty());
    /// assert!(!bank.filter(Audience::General).is_empty());
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .filter_map(|raw| match raw.to_entry() {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(word = raw.word, error = %e, "skipping invalid built-in entry");
                    None
                }
            })
            .collect();
        Self::new(entries)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries intended for the given audience, in bank order
    #[must_use]
    pub fn filter(&self, audience: Audience) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.audience() == audience)
            .collect()
    }

    /// Pick an entry for the audience uniformly at random
    ///
    /// Returns `None` if no entry matches.
    pub fn choose<R: Rng + ?Sized>(&self, audience: Audience, rng: &mut R) -> Option<&WordEntry> {
        self.filter(audience).choose(rng).copied()
    }

    /// Sorted, de-duplicated category names
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.entries.iter().map(WordEntry::category).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Number of entries per category, optionally restricted to one audience
    #[must_use]
    pub fn category_counts(&self, audience: Option<Audience>) -> FxHashMap<&str, usize> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for entry in self
            .entries
            .iter()
            .filter(|entry| audience.is_none_or(|a| entry.audience() == a))
        {
            *counts.entry(entry.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<Vec<WordEntry>> for WordBank {
    fn from(entries: Vec<WordEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str, audience: Audience, category: &str) -> WordEntry {
        WordEntry::new(word, ["clue"])
            .unwrap()
            .with_audience(audience)
            .with_category(category)
    }

    fn sample_bank() -> WordBank {
        WordBank::new(vec![
            entry("cat", Audience::Kids, "animals"),
            entry("dog", Audience::Kids, "animals"),
            entry("apple", Audience::Kids, "food"),
            entry("serendipity", Audience::General, "concepts"),
        ])
    }

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(WordBank::builtin().len(), BUILTIN_ENTRIES_COUNT);
        assert_eq!(BUILTIN_ENTRIES.len(), BUILTIN_ENTRIES_COUNT);
    }

    #[test]
    fn builtin_entries_are_valid() {
        for raw in BUILTIN_ENTRIES {
            let entry = raw.to_entry();
            assert!(entry.is_ok(), "Entry '{}' is invalid: {entry:?}", raw.word);
        }
    }

    #[test]
    fn builtin_has_both_audiences() {
        let bank = WordBank::builtin();
        assert!(!bank.filter(Audience::Kids).is_empty());
        assert!(!bank.filter(Audience::General).is_empty());
    }

    #[test]
    fn builtin_contains_known_words() {
        let bank = WordBank::builtin();
        let elephant = bank
            .entries()
            .iter()
            .find(|e| e.word() == "elephant")
            .unwrap();

        assert_eq!(elephant.audience(), Audience::Kids);
        assert_eq!(elephant.clues().len(), 3);
        assert_eq!(elephant.pronunciation(), "EL-uh-fuhnt");
        assert!(elephant.fun_fact().is_some());
    }

    #[test]
    fn filter_by_audience() {
        let bank = sample_bank();
        let kids: Vec<&str> = bank.filter(Audience::Kids).iter().map(|e| e.word()).collect();
        assert_eq!(kids, vec!["cat", "dog", "apple"]);

        let general = bank.filter(Audience::General);
        assert_eq!(general.len(), 1);
        assert_eq!(general[0].word(), "serendipity");
    }

    #[test]
    fn choose_respects_audience() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = bank.choose(Audience::General, &mut rng).unwrap();
            assert_eq!(picked.word(), "serendipity");
        }
    }

    #[test]
    fn choose_covers_all_matches() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        for _ in 0..300 {
            let picked = bank.choose(Audience::Kids, &mut rng).unwrap();
            *seen.entry(picked.word().to_string()).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 3);
        assert!(seen.values().all(|&count| count > 50));
    }

    #[test]
    fn choose_empty_audience_returns_none() {
        let bank = WordBank::new(vec![entry("cat", Audience::Kids, "animals")]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(bank.choose(Audience::General, &mut rng).is_none());
    }

    #[test]
    fn categories_sorted_and_unique() {
        let bank = sample_bank();
        assert_eq!(bank.categories(), vec!["animals", "concepts", "food"]);
    }

    #[test]
    fn category_counts_per_audience() {
        let bank = sample_bank();

        let all = bank.category_counts(None);
        assert_eq!(all.get("animals"), Some(&2));
        assert_eq!(all.get("concepts"), Some(&1));

        let kids = bank.category_counts(Some(Audience::Kids));
        assert_eq!(kids.get("food"), Some(&1));
        assert_eq!(kids.get("concepts"), None);
    }

    #[test]
    fn clone_shares_entries() {
        let bank = sample_bank();
        let copy = bank.clone();
        assert!(std::ptr::eq(bank.entries(), copy.entries()));
    }
}
