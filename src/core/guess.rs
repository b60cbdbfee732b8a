//! Guess normalization and matching
//!
//! Guesses usually arrive from speech transcription, so matching is deliberately
//! lenient: a guess is correct when either normalized string contains the other.

/// Characters removed from guesses and targets before comparison
const STRIPPED: [char; 4] = ['.', ',', '!', '?'];

/// Normalize text for comparison: lowercase, trim, then strip `.,!?`
///
/// # Examples
/// ```
/// use word_detective::core::normalize;
///
/// assert_eq!(normalize("  A Cat! "), "a cat");
/// assert_eq!(normalize("Why?"), "why");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

/// Check whether a raw guess matches the target word
///
/// An empty normalized guess never matches.
///
/// # Examples
/// ```
/// use word_detective::core::is_match;
///
/// assert!(is_match("a cat!", "cat"));
/// assert!(is_match("ice", "ice cream"));
/// assert!(!is_match("dog", "cat"));
/// assert!(!is_match("?!", "cat"));
/// ```
#[must_use]
pub fn is_match(guess: &str, target: &str) -> bool {
    let guess = normalize(guess);
    let target = normalize(target);

    if guess.is_empty() {
        return false;
    }

    guess.contains(&target) || target.contains(&guess)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  ELEPHANT  "), "elephant");
        assert_eq!(normalize("Ice Cream"), "ice cream");
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("banana."), "banana");
        assert_eq!(normalize("is it a penguin?!"), "is it a penguin");
        assert_eq!(normalize("yes, rainbow"), "yes rainbow");
    }

    #[test]
    fn normalize_keeps_other_symbols() {
        assert_eq!(normalize("great-wall's"), "great-wall's");
    }

    #[test]
    fn exact_guess_matches() {
        assert!(is_match("giraffe", "giraffe"));
    }

    #[test]
    fn case_whitespace_and_punctuation_variants_match() {
        for guess in ["Giraffe", "  GIRAFFE ", "giraffe!", "Giraffe?", "giraffe.", ",giraffe,"] {
            assert!(is_match(guess, "giraffe"), "'{guess}' should match");
        }
    }

    #[test]
    fn guess_containing_target_matches() {
        assert!(is_match("a cat!", "cat"));
        assert!(is_match("I think it's a dinosaur", "dinosaur"));
    }

    #[test]
    fn target_containing_guess_matches() {
        assert!(is_match("northern", "northern lights"));
        assert!(is_match("milky", "Milky Way"));
    }

    #[test]
    fn unrelated_guess_does_not_match() {
        assert!(!is_match("zebra", "giraffe"));
        assert!(!is_match("ice cold", "ice cream"));
    }

    #[test]
    fn empty_guess_never_matches() {
        assert!(!is_match("", "cat"));
        assert!(!is_match("   ", "cat"));
        assert!(!is_match("...", "cat"));
    }
}
