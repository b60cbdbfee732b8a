//! Formatting utilities for terminal output

/// Filled and empty heart glyphs for remaining attempts
const FULL_HEART: char = '♥';
const EMPTY_HEART: char = '♡';

/// Format remaining attempts as hearts
#[must_use]
pub fn hearts(remaining: u32, max: u32) -> String {
    let remaining = remaining.min(max) as usize;
    let max = max as usize;

    let mut result = String::with_capacity(max * FULL_HEART.len_utf8());
    result.extend(std::iter::repeat_n(FULL_HEART, remaining));
    result.extend(std::iter::repeat_n(EMPTY_HEART, max - remaining));
    result
}

/// "Clue 2 of 3"
#[must_use]
pub fn clue_progress(number: usize, total: usize) -> String {
    format!("Clue {number} of {total}")
}

/// "1 try left" / "2 tries left"
#[must_use]
pub fn tries_left(count: u32) -> String {
    if count == 1 {
        "1 try left".to_string()
    } else {
        format!("{count} tries left")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_full() {
        assert_eq!(hearts(3, 3), "♥♥♥");
    }

    #[test]
    fn hearts_partial_and_empty() {
        assert_eq!(hearts(1, 3), "♥♡♡");
        assert_eq!(hearts(0, 3), "♡♡♡");
    }

    #[test]
    fn hearts_clamps_to_max() {
        assert_eq!(hearts(7, 3), "♥♥♥");
    }

    #[test]
    fn clue_progress_format() {
        assert_eq!(clue_progress(2, 3), "Clue 2 of 3");
    }

    #[test]
    fn tries_left_pluralizes() {
        assert_eq!(tries_left(0), "0 tries left");
        assert_eq!(tries_left(1), "1 try left");
        assert_eq!(tries_left(2), "2 tries left");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
