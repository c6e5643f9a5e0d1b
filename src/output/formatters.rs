//! Formatting utilities for terminal output

use crate::confusion::ConfusionKind;
use crate::pipeline::Confusable;
use crate::tiers::{Tier, tier_label};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Tier label coloured from green (easiest) to red (hardest)
#[must_use]
pub fn colored_tier(tier: Tier, tier_count: usize) -> ColoredString {
    let label = tier_label(tier, tier_count);
    let position = if tier_count > 1 {
        tier.index() as f64 / (tier_count - 1) as f64
    } else {
        0.0
    };

    if position < 0.34 {
        label.green()
    } else if position < 0.67 {
        label.yellow()
    } else {
        label.red()
    }
}

/// Short human name of a confusion kind
#[must_use]
pub const fn kind_label(kind: ConfusionKind) -> &'static str {
    match kind {
        ConfusionKind::Anagram => "anagram",
        ConfusionKind::SingleEdit => "one edit",
        ConfusionKind::Phonetic => "sounds alike",
    }
}

/// One confusable as `word (kind, strength)`
#[must_use]
pub fn format_confusable(confusable: &Confusable) -> String {
    format!(
        "{} ({}, {:.2})",
        confusable.word,
        kind_label(confusable.kind),
        confusable.strength
    )
}

/// Compact elapsed time: `850ms`, `2.31s`
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn confusable_formatting() {
        let c = Confusable {
            word: "silent".to_string(),
            kind: ConfusionKind::Anagram,
            strength: 1.0,
        };
        assert_eq!(format_confusable(&c), "silent (anagram, 1.00)");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(2310)), "2.31s");
    }

    #[test]
    fn tier_labels_keep_text() {
        let hard = Tier::new(3).unwrap();
        assert!(colored_tier(hard, 3).to_string().contains("Hard"));
    }
}
