//! Word frequency ranks
//!
//! Two file shapes are accepted, and may be mixed:
//!
//! ```text
//! the 1        explicit "word rank" pair
//! of           bare word: rank is its line number
//! ```
//!
//! The first rank seen for a word wins.

use crate::core::{FrequencySource, normalize};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::io;
use std::path::Path;

/// Normalized word to frequency rank (1 = most common)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyRanks {
    ranks: FxHashMap<String, u32>,
}

impl FrequencyRanks {
    /// Parse rank data from text
    ///
    /// Lines whose word normalizes to nothing are ignored; an unparsable
    /// rank falls back to the line number.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut ranks = FxHashMap::default();

        for (line_no, line) in content.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(raw) = fields.next() else {
                continue;
            };
            let word = normalize(raw);
            if word.is_empty() {
                continue;
            }

            let fallback = u32::try_from(line_no + 1).unwrap_or(u32::MAX);
            let rank = fields
                .next()
                .and_then(|r| r.parse::<u32>().ok())
                .unwrap_or(fallback);

            if let Entry::Vacant(slot) = ranks.entry(word) {
                slot.insert(rank);
            }
        }

        Self { ranks }
    }

    /// Load rank data from a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let ranks = Self::parse(&fs::read_to_string(path)?);
        tracing::info!(path = %path.display(), words = ranks.len(), "frequency ranks loaded");
        Ok(ranks)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FrequencySource for FrequencyRanks {
    fn rank(&self, normalized: &str) -> Option<u32> {
        self.ranks.get(normalized).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_ranks() {
        let ranks = FrequencyRanks::parse("the 1\nzebra 5000\n");
        assert_eq!(ranks.rank("the"), Some(1));
        assert_eq!(ranks.rank("zebra"), Some(5000));
        assert_eq!(ranks.rank("missing"), None);
    }

    #[test]
    fn bare_words_rank_by_line() {
        let ranks = FrequencyRanks::parse("The\nof\n\nAnd\n");
        assert_eq!(ranks.rank("the"), Some(1));
        assert_eq!(ranks.rank("of"), Some(2));
        assert_eq!(ranks.rank("and"), Some(4));
        assert_eq!(ranks.len(), 3);
    }

    #[test]
    fn first_rank_wins_and_junk_ignored() {
        let ranks = FrequencyRanks::parse("cat 3\ncat 9\n42 7\ndog many\n");
        assert_eq!(ranks.rank("cat"), Some(3));
        assert_eq!(ranks.rank("dog"), Some(4));
        assert_eq!(ranks.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.txt");
        fs::write(&path, "alpha 10\nbeta\n").unwrap();

        let ranks = FrequencyRanks::load(&path).unwrap();
        assert_eq!(ranks.rank("alpha"), Some(10));
        assert_eq!(ranks.rank("beta"), Some(2));
    }
}
