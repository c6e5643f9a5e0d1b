//! Bucketed confusion pair detection
//!
//! Comparing every word with every other word is quadratic and hopeless for
//! dictionaries of tens of thousands of words. Instead each word is filed
//! under cheap keys and only words sharing a bucket are ever compared:
//!
//! | Kind        | Bucket key                              | Strength                  |
//! |-------------|-----------------------------------------|---------------------------|
//! | anagram     | sorted-letter signature                 | 1.0                       |
//! | single edit | word itself + each one-letter deletion  | 1 / (1 + distance) = 0.5  |
//! | phonetic    | phonetic code                           | shorter / longer, floored |
//!
//! Buckets are compared in parallel; per-bucket results are merged afterwards
//! into a `ConfusionSet` whose order depends only on its contents.

use super::edit::{deletion_keys, edit_distance};
use super::index::KeyedBuckets;
use super::pair::{ConfusionKind, ConfusionPair};
use super::set::ConfusionSet;
use crate::core::{Word, WordId};
use rayon::prelude::*;

/// Counters describing one detection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Shared buckets (two or more members) per kind
    pub anagram_buckets: usize,
    pub edit_buckets: usize,
    pub phonetic_buckets: usize,
    /// Largest single-edit bucket
    pub largest_edit_bucket: usize,
    /// Word pairs examined inside shared buckets
    pub compared: usize,
    /// Examined pairs that failed verification
    pub rejected: usize,
    /// Accepted candidates that duplicated an existing pair
    pub collapsed: usize,
}

/// Output of a detection run
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub pairs: ConfusionSet,
    pub stats: DetectionStats,
}

/// Per-bucket accumulator, merged after the parallel scan
#[derive(Default)]
struct BucketOutcome {
    pairs: Vec<ConfusionPair>,
    compared: usize,
    rejected: usize,
}

impl BucketOutcome {
    fn merge(mut self, other: Self) -> Self {
        self.pairs.extend(other.pairs);
        self.compared += other.compared;
        self.rejected += other.rejected;
        self
    }
}

/// Finds confusable word pairs without all-pairs comparison
#[derive(Debug, Clone, Copy)]
pub struct ConfusionDetector {
    min_phonetic_strength: f64,
}

impl Default for ConfusionDetector {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl ConfusionDetector {
    /// Create a detector whose phonetic strengths never fall below the floor
    #[must_use]
    pub const fn new(min_phonetic_strength: f64) -> Self {
        Self {
            min_phonetic_strength,
        }
    }

    /// Detect confusion pairs among `words`
    ///
    /// `words[i]` must be the word with id `i`, as returned by
    /// `WordRegistry::all_words`.
    ///
    /// # Examples
    /// ```
    /// use lexiglyph::confusion::{ConfusionDetector, ConfusionKind};
    /// use lexiglyph::core::{Word, WordId};
    ///
    /// let words: Vec<Word> = ["cat", "act", "cats"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let detection = ConfusionDetector::default().detect(&words);
    ///
    /// let anagram = detection.pairs.get(WordId::new(0), WordId::new(1)).unwrap();
    /// assert_eq!(anagram.kind(), ConfusionKind::Anagram);
    /// let edit = detection.pairs.get(WordId::new(0), WordId::new(2)).unwrap();
    /// assert_eq!(edit.kind(), ConfusionKind::SingleEdit);
    /// ```
    #[must_use]
    pub fn detect(&self, words: &[Word]) -> Detection {
        let ((anagram_index, edit_index), phonetic_index) = rayon::join(
            || {
                rayon::join(
                    || KeyedBuckets::by_key(words, |w| w.signature().to_string()),
                    || KeyedBuckets::by_keys(words, |w| deletion_keys(w.letters())),
                )
            },
            || KeyedBuckets::by_key(words, |w| w.phonetic_code().to_string()),
        );

        let anagram_shared = anagram_index.shared();
        let edit_shared = edit_index.shared();
        let phonetic_shared = phonetic_index.shared();

        tracing::debug!(
            anagram_buckets = anagram_shared.len(),
            edit_keys = edit_index.len(),
            edit_buckets = edit_shared.len(),
            largest_edit_bucket = edit_index.largest(),
            phonetic_buckets = phonetic_shared.len(),
            "confusion buckets built"
        );

        let anagrams = scan(&anagram_shared, words, ConfusionKind::Anagram, |_, _| {
            Some(1.0)
        });
        let edits = scan(&edit_shared, words, ConfusionKind::SingleEdit, single_edit);
        let phonetics = scan(&phonetic_shared, words, ConfusionKind::Phonetic, |a, b| {
            Some(self.phonetic_strength(a, b))
        });

        let compared = anagrams.compared + edits.compared + phonetics.compared;
        let rejected = anagrams.rejected + edits.rejected + phonetics.rejected;

        let (pairs, collapsed) = ConfusionSet::merge(
            anagrams
                .pairs
                .into_iter()
                .chain(edits.pairs)
                .chain(phonetics.pairs),
        );

        Detection {
            pairs,
            stats: DetectionStats {
                anagram_buckets: anagram_shared.len(),
                edit_buckets: edit_shared.len(),
                phonetic_buckets: phonetic_shared.len(),
                largest_edit_bucket: edit_index.largest(),
                compared,
                rejected,
                collapsed,
            },
        }
    }

    /// Length ratio of the shorter to the longer word, floored
    fn phonetic_strength(&self, a: &Word, b: &Word) -> f64 {
        let (short, long) = if a.len() <= b.len() {
            (a.len(), b.len())
        } else {
            (b.len(), a.len())
        };
        (short as f64 / long as f64).max(self.min_phonetic_strength)
    }
}

/// Strength of a verified single-edit neighbour, `None` otherwise
fn single_edit(a: &Word, b: &Word) -> Option<f64> {
    if a.len().abs_diff(b.len()) > 1 {
        return None;
    }
    let distance = edit_distance(a.letters(), b.letters());
    (distance == 1).then(|| 1.0 / (1.0 + distance as f64))
}

/// Compare every member pair inside each shared bucket
fn scan<F>(buckets: &[&[WordId]], words: &[Word], kind: ConfusionKind, judge: F) -> BucketOutcome
where
    F: Fn(&Word, &Word) -> Option<f64> + Sync,
{
    buckets
        .par_iter()
        .map(|members| {
            let mut outcome = BucketOutcome::default();
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    outcome.compared += 1;
                    match judge(&words[a.index()], &words[b.index()]) {
                        Some(strength) => outcome
                            .pairs
                            .extend(ConfusionPair::new(a, b, kind, strength)),
                        None => outcome.rejected += 1,
                    }
                }
            }
            outcome
        })
        .reduce(BucketOutcome::default, BucketOutcome::merge)
}
