//! Quantile tier assignment
//!
//! Words are ranked by adjusted score (complexity plus weighted confusion
//! bonus) and cut into `tier_count` contiguous, near-equal slices.

use crate::confusion::ConfusionSet;
use crate::core::Word;
use crate::scoring::ComplexityScore;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Difficulty tier, 1 (easiest) to `tier_count` (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tier(u16);

impl Tier {
    /// Tiers are numbered from 1
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Zero-based position, for indexing per-tier vectors
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Tier at a zero-based position, if it fits the tier range
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|value| u16::try_from(value).ok())
            .and_then(Self::new)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while assigning tiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TierError {
    #[error("tier count must be at least 1")]
    ZeroTiers,

    #[error("tier count {tier_count} exceeds vocabulary size {vocabulary}")]
    TooManyTiers { tier_count: usize, vocabulary: usize },

    #[error("tier count {0} exceeds the supported maximum")]
    TierCountOverflow(usize),

    #[error("{words} words but {scores} scores")]
    MissingScores { words: usize, scores: usize },

    #[error("confusion pair references unknown word {id} (vocabulary {vocabulary})")]
    UnknownWord { id: String, vocabulary: usize },
}

impl TierError {
    /// Whether the error signals a sequencing defect rather than bad input
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::MissingScores { .. } | Self::UnknownWord { .. })
    }
}

/// Frozen result of a tier assignment
///
/// Built once from the global score distribution; there is no way to change
/// a single word's tier afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TierAssignment {
    tier_count: usize,
    tiers: Vec<Tier>,
    adjusted: Vec<f64>,
    sizes: Vec<usize>,
}

impl TierAssignment {
    #[inline]
    #[must_use]
    pub const fn tier_count(&self) -> usize {
        self.tier_count
    }

    /// Tier per word, indexed by `WordId`
    #[inline]
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Adjusted score per word, indexed by `WordId`
    #[inline]
    #[must_use]
    pub fn adjusted_scores(&self) -> &[f64] {
        &self.adjusted
    }

    /// Number of words in each tier, lowest first
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

/// Assigns difficulty tiers from scores and confusion pairs
#[derive(Debug, Clone, Copy)]
pub struct TierAssigner {
    tier_count: usize,
    confusion_weight: f64,
}

impl TierAssigner {
    #[must_use]
    pub const fn new(tier_count: usize, confusion_weight: f64) -> Self {
        Self {
            tier_count,
            confusion_weight,
        }
    }

    /// Assign every word exactly one tier
    ///
    /// `words`, `scores` and the ids inside `pairs` must all refer to the same
    /// registry ordering.
    ///
    /// # Errors
    /// - `ZeroTiers` / `TooManyTiers` / `TierCountOverflow` for unusable tier counts
    /// - `MissingScores` / `UnknownWord` when inputs are out of step
    pub fn assign(
        &self,
        words: &[Word],
        scores: &[ComplexityScore],
        pairs: &ConfusionSet,
    ) -> Result<TierAssignment, TierError> {
        let n = words.len();

        if self.tier_count == 0 {
            return Err(TierError::ZeroTiers);
        }
        if self.tier_count > usize::from(u16::MAX) {
            return Err(TierError::TierCountOverflow(self.tier_count));
        }
        if self.tier_count > n {
            return Err(TierError::TooManyTiers {
                tier_count: self.tier_count,
                vocabulary: n,
            });
        }
        if scores.len() != n {
            return Err(TierError::MissingScores {
                words: n,
                scores: scores.len(),
            });
        }
        if let Some(id) = pairs.max_id().filter(|id| id.index() >= n) {
            return Err(TierError::UnknownWord {
                id: id.to_string(),
                vocabulary: n,
            });
        }

        let bonuses = pairs.strength_sums(n);
        let adjusted: Vec<f64> = scores
            .iter()
            .zip(&bonuses)
            .map(|(score, bonus)| score.value() + self.confusion_weight * bonus)
            .collect();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| rank(&adjusted, words, a, b));

        let sizes = quantile_sizes(n, self.tier_count);
        let mut tiers = vec![Tier(1); n];
        let mut cursor = 0;
        for (t, &size) in sizes.iter().enumerate() {
            let tier = Tier(t as u16 + 1);
            for &word in &order[cursor..cursor + size] {
                tiers[word] = tier;
            }
            cursor += size;
        }

        Ok(TierAssignment {
            tier_count: self.tier_count,
            tiers,
            adjusted,
            sizes,
        })
    }
}

/// Ascending adjusted score, ties broken by normalized spelling
fn rank(adjusted: &[f64], words: &[Word], a: usize, b: usize) -> Ordering {
    adjusted[a]
        .total_cmp(&adjusted[b])
        .then_with(|| words[a].text().cmp(words[b].text()))
}

/// Split `n` items into `k` contiguous slices whose sizes differ by at most one
///
/// The remainder goes to the lowest tiers first.
///
/// # Examples
/// ```
/// use lexiglyph::tiers::quantile_sizes;
///
/// assert_eq!(quantile_sizes(10, 3), vec![4, 3, 3]);
/// assert_eq!(quantile_sizes(3, 2), vec![2, 1]);
/// assert_eq!(quantile_sizes(4, 4), vec![1, 1, 1, 1]);
/// ```
#[must_use]
pub fn quantile_sizes(n: usize, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }
    let base = n / k;
    let remainder = n % k;
    (0..k).map(|t| base + usize::from(t < remainder)).collect()
}
