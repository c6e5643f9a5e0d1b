//! Deduplicated, ordered collection of confusion pairs

use super::pair::{ConfusionKind, ConfusionPair};
use crate::core::WordId;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A confusable neighbour of some word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: WordId,
    pub kind: ConfusionKind,
    pub strength: f64,
}

/// Set of confusion pairs, at most one per unordered word pair
///
/// Pairs are kept sorted by `(first, second)` id so iteration order depends
/// only on the set's contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfusionSet {
    pairs: Vec<ConfusionPair>,
}

impl ConfusionSet {
    /// Collapse candidate pairs, keeping the best kind for each word pair
    ///
    /// Returns the set and the number of candidates that collapsed into an
    /// already present pair.
    pub fn merge<I>(candidates: I) -> (Self, usize)
    where
        I: IntoIterator<Item = ConfusionPair>,
    {
        let mut best: FxHashMap<(WordId, WordId), ConfusionPair> = FxHashMap::default();
        let mut collapsed = 0;

        for pair in candidates {
            match best.entry(pair.key()) {
                Entry::Occupied(mut slot) => {
                    collapsed += 1;
                    if pair.outranks(slot.get()) {
                        slot.insert(pair);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(pair);
                }
            }
        }

        let mut pairs: Vec<ConfusionPair> = best.into_values().collect();
        pairs.sort_unstable_by_key(ConfusionPair::key);
        (Self { pairs }, collapsed)
    }

    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[ConfusionPair] {
        &self.pairs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pair joining `a` and `b`, in either order
    #[must_use]
    pub fn get(&self, a: WordId, b: WordId) -> Option<&ConfusionPair> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.pairs
            .binary_search_by_key(&key, ConfusionPair::key)
            .ok()
            .map(|i| &self.pairs[i])
    }

    /// Number of pairs of a given kind
    #[must_use]
    pub fn count(&self, kind: ConfusionKind) -> usize {
        self.pairs.iter().filter(|p| p.kind() == kind).count()
    }

    /// Largest id referenced by any pair
    #[must_use]
    pub fn max_id(&self) -> Option<WordId> {
        self.pairs.iter().map(ConfusionPair::second).max()
    }

    /// Sum of pair strengths per word, indexed by `WordId`
    ///
    /// Each word's strengths are added smallest first, so the sums are
    /// bit-for-bit identical however the input words were ordered.
    #[must_use]
    pub fn strength_sums(&self, word_count: usize) -> Vec<f64> {
        let mut strengths: Vec<Vec<f64>> = vec![Vec::new(); word_count];
        for pair in &self.pairs {
            for id in [pair.first(), pair.second()] {
                if let Some(list) = strengths.get_mut(id.index()) {
                    list.push(pair.strength());
                }
            }
        }

        strengths
            .into_iter()
            .map(|mut list| {
                list.sort_by(f64::total_cmp);
                list.iter().sum::<f64>()
            })
            .collect()
    }

    /// Neighbour lists per word, indexed by `WordId`
    ///
    /// Both members of a pair list each other with the same kind and strength.
    #[must_use]
    pub fn neighbors(&self, word_count: usize) -> Vec<Vec<Neighbor>> {
        let mut lists = vec![Vec::new(); word_count];
        for pair in &self.pairs {
            let (a, b) = pair.key();
            if b.index() >= word_count {
                continue;
            }
            lists[a.index()].push(Neighbor {
                id: b,
                kind: pair.kind(),
                strength: pair.strength(),
            });
            lists[b.index()].push(Neighbor {
                id: a,
                kind: pair.kind(),
                strength: pair.strength(),
            });
        }
        lists
    }
}

impl FromIterator<ConfusionPair> for ConfusionSet {
    fn from_iter<I: IntoIterator<Item = ConfusionPair>>(iter: I) -> Self {
        Self::merge(iter).0
    }
}
