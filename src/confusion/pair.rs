//! Confusion pair types

use crate::core::WordId;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Why two words may be mistaken for one another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfusionKind {
    /// Same multiset of letters
    Anagram,
    /// One insertion, deletion or substitution apart
    SingleEdit,
    /// Same coarse sound-alike code
    Phonetic,
}

impl ConfusionKind {
    /// All kinds, from highest to lowest priority
    pub const ALL: [Self; 3] = [Self::Anagram, Self::SingleEdit, Self::Phonetic];

    /// Dedup priority; higher wins when a pair qualifies under several kinds
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Anagram => 3,
            Self::SingleEdit => 2,
            Self::Phonetic => 1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Anagram => "anagram",
            Self::SingleEdit => "single_edit",
            Self::Phonetic => "phonetic",
        }
    }
}

impl fmt::Display for ConfusionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered pair of distinct words with a confusion kind and strength
///
/// The pair is stored with the smaller id first, so `(a, b)` and `(b, a)`
/// build the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionPair {
    first: WordId,
    second: WordId,
    kind: ConfusionKind,
    strength: f64,
}

impl ConfusionPair {
    /// Build a pair, or `None` for a self-pair
    ///
    /// Strength is clamped into (0, 1].
    #[must_use]
    pub fn new(a: WordId, b: WordId, kind: ConfusionKind, strength: f64) -> Option<Self> {
        let (first, second) = match a.cmp(&b) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return None,
        };
        debug_assert!(strength > 0.0, "confusion strength must be positive");

        Some(Self {
            first,
            second,
            kind,
            strength: strength.min(1.0),
        })
    }

    #[inline]
    #[must_use]
    pub const fn first(&self) -> WordId {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> WordId {
        self.second
    }

    /// Order-independent identity of the pair
    #[inline]
    #[must_use]
    pub const fn key(&self) -> (WordId, WordId) {
        (self.first, self.second)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ConfusionKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn strength(&self) -> f64 {
        self.strength
    }

    /// The member of the pair that is not `id`
    #[must_use]
    pub fn other(&self, id: WordId) -> Option<WordId> {
        if id == self.first {
            Some(self.second)
        } else if id == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// Whether this pair should replace `existing` for the same key
    #[must_use]
    pub fn outranks(&self, existing: &Self) -> bool {
        self.kind.priority() > existing.kind.priority()
            || (self.kind == existing.kind && self.strength > existing.strength)
    }
}
