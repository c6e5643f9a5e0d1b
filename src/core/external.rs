//! Capabilities the engine needs from outside collaborators
//!
//! The pipeline receives these as explicit arguments so every run is
//! reproducible from its inputs alone.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// A set of forbidden normalized words
pub trait WordFilter: Sync {
    /// Check whether a normalized word must be dropped
    fn contains(&self, normalized: &str) -> bool;
}

/// Per-word frequency rank (1 = most common)
pub trait FrequencySource: Sync {
    /// Rank of a normalized word, if known
    fn rank(&self, normalized: &str) -> Option<u32>;
}

impl<S: BuildHasher + Sync> WordFilter for HashSet<String, S> {
    fn contains(&self, normalized: &str) -> bool {
        HashSet::contains(self, normalized)
    }
}

/// Filter that never blocks anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl WordFilter for NoFilter {
    fn contains(&self, _normalized: &str) -> bool {
        false
    }
}
