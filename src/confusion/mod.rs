//! Confusion pair detection
//!
//! Finds words likely to be mistaken for one another (anagrams, single-edit
//! neighbours, sound-alikes) using keyed buckets instead of all-pairs
//! comparison.

mod detector;
mod edit;
mod index;
mod pair;
mod set;

pub use detector::{ConfusionDetector, Detection, DetectionStats};
pub use edit::{deletion_keys, edit_distance};
pub use index::KeyedBuckets;
pub use pair::{ConfusionKind, ConfusionPair};
pub use set::{ConfusionSet, Neighbor};
