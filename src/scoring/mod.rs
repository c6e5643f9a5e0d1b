//! Word complexity scoring
//!
//! A pure per-word scorer plus a parallel driver over a whole vocabulary.

mod batch;
mod complexity;

pub use batch::{hardest, score_all};
pub use complexity::{ComplexityScore, ComplexityScorer, ScoreBreakdown, ScoringWeights, length_term};
