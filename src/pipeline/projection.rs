//! Result projection
//!
//! Assembles the per-word view of a run from the frozen outputs of the
//! earlier stages. Nothing is recomputed here.

use super::error::PipelineError;
use crate::confusion::{ConfusionKind, ConfusionSet, Neighbor};
use crate::core::Word;
use crate::scoring::ComplexityScore;
use crate::tiers::{Tier, TierAssignment};
use serde::Serialize;
use std::cmp::Ordering;

/// A word another word can be mistaken for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confusable {
    pub word: String,
    pub kind: ConfusionKind,
    pub strength: f64,
}

/// Final record for one word
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedWord {
    pub word: String,
    pub tier: Tier,
    pub score: f64,
    pub adjusted_score: f64,
    pub spellings: Vec<String>,
    pub confused_with: Vec<Confusable>,
}

/// Build one record per word, in registry (first-seen) order
///
/// Confusables are listed strongest first; equal strengths put the higher
/// priority kind first, then sort alphabetically.
///
/// # Errors
/// Returns `PipelineError::Internal` when the inputs do not cover the same words.
pub fn project(
    words: &[Word],
    scores: &[ComplexityScore],
    assignment: &TierAssignment,
    pairs: &ConfusionSet,
) -> Result<Vec<ProjectedWord>, PipelineError> {
    let n = words.len();
    if scores.len() != n || assignment.tiers().len() != n {
        return Err(PipelineError::Internal(format!(
            "projection over {n} words got {} scores and {} tiers",
            scores.len(),
            assignment.tiers().len()
        )));
    }

    let neighbors = pairs.neighbors(n);

    Ok(words
        .iter()
        .zip(scores)
        .zip(assignment.tiers().iter().zip(assignment.adjusted_scores()))
        .zip(neighbors)
        .map(|(((word, score), (&tier, &adjusted)), mut near)| {
            near.sort_by(|a, b| by_relevance(words, a, b));
            ProjectedWord {
                word: word.text().to_string(),
                tier,
                score: score.value(),
                adjusted_score: adjusted,
                spellings: word.spellings().map(str::to_string).collect(),
                confused_with: near
                    .into_iter()
                    .map(|neighbor| Confusable {
                        word: words[neighbor.id.index()].text().to_string(),
                        kind: neighbor.kind,
                        strength: neighbor.strength,
                    })
                    .collect(),
            }
        })
        .collect())
}

fn by_relevance(words: &[Word], a: &Neighbor, b: &Neighbor) -> Ordering {
    b.strength
        .total_cmp(&a.strength)
        .then_with(|| b.kind.priority().cmp(&a.kind.priority()))
        .then_with(|| words[a.id.index()].text().cmp(words[b.id.index()].text()))
}
