//! Word analysis command
//!
//! Explains where one word's tier comes from: each complexity term and the
//! words it can be confused with.

use super::build::{BuildOptions, build_with_frequency, load_frequency};
use crate::config::EngineConfig;
use crate::pipeline::{Confusable, PipelineOutput};
use crate::scoring::{ComplexityScorer, ScoreBreakdown, ScoringWeights};
use crate::tiers::Tier;
use anyhow::{Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub breakdown: ScoreBreakdown,
    pub weights: ScoringWeights,
    pub score: f64,
    pub adjusted_score: f64,
    pub tier: Tier,
    pub tier_count: usize,
    /// 1-based position by adjusted score, easiest first
    pub rank: usize,
    pub vocabulary: usize,
    pub confused_with: Vec<Confusable>,
}

/// Run the pipeline over `options` and analyze one word of the result
///
/// The frequency file is read once and shared by the run and the breakdown.
///
/// # Errors
/// Returns an error if the run fails or the word is not in its vocabulary.
pub fn run_analyze(
    word: &str,
    config: EngineConfig,
    options: &BuildOptions,
) -> Result<AnalysisResult> {
    let frequency = load_frequency(options)?;
    let mut scorer = ComplexityScorer::new(config.weights(), config.length_knee);
    if let Some(ranks) = &frequency {
        scorer = scorer.with_frequency(ranks);
    }

    let output = build_with_frequency(config, options, frequency.as_ref())?;
    analyze_word(word, &output, &scorer)
}

/// Analyze a word within a finished run
///
/// `scorer` must be the scorer the run used, so the breakdown adds up to the
/// reported score.
///
/// # Errors
///
/// Returns an error if the word normalizes to nothing or is not part of the
/// run's vocabulary.
pub fn analyze_word(
    word: &str,
    output: &PipelineOutput,
    scorer: &ComplexityScorer<'_>,
) -> Result<AnalysisResult> {
    let normalized = crate::core::normalize(word);
    if normalized.is_empty() {
        bail!("'{word}' has no letters to analyze");
    }

    let Some(id) = output.registry.id_of(&normalized) else {
        bail!("Word '{word}' not in word list");
    };
    let (Some(entry), Some(vocab_word)) = (output.words.get(id.index()), output.registry.get(id))
    else {
        bail!("Word '{word}' missing from results");
    };

    let adjusted = output.assignment.adjusted_scores();
    let rank = 1 + adjusted
        .iter()
        .filter(|&&other| other < entry.adjusted_score)
        .count();

    Ok(AnalysisResult {
        word: entry.word.clone(),
        breakdown: scorer.breakdown(vocab_word),
        weights: scorer.weights(),
        score: entry.score,
        adjusted_score: entry.adjusted_score,
        tier: entry.tier,
        tier_count: output.tier_count(),
        rank,
        vocabulary: output.words.len(),
        confused_with: entry.confused_with.clone(),
    })
}
