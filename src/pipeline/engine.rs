//! The batch pipeline
//!
//! ```text
//! tokens ─► Ingest ─► Filter ─► Score ─► Detect ─► Tier ─► Project ─► output
//! ```
//!
//! Each stage reads the frozen output of the previous one. The run budget is
//! checked between stages; a failed check discards everything.

use super::budget::{RunBudget, Stage};
use super::error::PipelineError;
use super::projection::{ProjectedWord, project};
use crate::config::EngineConfig;
use crate::confusion::{ConfusionDetector, ConfusionKind, ConfusionSet, DetectionStats};
use crate::core::{FrequencySource, NoFilter, WordFilter, WordRegistry};
use crate::scoring::{ComplexityScore, ComplexityScorer, score_all};
use crate::tiers::{TierAssigner, TierAssignment};
use std::time::{Duration, Instant};
use tracing::info;

/// Counters describing a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub tokens_read: usize,
    pub skipped: usize,
    pub filtered: usize,
    pub vocabulary: usize,
    pub anagram_pairs: usize,
    pub single_edit_pairs: usize,
    pub phonetic_pairs: usize,
    pub detection: DetectionStats,
    pub tier_sizes: Vec<usize>,
    pub elapsed: Duration,
}

impl Diagnostics {
    #[must_use]
    pub const fn total_pairs(&self) -> usize {
        self.anagram_pairs + self.single_edit_pairs + self.phonetic_pairs
    }

    #[must_use]
    pub const fn pairs_of(&self, kind: ConfusionKind) -> usize {
        match kind {
            ConfusionKind::Anagram => self.anagram_pairs,
            ConfusionKind::SingleEdit => self.single_edit_pairs,
            ConfusionKind::Phonetic => self.phonetic_pairs,
        }
    }
}

/// Everything a successful run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub registry: WordRegistry,
    pub scores: Vec<ComplexityScore>,
    pub pairs: ConfusionSet,
    pub assignment: TierAssignment,
    pub words: Vec<ProjectedWord>,
    pub diagnostics: Diagnostics,
}

impl PipelineOutput {
    #[must_use]
    pub const fn tier_count(&self) -> usize {
        self.assignment.tier_count()
    }

    /// The projected record for any spelling of a surviving word
    #[must_use]
    pub fn find(&self, raw: &str) -> Option<&ProjectedWord> {
        self.registry
            .id_of(raw)
            .and_then(|id| self.words.get(id.index()))
    }
}

/// Word list to tiered dataset transform
///
/// Collaborators are passed in explicitly; the pipeline holds no global state.
pub struct Pipeline<'a> {
    config: EngineConfig,
    filter: &'a dyn WordFilter,
    frequency: Option<&'a dyn FrequencySource>,
    observer: Option<&'a dyn Fn(Stage)>,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            filter: &NoFilter,
            frequency: None,
            observer: None,
        }
    }

    /// Remove blocked words before scoring
    #[must_use]
    pub fn with_filter(mut self, filter: &'a dyn WordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Augment letter rarity with frequency ranks
    #[must_use]
    pub fn with_frequency(mut self, frequency: &'a dyn FrequencySource) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Call `observer` as each stage starts
    #[must_use]
    pub fn on_stage(mut self, observer: &'a dyn Fn(Stage)) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every stage over `tokens`
    ///
    /// # Errors
    /// - `Config` if the configuration is invalid
    /// - `EmptyVocabulary` if no word survives normalization and filtering
    /// - `TierCountExceedsVocabulary` if there are fewer words than tiers
    /// - `BudgetExceeded` if the size or time budget runs out
    /// - `Internal` on an engine defect
    ///
    /// # Examples
    /// ```
    /// use lexiglyph::config::EngineConfig;
    /// use lexiglyph::pipeline::Pipeline;
    ///
    /// let config = EngineConfig { tier_count: 2, ..EngineConfig::default() };
    /// let output = Pipeline::new(config).run(["cat", "act", "cats"]).unwrap();
    ///
    /// assert_eq!(output.find("cat").unwrap().tier.value(), 1);
    /// assert_eq!(output.find("cats").unwrap().tier.value(), 2);
    /// ```
    pub fn run<I, S>(&self, tokens: I) -> Result<PipelineOutput, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.validate()?;
        let budget = RunBudget::start(self.config.max_words, self.config.time_limit());

        self.enter(Stage::Ingest);
        let mut registry = WordRegistry::with_bounds(self.config.length_bounds());
        registry.extend(tokens);
        info!(
            tokens = registry.tokens_seen(),
            words = registry.len(),
            skipped = registry.skipped(),
            "ingest complete"
        );
        budget.check(Stage::Ingest, registry.len())?;

        self.enter(Stage::Filter);
        let (registry, filtered) = registry.without(self.filter);
        info!(filtered, words = registry.len(), "filter complete");
        if registry.is_empty() {
            return Err(PipelineError::EmptyVocabulary {
                skipped: registry.skipped(),
                filtered,
            });
        }
        if self.config.tier_count > registry.len() {
            return Err(PipelineError::TierCountExceedsVocabulary {
                tier_count: self.config.tier_count,
                vocabulary: registry.len(),
            });
        }
        budget.check(Stage::Filter, registry.len())?;

        let words = registry.all_words();

        self.enter(Stage::Score);
        let started = Instant::now();
        let mut scorer = ComplexityScorer::new(self.config.weights(), self.config.length_knee);
        if let Some(frequency) = self.frequency {
            scorer = scorer.with_frequency(frequency);
        }
        let scores = score_all(&scorer, words);
        info!(
            words = scores.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scoring complete"
        );
        budget.check(Stage::Score, words.len())?;

        self.enter(Stage::Detect);
        let started = Instant::now();
        let detection = ConfusionDetector::new(self.config.min_phonetic_strength).detect(words);
        let pairs = detection.pairs;
        info!(
            pairs = pairs.len(),
            anagram = pairs.count(ConfusionKind::Anagram),
            single_edit = pairs.count(ConfusionKind::SingleEdit),
            phonetic = pairs.count(ConfusionKind::Phonetic),
            compared = detection.stats.compared,
            rejected = detection.stats.rejected,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "detection complete"
        );
        budget.check(Stage::Detect, words.len())?;

        self.enter(Stage::Tier);
        let assignment = TierAssigner::new(self.config.tier_count, self.config.confusion_weight)
            .assign(words, &scores, &pairs)?;
        info!(sizes = ?assignment.sizes(), "tiers assigned");
        budget.check(Stage::Tier, words.len())?;

        self.enter(Stage::Project);
        let projected = project(words, &scores, &assignment, &pairs)?;
        budget.check(Stage::Project, words.len())?;

        let diagnostics = Diagnostics {
            tokens_read: registry.tokens_seen(),
            skipped: registry.skipped(),
            filtered,
            vocabulary: registry.len(),
            anagram_pairs: pairs.count(ConfusionKind::Anagram),
            single_edit_pairs: pairs.count(ConfusionKind::SingleEdit),
            phonetic_pairs: pairs.count(ConfusionKind::Phonetic),
            detection: detection.stats,
            tier_sizes: assignment.sizes().to_vec(),
            elapsed: budget.elapsed(),
        };
        info!(
            words = diagnostics.vocabulary,
            pairs = diagnostics.total_pairs(),
            elapsed_ms = diagnostics.elapsed.as_millis() as u64,
            "pipeline complete"
        );

        Ok(PipelineOutput {
            registry,
            scores,
            pairs,
            assignment,
            words: projected,
            diagnostics,
        })
    }

    fn enter(&self, stage: Stage) {
        tracing::debug!(%stage, "stage started");
        if let Some(observer) = self.observer {
            observer(stage);
        }
    }
}
