//! Whole-run size and time budget

use super::error::PipelineError;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ingest,
    Filter,
    Score,
    Detect,
    Tier,
    Project,
}

impl Stage {
    pub const ALL: [Self; 6] = [
        Self::Ingest,
        Self::Filter,
        Self::Score,
        Self::Detect,
        Self::Tier,
        Self::Project,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ingest => "ingest",
            Self::Filter => "filter",
            Self::Score => "score",
            Self::Detect => "detect",
            Self::Tier => "tier",
            Self::Project => "project",
        }
    }

    /// Short present-tense description for progress displays
    #[must_use]
    pub const fn activity(self) -> &'static str {
        match self {
            Self::Ingest => "Reading words",
            Self::Filter => "Applying blocklist",
            Self::Score => "Scoring complexity",
            Self::Detect => "Detecting confusion pairs",
            Self::Tier => "Assigning tiers",
            Self::Project => "Assembling results",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse cancellation checked between stages
///
/// Exceeding either limit aborts the run; nothing computed so far is kept.
#[derive(Debug, Clone, Copy)]
pub struct RunBudget {
    max_words: Option<usize>,
    time_limit: Option<Duration>,
    started: Instant,
}

impl RunBudget {
    /// Start the clock
    #[must_use]
    pub fn start(max_words: Option<usize>, time_limit: Option<Duration>) -> Self {
        Self {
            max_words,
            time_limit,
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn unlimited() -> Self {
        Self::start(None, None)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Verify the run is still within budget after `stage`
    ///
    /// # Errors
    /// Returns `PipelineError::BudgetExceeded` when the vocabulary is larger
    /// than `max_words` or the time limit has passed.
    pub fn check(&self, stage: Stage, words: usize) -> Result<(), PipelineError> {
        let elapsed = self.elapsed();
        let too_many = self.max_words.is_some_and(|max| words > max);
        let too_slow = self.time_limit.is_some_and(|limit| elapsed > limit);

        if too_many || too_slow {
            tracing::warn!(
                %stage,
                words,
                elapsed_ms = elapsed.as_millis() as u64,
                "run budget exceeded"
            );
            return Err(PipelineError::BudgetExceeded {
                stage,
                elapsed,
                words,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_budget_never_trips() {
        let budget = RunBudget::unlimited();
        for stage in Stage::ALL {
            assert!(budget.check(stage, usize::MAX).is_ok());
        }
    }

    #[test]
    fn word_limit_is_inclusive() {
        let budget = RunBudget::start(Some(3), None);
        assert!(budget.check(Stage::Ingest, 3).is_ok());
        assert!(matches!(
            budget.check(Stage::Ingest, 4),
            Err(PipelineError::BudgetExceeded {
                stage: Stage::Ingest,
                words: 4,
                ..
            })
        ));
    }

    #[test]
    fn zero_time_limit_trips_once_time_passes() {
        let budget = RunBudget::start(None, Some(Duration::ZERO));
        std::thread::sleep(Duration::from_millis(2));
        assert!(budget.check(Stage::Score, 1).is_err());
    }

    #[test]
    fn stage_names() {
        let names: Vec<String> = Stage::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["ingest", "filter", "score", "detect", "tier", "project"]
        );
    }
}
