//! Pipeline errors

use super::budget::Stage;
use crate::config::ConfigError;
use crate::tiers::TierError;
use std::time::Duration;

/// Fatal outcomes of a pipeline run
///
/// Any of these means no output document is produced.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "vocabulary is empty after normalization and filtering \
         ({skipped} tokens skipped, {filtered} words filtered)"
    )]
    EmptyVocabulary { skipped: usize, filtered: usize },

    #[error("tier count {tier_count} exceeds vocabulary size {vocabulary}")]
    TierCountExceedsVocabulary { tier_count: usize, vocabulary: usize },

    #[error("run budget exceeded during {stage} stage after {elapsed:?} ({words} words)")]
    BudgetExceeded {
        stage: Stage,
        elapsed: Duration,
        words: usize,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Whether the error is a defect in the engine rather than bad input
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl From<TierError> for PipelineError {
    fn from(e: TierError) -> Self {
        match e {
            TierError::ZeroTiers | TierError::TierCountOverflow(_) => {
                Self::Config(ConfigError::InvalidValue {
                    key: "tier_count",
                    message: e.to_string(),
                })
            }
            TierError::TooManyTiers {
                tier_count,
                vocabulary,
            } => Self::TierCountExceedsVocabulary {
                tier_count,
                vocabulary,
            },
            TierError::MissingScores { .. } | TierError::UnknownWord { .. } => {
                Self::Internal(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_errors_map_to_pipeline_errors() {
        assert!(matches!(
            PipelineError::from(TierError::ZeroTiers),
            PipelineError::Config(_)
        ));
        assert!(matches!(
            PipelineError::from(TierError::TooManyTiers {
                tier_count: 4,
                vocabulary: 2
            }),
            PipelineError::TierCountExceedsVocabulary {
                tier_count: 4,
                vocabulary: 2
            }
        ));
        assert!(PipelineError::from(TierError::MissingScores { words: 2, scores: 1 }).is_internal());
    }

    #[test]
    fn messages_carry_counts() {
        let e = PipelineError::EmptyVocabulary {
            skipped: 2,
            filtered: 1,
        };
        let message = e.to_string();
        assert!(message.contains("2 tokens skipped"));
        assert!(message.contains("1 words filtered"));
    }
}
