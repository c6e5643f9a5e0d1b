//! Engine configuration
//!
//! One flat set of options, loadable from TOML and overridable from the CLI.
//! Keys are accepted in `snake_case` and in the camelCase spelling used by
//! game tooling (`tierCount`, `minPhoneticStrength`, ...).

use crate::core::LengthBounds;
use crate::scoring::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// All recognized engine options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of difficulty tiers (>= 1)
    #[serde(alias = "tierCount")]
    pub tier_count: usize,
    #[serde(alias = "lengthWeight")]
    pub length_weight: f64,
    #[serde(alias = "rarityWeight")]
    pub rarity_weight: f64,
    #[serde(alias = "structureWeight")]
    pub structure_weight: f64,
    /// Multiplier applied to the summed confusion strengths of a word
    #[serde(alias = "confusionWeight")]
    pub confusion_weight: f64,
    /// Floor for phonetic pair strength, in [0, 1)
    #[serde(alias = "minPhoneticStrength")]
    pub min_phonetic_strength: f64,
    /// Length past which the length term grows logarithmically
    #[serde(alias = "lengthKnee")]
    pub length_knee: usize,
    #[serde(alias = "minLength")]
    pub min_length: usize,
    #[serde(alias = "maxLength")]
    pub max_length: Option<usize>,
    /// Abort runs whose vocabulary exceeds this many words
    #[serde(alias = "maxWords")]
    pub max_words: Option<usize>,
    /// Abort runs that take longer than this many seconds
    #[serde(alias = "timeLimitSecs")]
    pub time_limit_secs: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tier_count: 3,
            length_weight: 1.0,
            rarity_weight: 1.5,
            structure_weight: 1.0,
            confusion_weight: 0.5,
            min_phonetic_strength: 0.25,
            length_knee: 8,
            min_length: 1,
            max_length: None,
            max_words: None,
            time_limit_secs: None,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document; missing keys take their defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every option against its allowed range
    ///
    /// # Errors
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tier_count == 0 {
            return Err(invalid("tier_count", "must be at least 1"));
        }

        for (key, value) in [
            ("length_weight", self.length_weight),
            ("rarity_weight", self.rarity_weight),
            ("structure_weight", self.structure_weight),
            ("confusion_weight", self.confusion_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    key,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        if !(0.0..1.0).contains(&self.min_phonetic_strength) {
            return Err(invalid(
                "min_phonetic_strength",
                format!("must be in [0, 1), got {}", self.min_phonetic_strength),
            ));
        }

        if self.length_knee == 0 {
            return Err(invalid("length_knee", "must be at least 1"));
        }

        if self.min_length == 0 {
            return Err(invalid("min_length", "must be at least 1"));
        }

        if let Some(max) = self.max_length {
            if max < self.min_length {
                return Err(invalid(
                    "max_length",
                    format!("{max} is below min_length {}", self.min_length),
                ));
            }
        }

        if let Some(secs) = self.time_limit_secs {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(invalid(
                    "time_limit_secs",
                    format!("must be a positive number, got {secs}"),
                ));
            }
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(invalid(
                    "time_limit_secs",
                    format!("{secs} is too large for a duration"),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            length: self.length_weight,
            rarity: self.rarity_weight,
            structure: self.structure_weight,
        }
    }

    #[must_use]
    pub const fn length_bounds(&self) -> LengthBounds {
        LengthBounds::new(self.min_length, self.max_length)
    }

    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

fn invalid(key: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        message: message.into(),
    }
}
