//! Engine configuration with compiled defaults and TOML overrides.

pub mod contamination_config;
pub mod defaults;
pub mod filter_config;
pub mod matching_config;
pub mod observability_config;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use contamination_config::ContaminationConfig;
pub use filter_config::FilterConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use crate::constants::MAX_PLAUSIBLE_AGE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Every field has a compiled default, so an empty TOML document is a
/// complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvidenceConfig {
    pub matching: MatchingConfig,
    pub scoring: ScoringConfig,
    pub contamination: ContaminationConfig,
    pub filter: FilterConfig,
    pub observability: ObservabilityConfig,
}

impl EvidenceConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            (
                "matching.fuzzy_overlap_threshold",
                self.matching.fuzzy_overlap_threshold,
            ),
            (
                "scoring.hard_fail_no_match_ratio",
                self.scoring.hard_fail_no_match_ratio,
            ),
            ("scoring.verbatim_weight", self.scoring.verbatim_weight),
            ("scoring.normalized_weight", self.scoring.normalized_weight),
            ("scoring.no_match_weight", self.scoring.no_match_weight),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        let weights = &self.scoring;
        if !(weights.verbatim_weight >= weights.normalized_weight
            && weights.normalized_weight >= weights.no_match_weight)
        {
            return Err(ConfigError::ValidationFailed {
                field: "scoring".to_string(),
                message: "weights must satisfy verbatim >= normalized >= no_match".to_string(),
            });
        }

        if self.contamination.max_examples == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "contamination.max_examples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.contamination.example_max_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "contamination.example_max_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let age_fields = [
            ("filter.age_window", self.filter.age_window),
            ("filter.age_spread_tolerance", self.filter.age_spread_tolerance),
        ];
        for (field, value) in age_fields {
            if value > MAX_PLAUSIBLE_AGE {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be at most {MAX_PLAUSIBLE_AGE}"),
                });
            }
        }
        Ok(())
    }
}
