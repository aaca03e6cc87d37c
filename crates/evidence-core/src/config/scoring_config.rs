use serde::{Deserialize, Serialize};

use super::defaults;

/// Status tiers and confidence weighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// `no_match / total` strictly above this is a HARD_FAIL.
    pub hard_fail_no_match_ratio: f64,
    pub verbatim_weight: f64,
    pub normalized_weight: f64,
    pub no_match_weight: f64,
    /// Decimal places kept in the evidence match score.
    pub score_precision: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hard_fail_no_match_ratio: defaults::DEFAULT_HARD_FAIL_NO_MATCH_RATIO,
            verbatim_weight: defaults::DEFAULT_VERBATIM_WEIGHT,
            normalized_weight: defaults::DEFAULT_NORMALIZED_WEIGHT,
            no_match_weight: defaults::DEFAULT_NO_MATCH_WEIGHT,
            score_precision: defaults::DEFAULT_SCORE_PRECISION,
        }
    }
}
