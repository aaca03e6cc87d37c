use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum share of distinct quote tokens that must appear in the source
    /// for a fuzzy match.
    pub fuzzy_overlap_threshold: f64,
    /// Quotes with fewer distinct tokens never fuzzy-match.
    pub min_fuzzy_tokens: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_overlap_threshold: defaults::DEFAULT_FUZZY_OVERLAP_THRESHOLD,
            min_fuzzy_tokens: defaults::DEFAULT_MIN_FUZZY_TOKENS,
        }
    }
}
