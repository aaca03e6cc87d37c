use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence-aware persona filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Speaker labels containing any of these words are treated as the
    /// research side of the interview.
    pub researcher_labels: Vec<String>,
    /// Fill an unknown demographic age range from ages found in the source.
    pub age_backfill_enabled: bool,
    /// Half-width of a derived age range.
    pub age_window: u32,
    /// Ages spread at most this far are reported as min-max.
    pub age_spread_tolerance: u32,
    /// Fewest normalized tokens a quote needs before a normalized (rather
    /// than verbatim) hit in a researcher turn removes it.
    pub min_near_verbatim_tokens: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            researcher_labels: defaults::DEFAULT_RESEARCHER_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            age_backfill_enabled: defaults::DEFAULT_AGE_BACKFILL_ENABLED,
            age_window: defaults::DEFAULT_AGE_WINDOW,
            age_spread_tolerance: defaults::DEFAULT_AGE_SPREAD_TOLERANCE,
            min_near_verbatim_tokens: defaults::DEFAULT_MIN_NEAR_VERBATIM_TOKENS,
        }
    }
}
