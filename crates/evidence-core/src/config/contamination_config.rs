use serde::{Deserialize, Serialize};

use super::defaults;

/// Contamination detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContaminationConfig {
    /// Labels that mark a `Label: value` line as metadata rather than speech.
    pub metadata_labels: Vec<String>,
    /// Maximum number of flagged quotes kept as diagnostic examples.
    pub max_examples: usize,
    /// Examples are truncated to this many characters.
    pub example_max_chars: usize,
}

impl Default for ContaminationConfig {
    fn default() -> Self {
        Self {
            metadata_labels: defaults::DEFAULT_METADATA_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_examples: defaults::DEFAULT_MAX_CONTAMINATION_EXAMPLES,
            example_max_chars: defaults::DEFAULT_EXAMPLE_MAX_CHARS,
        }
    }
}
