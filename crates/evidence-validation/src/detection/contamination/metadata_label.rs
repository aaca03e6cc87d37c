//! `Label: value` lines whose label is demographic or interview metadata.

use evidence_core::models::ContaminationKind;

use super::ContaminationHeuristic;

/// Flags quotes whose text before the first colon contains a metadata label
/// (case-insensitive substring), e.g. "Role: Product Manager".
pub struct MetadataLabelHeuristic {
    labels: Vec<String>,
}

impl MetadataLabelHeuristic {
    pub fn new(labels: &[String]) -> Self {
        Self {
            labels: labels
                .iter()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

impl ContaminationHeuristic for MetadataLabelHeuristic {
    fn name(&self) -> &'static str {
        "metadata_label"
    }

    fn kind(&self) -> ContaminationKind {
        ContaminationKind::MetadataLabel
    }

    fn flags(&self, quote: &str) -> bool {
        let Some((prefix, _)) = quote.split_once(':') else {
            return false;
        };
        let prefix = prefix.to_lowercase();
        self.labels.iter().any(|label| prefix.contains(label.as_str()))
    }
}
