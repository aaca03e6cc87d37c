use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::evidence_match::{EvidenceMatch, MatchType};

/// Tally of match types across all validated evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchCounts {
    pub verbatim: usize,
    pub normalized: usize,
    pub no_match: usize,
}

impl MatchCounts {
    pub fn get(&self, match_type: MatchType) -> usize {
        match match_type {
            MatchType::Verbatim => self.verbatim,
            MatchType::Normalized => self.normalized,
            MatchType::NoMatch => self.no_match,
        }
    }

    pub fn record(&mut self, match_type: MatchType) {
        match match_type {
            MatchType::Verbatim => self.verbatim += 1,
            MatchType::Normalized => self.normalized += 1,
            MatchType::NoMatch => self.no_match += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.verbatim + self.normalized + self.no_match
    }
}

/// A quote cited more than once within one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DuplicateQuote {
    pub field: String,
    pub quote: String,
    pub occurrences: usize,
}

/// A quote cited as evidence for more than one trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrossTraitReuse {
    pub quote: String,
    /// Sorted, unique field names.
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DuplicationReport {
    pub duplicates: Vec<DuplicateQuote>,
    pub cross_trait_reuse: Vec<CrossTraitReuse>,
}

/// Evidence whose declared speaker never speaks in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeakerMismatch {
    pub field: String,
    pub quote: String,
    pub speaker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeakerCheckReport {
    pub speaker_mismatches: Vec<SpeakerMismatch>,
}

/// Which heuristic flagged a quote as contamination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationKind {
    MetadataLabel,
    Question,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContaminationReport {
    /// Number of flagged quotes.
    pub metadata_or_question: usize,
    /// Up to a configured number of flagged quotes, truncated.
    pub examples: Vec<String>,
}

/// Aggregate of every detector's findings for one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationSummary {
    pub counts: MatchCounts,
    pub total: usize,
    pub duplication: DuplicationReport,
    pub speaker_check: SpeakerCheckReport,
    pub contamination: ContaminationReport,
}

impl ValidationSummary {
    /// Share of evidence that could not be located; 0.0 when there is none.
    pub fn no_match_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.counts.no_match as f64 / self.total as f64
        }
    }

    /// Whether any finding that downgrades a persona to SOFT_FAIL is present.
    pub fn has_soft_findings(&self) -> bool {
        self.contamination.metadata_or_question > 0
            || !self.duplication.cross_trait_reuse.is_empty()
            || !self.speaker_check.speaker_mismatches.is_empty()
    }
}

/// Tiered validation outcome. Only meaningful together with the summary it
/// was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Pass,
    SoftFail,
    HardFail,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::SoftFail => "SOFT_FAIL",
            ValidationStatus::HardFail => "HARD_FAIL",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence signals derived from a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceComponents {
    /// Weighted match quality in [0.0, 1.0].
    pub evidence_match_score: f64,
}

/// Everything one validation call produces for a persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub persona_name: String,
    pub matches: Vec<EvidenceMatch>,
    pub summary: ValidationSummary,
    pub status: ValidationStatus,
    pub confidence: ConfidenceComponents,
}
