//! Aggregates detector output into a summary, a tiered status, and a
//! confidence score.

use evidence_core::config::ScoringConfig;
use evidence_core::models::{
    ConfidenceComponents, ContaminationReport, DuplicationReport, EvidenceMatch, MatchCounts,
    SpeakerCheckReport, ValidationStatus, ValidationSummary,
};

/// Tally match types and bundle the other detectors' findings.
pub fn summarize(
    matches: &[EvidenceMatch],
    duplication: DuplicationReport,
    speaker_check: SpeakerCheckReport,
    contamination: ContaminationReport,
) -> ValidationSummary {
    let mut counts = MatchCounts::default();
    for m in matches {
        counts.record(m.match_type);
    }
    ValidationSummary {
        counts,
        total: matches.len(),
        duplication,
        speaker_check,
        contamination,
    }
}

/// Apply the tiered status rule.
///
/// HARD_FAIL when the unmatched share exceeds the configured ratio;
/// otherwise SOFT_FAIL when contamination, cross-trait reuse, or a speaker
/// mismatch is present; otherwise PASS. Same-field duplicates alone do not
/// downgrade the status.
pub fn compute_status(summary: &ValidationSummary, config: &ScoringConfig) -> ValidationStatus {
    if summary.total > 0 && summary.no_match_ratio() > config.hard_fail_no_match_ratio {
        ValidationStatus::HardFail
    } else if summary.has_soft_findings() {
        ValidationStatus::SoftFail
    } else {
        ValidationStatus::Pass
    }
}

/// Weighted average of match quality, rounded to the configured precision.
///
/// A summary with no evidence scores 0.0: nothing was verified.
pub fn compute_confidence_components(
    summary: &ValidationSummary,
    config: &ScoringConfig,
) -> ConfidenceComponents {
    let counts = &summary.counts;
    let total = counts.total();
    if total == 0 {
        return ConfidenceComponents::default();
    }
    let weighted = counts.verbatim as f64 * config.verbatim_weight
        + counts.normalized as f64 * config.normalized_weight
        + counts.no_match as f64 * config.no_match_weight;
    let score = (weighted / total as f64).clamp(0.0, 1.0);

    ConfidenceComponents {
        evidence_match_score: round_to(score, config.score_precision),
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(12) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_places() {
        assert_eq!(round_to(0.66666, 3), 0.667);
        assert_eq!(round_to(0.9, 3), 0.9);
    }
}
