//! ValidationEngine: runs the matcher and all detectors for a persona,
//! summarizes them into a status and confidence score, and prepares
//! personas for display.

use std::panic::{self, AssertUnwindSafe};

use evidence_core::config::EvidenceConfig;
use evidence_core::errors::EvidenceResult;
use evidence_core::models::{
    ConfidenceComponents, ContaminationReport, EvidenceMatch, MatchType, Persona, ValidationInput,
    ValidationReport, ValidationStatus, ValidationSummary,
};
use evidence_core::traits::IEvidenceValidator;
use evidence_observability::events;
use rayon::prelude::*;
use serde_json::Value;

use crate::detection::{check_speaker_consistency, detect_duplication, ContaminationDetector};
use crate::filter::{FilteredPersona, PersonaFilter, RemovedEvidence};
use crate::matching::EvidenceMatcher;
use crate::summary;

/// A persona ready for display together with its validation report.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPersona {
    pub persona: Persona,
    pub report: ValidationReport,
    pub removed_evidence: Vec<RemovedEvidence>,
    pub age_range_backfilled: Option<String>,
}

/// Evidence validation engine.
///
/// Holds no per-call state, so one engine can validate many personas
/// concurrently.
pub struct ValidationEngine {
    config: EvidenceConfig,
    matcher: EvidenceMatcher,
    contamination: ContaminationDetector,
    filter: PersonaFilter,
}

impl ValidationEngine {
    pub fn new(config: EvidenceConfig) -> Self {
        Self {
            matcher: EvidenceMatcher::new(config.matching.clone()),
            contamination: ContaminationDetector::new(&config.contamination),
            filter: PersonaFilter::new(config.filter.clone()),
            config,
        }
    }

    /// Replace the contamination detector, e.g. to register extra heuristics.
    pub fn with_contamination_detector(mut self, detector: ContaminationDetector) -> Self {
        self.contamination = detector;
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EvidenceConfig {
        &self.config
    }

    pub fn matcher(&self) -> &EvidenceMatcher {
        &self.matcher
    }

    /// Validate one persona against its sources.
    ///
    /// Never fails. If a stage panics the report degrades to SOFT_FAIL with
    /// an empty summary rather than silently passing.
    pub fn validate(&self, persona: &Persona, input: &ValidationInput<'_>) -> ValidationReport {
        let _span = tracing::debug_span!("validate_persona", persona = %persona.name).entered();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(persona, input)));

        let report = match outcome {
            Ok(report) => report,
            Err(payload) => {
                let failure = panic_message(payload.as_ref());
                events::degradation_triggered("validation_summary", &failure, "SOFT_FAIL");
                ValidationReport {
                    persona_name: persona.name.clone(),
                    matches: Vec::new(),
                    summary: ValidationSummary::default(),
                    status: ValidationStatus::SoftFail,
                    confidence: ConfidenceComponents::default(),
                }
            }
        };

        events::validation_completed(
            &report.persona_name,
            report.status.as_str(),
            report.summary.total,
            report.confidence.evidence_match_score,
        );
        report
    }

    /// Validate independent personas in parallel. Output keeps input order.
    pub fn validate_batch(&self, personas: &[Persona], input: &ValidationInput<'_>) -> Vec<ValidationReport> {
        personas
            .par_iter()
            .map(|persona| self.validate(persona, input))
            .collect()
    }

    /// Parse extraction output once, then validate it.
    ///
    /// A wrong input shape is returned as an error; callers treat it as
    /// "validation unavailable" and still show the persona.
    pub fn validate_json(&self, persona: Value, input: &ValidationInput<'_>) -> EvidenceResult<ValidationReport> {
        let persona = Persona::from_value(persona)?;
        Ok(self.validate(&persona, input))
    }

    /// Filter a persona for display, then validate the filtered copy.
    ///
    /// Never fails. If the filter panics the persona is shown unfiltered.
    pub fn prepare_for_display(&self, persona: &Persona, input: &ValidationInput<'_>) -> DisplayPersona {
        let filtered = filter_or_unfiltered(persona, || self.filter.apply(persona, input));
        let FilteredPersona {
            persona,
            removed_evidence,
            age_range_backfilled,
        } = filtered;
        let report = self.validate(&persona, input);
        DisplayPersona {
            persona,
            report,
            removed_evidence,
            age_range_backfilled,
        }
    }

    /// Contamination findings across a whole batch of personas.
    pub fn batch_contamination(&self, personas: &[Persona]) -> ContaminationReport {
        let report = self.contamination.detect(personas);
        if report.metadata_or_question > 0 {
            events::contamination_detected(report.metadata_or_question);
        }
        report
    }

    fn run_stages(&self, persona: &Persona, input: &ValidationInput<'_>) -> ValidationReport {
        let matches = self.matcher.match_persona(persona, input);
        log_unmatched(&persona.name, &matches);

        let duplication = detect_duplication(persona);
        let speaker_check = check_speaker_consistency(persona, input.transcript);
        for mismatch in &speaker_check.speaker_mismatches {
            events::speaker_mismatch_detected(&mismatch.field, &mismatch.speaker);
        }
        let contamination = self.contamination.detect_one(persona);
        if contamination.metadata_or_question > 0 {
            events::contamination_detected(contamination.metadata_or_question);
        }

        let summary = summary::summarize(&matches, duplication, speaker_check, contamination);
        let status = summary::compute_status(&summary, &self.config.scoring);
        let confidence = summary::compute_confidence_components(&summary, &self.config.scoring);

        ValidationReport {
            persona_name: persona.name.clone(),
            matches,
            summary,
            status,
            confidence,
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(EvidenceConfig::default())
    }
}

impl IEvidenceValidator for ValidationEngine {
    fn validate(&self, persona: &Persona, input: &ValidationInput<'_>) -> EvidenceResult<ValidationReport> {
        Ok(ValidationEngine::validate(self, persona, input))
    }
}

fn log_unmatched(persona: &str, matches: &[EvidenceMatch]) {
    for m in matches.iter().filter(|m| m.match_type == MatchType::NoMatch) {
        events::evidence_unmatched(persona, &m.field, m.index);
    }
}

/// Run the display filter; if it panics, fall back to the persona as given.
fn filter_or_unfiltered(persona: &Persona, apply: impl FnOnce() -> FilteredPersona) -> FilteredPersona {
    panic::catch_unwind(AssertUnwindSafe(apply)).unwrap_or_else(|payload| {
        let failure = panic_message(payload.as_ref());
        events::degradation_triggered("persona_filter", &failure, "unfiltered");
        FilteredPersona {
            persona: persona.clone(),
            removed_evidence: Vec::new(),
            age_range_backfilled: None,
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
