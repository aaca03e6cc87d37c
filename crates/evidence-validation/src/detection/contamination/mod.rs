//! Contamination detection: evidence that is really an interviewer question
//! or a metadata line rather than something the participant said.
//!
//! Heuristics form an ordered strategy list; the first one that flags a
//! quote classifies it. New heuristics are registered with
//! [`ContaminationDetector::with_heuristic`] without touching the detector.

pub mod metadata_label;
pub mod question;

use evidence_core::config::ContaminationConfig;
use evidence_core::models::{ContaminationKind, ContaminationReport, Persona};

pub use metadata_label::MetadataLabelHeuristic;
pub use question::QuestionHeuristic;

/// A single text-shape predicate over an evidence quote.
pub trait ContaminationHeuristic: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Classification reported when this heuristic flags a quote.
    fn kind(&self) -> ContaminationKind;

    fn flags(&self, quote: &str) -> bool;
}

/// Runs the heuristic list over persona evidence.
pub struct ContaminationDetector {
    heuristics: Vec<Box<dyn ContaminationHeuristic>>,
    max_examples: usize,
    example_max_chars: usize,
}

impl ContaminationDetector {
    /// Detector with the default heuristics: metadata label, then question.
    pub fn new(config: &ContaminationConfig) -> Self {
        Self {
            heuristics: vec![
                Box::new(MetadataLabelHeuristic::new(&config.metadata_labels)),
                Box::new(QuestionHeuristic),
            ],
            max_examples: config.max_examples,
            example_max_chars: config.example_max_chars,
        }
    }

    /// Append a heuristic; it runs after the ones already registered.
    pub fn with_heuristic(mut self, heuristic: Box<dyn ContaminationHeuristic>) -> Self {
        self.heuristics.push(heuristic);
        self
    }

    pub fn heuristic_names(&self) -> Vec<&'static str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// Classify one quote; the first flagging heuristic wins.
    pub fn classify(&self, quote: &str) -> Option<ContaminationKind> {
        self.heuristics
            .iter()
            .find(|h| h.flags(quote))
            .map(|h| h.kind())
    }

    /// Scan the core-field evidence of every persona in the batch.
    pub fn detect(&self, personas: &[Persona]) -> ContaminationReport {
        let mut report = ContaminationReport::default();
        for persona in personas {
            self.scan(persona, &mut report);
        }
        report
    }

    /// Scan a single persona.
    pub fn detect_one(&self, persona: &Persona) -> ContaminationReport {
        let mut report = ContaminationReport::default();
        self.scan(persona, &mut report);
        report
    }

    fn scan(&self, persona: &Persona, report: &mut ContaminationReport) {
        for (_, _, item) in persona.core_evidence() {
            if self.classify(&item.quote).is_none() {
                continue;
            }
            report.metadata_or_question += 1;
            if report.examples.len() < self.max_examples {
                report
                    .examples
                    .push(item.quote.chars().take(self.example_max_chars).collect());
            }
        }
    }
}

impl Default for ContaminationDetector {
    fn default() -> Self {
        Self::new(&ContaminationConfig::default())
    }
}

/// Detect contamination across a batch of personas.
pub fn detect_contamination(personas: &[Persona], config: &ContaminationConfig) -> ContaminationReport {
    ContaminationDetector::new(config).detect(personas)
}
