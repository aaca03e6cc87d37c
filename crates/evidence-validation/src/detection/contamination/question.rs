//! Interviewer questions cited as evidence.

use evidence_core::models::ContaminationKind;

use super::ContaminationHeuristic;

/// Flags quotes that end with a question mark once trimmed.
pub struct QuestionHeuristic;

impl ContaminationHeuristic for QuestionHeuristic {
    fn name(&self) -> &'static str {
        "question"
    }

    fn kind(&self) -> ContaminationKind {
        ContaminationKind::Question
    }

    fn flags(&self, quote: &str) -> bool {
        quote.trim_end().ends_with('?')
    }
}
