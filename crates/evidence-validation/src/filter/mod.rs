//! Evidence-aware persona filter, applied before a persona is shown.
//!
//! Strips evidence the researcher said rather than the participant, and
//! backfills an unknown demographic age range from the source text. It
//! never rewrites trait values and never overwrites a present demographic.

pub mod age_backfill;
pub mod researcher_evidence;

use evidence_core::config::FilterConfig;
use evidence_core::models::{Demographics, Persona, ValidationInput};
use evidence_observability::events;

pub use age_backfill::{derive_age_range, extract_ages};
pub use researcher_evidence::{is_researcher_label, strip_researcher_evidence, RemovedEvidence};

use crate::matching::index::TranscriptIndex;

/// Result of filtering one persona.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredPersona {
    pub persona: Persona,
    pub removed_evidence: Vec<RemovedEvidence>,
    /// The age range written by backfill, if any.
    pub age_range_backfilled: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PersonaFilter {
    config: FilterConfig,
}

impl PersonaFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Produce the externally visible copy of a persona.
    pub fn apply(&self, persona: &Persona, input: &ValidationInput<'_>) -> FilteredPersona {
        let (mut filtered, removed_evidence) = match input.transcript {
            Some(transcript) if !transcript.is_empty() => {
                let index = TranscriptIndex::build(transcript);
                strip_researcher_evidence(persona, &index, &self.config)
            }
            _ => (persona.clone(), Vec::new()),
        };

        for field in unique_fields(&removed_evidence) {
            let count = removed_evidence.iter().filter(|r| r.field == field).count();
            events::researcher_evidence_removed(&filtered.name, field, count);
        }

        let age_range_backfilled = if self.config.age_backfill_enabled {
            self.backfill_age_range(&mut filtered, input)
        } else {
            None
        };

        FilteredPersona {
            persona: filtered,
            removed_evidence,
            age_range_backfilled,
        }
    }

    /// Fill the age range when it is missing or unknown.
    ///
    /// Scans the raw source text when present, otherwise the participant
    /// side of the transcript. Returns the range that was written.
    pub fn backfill_age_range(&self, persona: &mut Persona, input: &ValidationInput<'_>) -> Option<String> {
        let known = persona
            .demographics
            .as_ref()
            .is_some_and(|d| !d.age_range_is_unknown());
        if known {
            return None;
        }

        let text = match (input.source_text, input.transcript) {
            (Some(text), _) if !text.is_empty() => text.to_string(),
            (_, Some(transcript)) => transcript
                .segments
                .iter()
                .filter(|s| !is_researcher_label(&s.speaker, &self.config))
                .map(|s| s.dialogue.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            _ => return None,
        };

        let ages = extract_ages(&text);
        let range = derive_age_range(&ages, &self.config)?;
        persona
            .demographics
            .get_or_insert_with(Demographics::default)
            .age_range = Some(range.clone());
        events::age_range_backfilled(&persona.name, &range, ages.len());
        Some(range)
    }
}

fn unique_fields(removed: &[RemovedEvidence]) -> Vec<&str> {
    let mut fields: Vec<&str> = Vec::new();
    for r in removed {
        if !fields.contains(&r.field.as_str()) {
            fields.push(&r.field);
        }
    }
    fields
}
