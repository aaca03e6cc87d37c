//! Cross-check declared evidence speakers against transcript speakers.

use std::collections::HashSet;

use evidence_core::models::{Persona, SpeakerCheckReport, SpeakerMismatch, StructuredTranscript};

/// Record every evidence item whose declared speaker never speaks in the
/// transcript.
///
/// Without a transcript (or with an empty one) the check is inconclusive and
/// returns no mismatches. Items without a declared speaker are skipped.
/// Labels are compared trimmed and case-insensitively.
pub fn check_speaker_consistency(
    persona: &Persona,
    transcript: Option<&StructuredTranscript>,
) -> SpeakerCheckReport {
    let Some(transcript) = transcript.filter(|t| !t.is_empty()) else {
        return SpeakerCheckReport::default();
    };

    let speakers: HashSet<String> = transcript
        .speakers()
        .into_iter()
        .map(canonical_label)
        .collect();

    let speaker_mismatches = persona
        .core_evidence()
        .filter_map(|(field, _, item)| {
            let speaker = item.speaker.as_deref()?;
            if speakers.contains(&canonical_label(speaker)) {
                None
            } else {
                Some(SpeakerMismatch {
                    field: field.to_string(),
                    quote: item.quote.clone(),
                    speaker: speaker.to_string(),
                })
            }
        })
        .collect();

    SpeakerCheckReport { speaker_mismatches }
}

fn canonical_label(label: &str) -> String {
    label.trim().to_lowercase()
}
