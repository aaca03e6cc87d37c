//! Structured log events for key validation operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the outcome of validating one persona.
pub fn validation_completed(persona: &str, status: &str, evidence_total: usize, score: f64) {
    tracing::info!(
        event = "validation_completed",
        persona = %persona,
        status = %status,
        evidence_total = evidence_total,
        evidence_match_score = score,
        "persona validation completed"
    );
}

/// Log an evidence quote that could not be located in the source.
pub fn evidence_unmatched(persona: &str, field: &str, index: usize) {
    tracing::debug!(
        event = "evidence_unmatched",
        persona = %persona,
        field = %field,
        index = index,
        "evidence quote not found in source"
    );
}

/// Log contamination findings for a batch.
pub fn contamination_detected(flagged: usize) {
    tracing::warn!(
        event = "contamination_detected",
        flagged = flagged,
        "evidence contains questions or metadata lines"
    );
}

/// Log evidence attributed to a speaker absent from the transcript.
pub fn speaker_mismatch_detected(field: &str, speaker: &str) {
    tracing::warn!(
        event = "speaker_mismatch_detected",
        field = %field,
        speaker = %speaker,
        "evidence speaker not present in transcript"
    );
}

/// Log removal of researcher-sourced evidence from a trait.
pub fn researcher_evidence_removed(persona: &str, field: &str, removed: usize) {
    tracing::info!(
        event = "researcher_evidence_removed",
        persona = %persona,
        field = %field,
        removed = removed,
        "researcher-sourced evidence removed"
    );
}

/// Log an age range derived from the source text.
pub fn age_range_backfilled(persona: &str, age_range: &str, samples: usize) {
    tracing::info!(
        event = "age_range_backfilled",
        persona = %persona,
        age_range = %age_range,
        samples = samples,
        "demographic age range backfilled"
    );
}

/// Log a degradation: a stage failed and a fallback result was used.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
