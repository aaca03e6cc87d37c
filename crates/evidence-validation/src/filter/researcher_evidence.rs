//! Attribution-based removal of evidence spoken by the research side.

use evidence_core::config::FilterConfig;
use evidence_core::models::Persona;

use crate::matching::index::{IndexedSegment, TranscriptIndex};
use crate::normalize::normalize;

/// Evidence removed from one trait field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEvidence {
    pub field: String,
    pub quote: String,
    pub speaker: String,
}

/// Whether a speaker label marks the research side of the interview.
pub fn is_researcher_label(speaker: &str, config: &FilterConfig) -> bool {
    let speaker = speaker.to_lowercase();
    config
        .researcher_labels
        .iter()
        .any(|label| !label.is_empty() && speaker.contains(&label.to_lowercase()))
}

/// Drop every evidence item whose quote occurs, verbatim or after
/// normalization, inside a researcher segment.
///
/// Occurrences must sit on word boundaries, so "no" is not found inside
/// "know". A normalized hit only counts for quotes of at least
/// `min_near_verbatim_tokens` tokens.
///
/// Applies to every trait of the persona. Returns the trimmed copy and what
/// was removed; the input is never mutated.
pub fn strip_researcher_evidence(
    persona: &Persona,
    index: &TranscriptIndex<'_>,
    config: &FilterConfig,
) -> (Persona, Vec<RemovedEvidence>) {
    let researcher_segments: Vec<&IndexedSegment<'_>> = index
        .segments()
        .iter()
        .filter(|s| is_researcher_label(s.speaker, config))
        .collect();

    let mut filtered = persona.clone();
    let mut removed = Vec::new();
    if researcher_segments.is_empty() {
        return (filtered, removed);
    }

    for (field, persona_trait) in filtered.traits.iter_mut() {
        persona_trait.evidence.retain(|item| {
            match researcher_source(&item.quote, &researcher_segments, config) {
                Some(speaker) => {
                    removed.push(RemovedEvidence {
                        field: field.clone(),
                        quote: item.quote.clone(),
                        speaker: speaker.to_string(),
                    });
                    false
                }
                None => true,
            }
        });
    }

    (filtered, removed)
}

fn researcher_source<'a>(
    quote: &str,
    segments: &[&IndexedSegment<'a>],
    config: &FilterConfig,
) -> Option<&'a str> {
    if quote.trim().is_empty() {
        return None;
    }
    let normalized_quote = normalize(quote);
    let check_normalized =
        normalized_quote.split_whitespace().count() >= config.min_near_verbatim_tokens.max(1);
    segments
        .iter()
        .find(|s| {
            contains_words(s.dialogue, quote)
                || (check_normalized && contains_words(&s.normalized, &normalized_quote))
        })
        .map(|s| s.speaker)
}

/// Substring search that rejects hits cutting through a word.
fn contains_words(haystack: &str, needle: &str) -> bool {
    let Some(first) = needle.chars().next() else {
        return false;
    };
    let open_start = first.is_alphanumeric();
    let open_end = needle.chars().next_back().is_some_and(char::is_alphanumeric);

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let clean_start =
            !open_start || !haystack[..start].chars().next_back().is_some_and(char::is_alphanumeric);
        let clean_end =
            !open_end || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if clean_start && clean_end {
            return true;
        }
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn researcher_labels_match_by_containment() {
        let config = FilterConfig::default();
        assert!(is_researcher_label("Lead Interviewer", &config));
        assert!(is_researcher_label("MODERATOR", &config));
        assert!(!is_researcher_label("Participant 2", &config));
    }

    #[test]
    fn word_containment_respects_boundaries() {
        assert!(contains_words("Do you know?", "know"));
        assert!(contains_words("no, never", "no"));
        assert!(!contains_words("Do you know?", "no"));
        assert!(!contains_words("snowfall", "now"));
        assert!(contains_words("ba a a", "a a"));
        assert!(contains_words("tell me more.", "more."));
        assert!(!contains_words("", "x"));
        assert!(!contains_words("anything", ""));
    }
}
