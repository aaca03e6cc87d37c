//! Tests for the evidence matcher: tiers, offsets, and speaker attribution.

use evidence_core::config::MatchingConfig;
use evidence_core::models::{
    EvidenceItem, MatchType, Persona, PersonaTrait, Segment, StructuredTranscript, ValidationInput,
};
use evidence_validation::matching::{match_evidence, EvidenceMatcher, EvidenceSource};

fn transcript(segments: &[(&str, &str)]) -> StructuredTranscript {
    StructuredTranscript::new(
        segments
            .iter()
            .map(|(speaker, dialogue)| Segment::new(*speaker, *dialogue))
            .collect(),
    )
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

// ─── Raw text ───

#[test]
fn verbatim_match_reports_exact_char_bounds() {
    let source = "Café owners told us: I really like coffee and tea.";
    let result = match_evidence("I really like coffee", EvidenceSource::Text(source));
    assert_eq!(result.match_type, MatchType::Verbatim);
    let (start, end) = (result.start_char.unwrap(), result.end_char.unwrap());
    assert_eq!(char_slice(source, start, end), "I really like coffee");
    assert_eq!(start, 21);
    assert_eq!(result.speaker, None);
}

#[test]
fn typographic_differences_match_as_normalized_without_offsets() {
    let source = "She said: it's the “last mile” that hurts — every time.";
    let result = match_evidence(
        "It’s the \"last mile\" that hurts - every time",
        EvidenceSource::Text(source),
    );
    assert_eq!(result.match_type, MatchType::Normalized);
    assert_eq!(result.start_char, None);
    assert_eq!(result.end_char, None);
}

#[test]
fn token_overlap_accepts_paraphrase() {
    let source = "We usually export everything into spreadsheets on Friday afternoons.";
    let result = match_evidence(
        "we export into spreadsheets every friday",
        EvidenceSource::Text(source),
    );
    assert_eq!(result.match_type, MatchType::Normalized);
    assert_eq!(result.start_char, None);
}

#[test]
fn single_token_quote_does_not_fuzzy_match() {
    let result = match_evidence("spreadsheets!", EvidenceSource::Text("spreadsheets are fine"));
    assert_eq!(result.match_type, MatchType::NoMatch);
}

#[test]
fn absent_quote_is_no_match_with_null_offsets() {
    let result = match_evidence(
        "Quarterly forecasting dominates planning",
        EvidenceSource::Text("Hello there, weather looks fine today."),
    );
    assert_eq!(result.match_type, MatchType::NoMatch);
    assert_eq!(result.start_char, None);
    assert_eq!(result.end_char, None);
    assert_eq!(result.speaker, None);
}

#[test]
fn empty_quote_or_source_is_no_match() {
    assert_eq!(
        match_evidence("", EvidenceSource::Text("anything")).match_type,
        MatchType::NoMatch
    );
    assert_eq!(
        match_evidence("   ", EvidenceSource::Text("a   b")).match_type,
        MatchType::NoMatch
    );
    assert_eq!(
        match_evidence("something", EvidenceSource::Text("")).match_type,
        MatchType::NoMatch
    );
    let empty = StructuredTranscript::default();
    assert_eq!(
        match_evidence("something", EvidenceSource::Transcript(&empty)).match_type,
        MatchType::NoMatch
    );
}

// ─── Structured transcripts ───

#[test]
fn transcript_match_returns_segment_speaker() {
    let t = transcript(&[("A", "Hello there"), ("User", "I really like coffee and tea")]);
    let result = match_evidence("I really like coffee", EvidenceSource::Transcript(&t));
    assert!(matches!(
        result.match_type,
        MatchType::Verbatim | MatchType::Normalized
    ));
    assert_eq!(result.speaker.as_deref(), Some("User"));
}

#[test]
fn transcript_offsets_are_in_whole_transcript_coordinates() {
    let t = transcript(&[("A", "Hello there"), ("User", "I really like coffee and tea")]);
    let result = match_evidence("like coffee", EvidenceSource::Transcript(&t));
    assert_eq!(result.match_type, MatchType::Verbatim);
    // "Hello there" (11 chars) + separator, then "I really " (9 chars).
    assert_eq!(result.start_char, Some(21));
    assert_eq!(result.end_char, Some(32));
    assert_eq!(
        char_slice(&t.flatten(), 21, 32),
        "like coffee"
    );
}

#[test]
fn earliest_segment_wins_on_ties() {
    let t = transcript(&[
        ("Interviewer", "So you said it takes forever?"),
        ("Dana", "It takes forever."),
        ("Sam", "It takes forever."),
    ]);
    let result = match_evidence("It takes forever.", EvidenceSource::Transcript(&t));
    assert_eq!(result.match_type, MatchType::Verbatim);
    assert_eq!(result.speaker.as_deref(), Some("Dana"));
}

#[test]
fn verbatim_in_a_later_segment_beats_fuzzy_in_an_earlier_one() {
    let t = transcript(&[
        ("Dana", "onboarding takes weeks for every new hire here"),
        ("Sam", "Onboarding takes weeks."),
    ]);
    let result = match_evidence("Onboarding takes weeks.", EvidenceSource::Transcript(&t));
    assert_eq!(result.match_type, MatchType::Verbatim);
    assert_eq!(result.speaker.as_deref(), Some("Sam"));
}

#[test]
fn quote_spanning_two_segments_is_not_verbatim() {
    let t = transcript(&[("A", "first part"), ("B", "second part")]);
    let result = match_evidence("part\nsecond", EvidenceSource::Transcript(&t));
    assert_ne!(result.match_type, MatchType::Verbatim);
}

#[test]
fn multibyte_dialogue_keeps_char_offsets() {
    let t = transcript(&[("A", "Ünïcödé ☕ first"), ("B", "naïve café talk")]);
    let result = match_evidence("café talk", EvidenceSource::Transcript(&t));
    assert_eq!(result.match_type, MatchType::Verbatim);
    let (start, end) = (result.start_char.unwrap(), result.end_char.unwrap());
    assert_eq!(char_slice(&t.flatten(), start, end), "café talk");
    assert_eq!(result.speaker.as_deref(), Some("B"));
}

// ─── Configuration ───

#[test]
fn fuzzy_threshold_is_configurable() {
    let strict = EvidenceMatcher::new(MatchingConfig {
        fuzzy_overlap_threshold: 0.9,
        ..Default::default()
    });
    let source = "We usually export everything into spreadsheets on Friday afternoons.";
    let result = strict.match_quote(
        "we export into spreadsheets every friday",
        EvidenceSource::Text(source),
    );
    assert_eq!(result.match_type, MatchType::NoMatch);
}

// ─── Persona-level matching ───

#[test]
fn match_persona_emits_one_match_per_core_evidence_item() {
    let t = transcript(&[("Dana", "I want one dashboard. Approvals take a week.")]);
    let persona = Persona::new("Dana")
        .with_trait(
            "goals_and_motivations",
            PersonaTrait::new(
                "Visibility",
                0.8,
                vec![
                    EvidenceItem::new("I want one dashboard."),
                    EvidenceItem::new("Totally unrelated sentence here"),
                ],
            ),
        )
        .with_trait(
            "key_quotes",
            PersonaTrait::new("q", 0.8, vec![EvidenceItem::new("Approvals take a week.")]),
        )
        .with_trait(
            "tools",
            PersonaTrait::new("t", 0.8, vec![EvidenceItem::new("not validated")]),
        );

    let matches = EvidenceMatcher::default().match_persona(&persona, &ValidationInput::from_transcript(&t));
    assert_eq!(matches.len(), 3);
    assert_eq!(
        (matches[0].field.as_str(), matches[0].index, matches[0].match_type),
        ("goals_and_motivations", 0, MatchType::Verbatim)
    );
    assert_eq!(
        (matches[1].field.as_str(), matches[1].index, matches[1].match_type),
        ("goals_and_motivations", 1, MatchType::NoMatch)
    );
    assert_eq!(
        (matches[2].field.as_str(), matches[2].index, matches[2].match_type),
        ("key_quotes", 0, MatchType::Verbatim)
    );
    assert_eq!(matches[2].speaker.as_deref(), Some("Dana"));
}

#[test]
fn transcript_is_preferred_over_source_text() {
    let t = transcript(&[("Dana", "I want one dashboard.")]);
    let input = ValidationInput::new(Some("unrelated raw text"), Some(&t));
    let persona = Persona::new("Dana").with_trait(
        "key_quotes",
        PersonaTrait::new("q", 0.5, vec![EvidenceItem::new("I want one dashboard.")]),
    );
    let matches = EvidenceMatcher::default().match_persona(&persona, &input);
    assert_eq!(matches[0].match_type, MatchType::Verbatim);
    assert_eq!(matches[0].speaker.as_deref(), Some("Dana"));
}
