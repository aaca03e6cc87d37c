//! Property tests for evidence-validation: normalization, matching bounds,
//! and summary scoring.

use proptest::prelude::*;

use evidence_core::config::ScoringConfig;
use evidence_core::models::{
    ContaminationReport, DuplicationReport, EvidenceItem, EvidenceMatch, MatchType, Persona,
    PersonaTrait, Segment, SpeakerCheckReport, StructuredTranscript, ValidationStatus,
};
use evidence_validation::detection::detect_duplication;
use evidence_validation::matching::{match_evidence, EvidenceSource};
use evidence_validation::normalize;
use evidence_validation::summary::{compute_confidence_components, compute_status, summarize};

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

// Text with the punctuation, spacing, and labels normalization cares about.
fn messy_text() -> impl Strategy<Value = String> {
    let body = "[a-zA-Z0-9 \"'()\\[\\]{}:?.,\u{2019}\u{201C}\u{201D}\u{2014}\u{2026}\u{00A0}\u{200B}\t\n-]{0,60}";
    (
        prop::sample::select(vec!["", "Interviewer: ", "RESEARCHER:", "moderator:  \"", "(\""]),
        body,
    )
        .prop_map(|(prefix, body)| format!("{prefix}{body}"))
}

fn phrase() -> impl Strategy<Value = String> {
    "[a-zA-Zé]{1,10}( [a-zA-Zé]{1,10}){0,4}"
}

fn match_types() -> impl Strategy<Value = Vec<MatchType>> {
    prop::collection::vec(prop::sample::select(MatchType::ALL.to_vec()), 0..40)
}

fn matches_of(types: &[MatchType]) -> Vec<EvidenceMatch> {
    types
        .iter()
        .enumerate()
        .map(|(index, &match_type)| EvidenceMatch {
            field: "key_quotes".to_string(),
            index,
            match_type,
            start_char: None,
            end_char: None,
            speaker: None,
        })
        .collect()
}

fn trait_citing(quotes: &[String]) -> PersonaTrait {
    PersonaTrait::new("v", 0.5, quotes.iter().map(|q| EvidenceItem::new(q.clone())).collect())
}

// =============================================================================
// Normalization
// =============================================================================
proptest! {
    #[test]
    fn normalize_is_idempotent(text in messy_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_edge_or_double_whitespace(text in messy_text()) {
        let normalized = normalize(&text);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }
}

// =============================================================================
// Matching
// =============================================================================
proptest! {
    #[test]
    fn embedded_quote_is_verbatim_with_exact_bounds(
        prefix in "[a-z .,é☕]{0,30}",
        quote in phrase(),
        suffix in "[a-z .,é☕]{0,30}",
    ) {
        let source = format!("{prefix}{quote}{suffix}");
        let result = match_evidence(&quote, EvidenceSource::Text(&source));
        prop_assert_eq!(result.match_type, MatchType::Verbatim);
        let (start, end) = (result.start_char.unwrap(), result.end_char.unwrap());
        prop_assert_eq!(char_slice(&source, start, end), quote);
    }

    #[test]
    fn transcript_hit_is_attributed_to_the_first_containing_segment(
        dialogues in prop::collection::vec("[a-zé ]{1,30}", 1..6),
        pick in any::<prop::sample::Index>(),
        bounds in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let transcript = StructuredTranscript::new(
            dialogues
                .iter()
                .enumerate()
                .map(|(i, d)| Segment::new(format!("S{i}"), d.clone()))
                .collect(),
        );
        let chosen: Vec<char> = dialogues[pick.index(dialogues.len())].chars().collect();
        let (a, b) = (bounds.0.index(chosen.len()), bounds.1.index(chosen.len()));
        let quote: String = chosen[a.min(b)..=a.max(b)].iter().collect();
        prop_assume!(!quote.trim().is_empty());

        let result = match_evidence(&quote, EvidenceSource::Transcript(&transcript));
        prop_assert_eq!(result.match_type, MatchType::Verbatim);
        let (start, end) = (result.start_char.unwrap(), result.end_char.unwrap());
        prop_assert_eq!(char_slice(&transcript.flatten(), start, end), quote.clone());

        let first = transcript
            .segments
            .iter()
            .find(|s| s.dialogue.contains(&quote))
            .map(|s| s.speaker.clone());
        prop_assert_eq!(result.speaker, first);
    }

    #[test]
    fn disjoint_vocabularies_never_match(
        source in "[a-m]{1,8}( [a-m]{1,8}){0,10}",
        quote in "[n-z]{1,8}( [n-z]{1,8}){0,5}",
    ) {
        let result = match_evidence(&quote, EvidenceSource::Text(&source));
        prop_assert_eq!(result.match_type, MatchType::NoMatch);
        prop_assert!(result.start_char.is_none() && result.end_char.is_none());
    }

    #[test]
    fn offsets_exist_only_for_verbatim(quote in phrase(), source in messy_text()) {
        let result = match_evidence(&quote, EvidenceSource::Text(&source));
        let has_offsets = result.start_char.is_some() && result.end_char.is_some();
        prop_assert_eq!(has_offsets, result.match_type == MatchType::Verbatim);
    }
}

// =============================================================================
// Summary and scoring
// =============================================================================
proptest! {
    #[test]
    fn score_is_bounded_and_counts_add_up(types in match_types()) {
        let summary = summarize(
            &matches_of(&types),
            DuplicationReport::default(),
            SpeakerCheckReport::default(),
            ContaminationReport::default(),
        );
        prop_assert_eq!(summary.counts.total(), summary.total);
        prop_assert_eq!(summary.total, types.len());

        let score = compute_confidence_components(&summary, &ScoringConfig::default()).evidence_match_score;
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn hard_fail_exactly_when_unmatched_share_exceeds_limit(types in match_types()) {
        let config = ScoringConfig::default();
        let summary = summarize(
            &matches_of(&types),
            DuplicationReport::default(),
            SpeakerCheckReport::default(),
            ContaminationReport::default(),
        );
        let unmatched = types.iter().filter(|t| **t == MatchType::NoMatch).count();
        let over = !types.is_empty()
            && unmatched as f64 / types.len() as f64 > config.hard_fail_no_match_ratio;
        let status = compute_status(&summary, &config);
        prop_assert_eq!(status == ValidationStatus::HardFail, over);
        if !over {
            prop_assert_eq!(status, ValidationStatus::Pass);
        }
    }

    #[test]
    fn cross_trait_reuse_always_names_several_sorted_fields(
        goals in prop::collection::vec("[ab]{1,2}", 0..5),
        challenges in prop::collection::vec("[ab]{1,2}", 0..5),
        key_quotes in prop::collection::vec("[ab]{1,2}", 0..5),
    ) {
        let persona = Persona::new("P")
            .with_trait("goals_and_motivations", trait_citing(&goals))
            .with_trait("challenges_and_frustrations", trait_citing(&challenges))
            .with_trait("key_quotes", trait_citing(&key_quotes));

        let report = detect_duplication(&persona);
        for reuse in &report.cross_trait_reuse {
            prop_assert!(reuse.fields.len() >= 2);
            prop_assert!(reuse.fields.windows(2).all(|w| w[0] < w[1]));
        }
        for duplicate in &report.duplicates {
            prop_assert!(duplicate.occurrences >= 2);
        }
    }
}
