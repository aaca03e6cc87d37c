//! Evidence matcher: locates a quote in source text or a structured
//! transcript and reports match kind, offsets, and speaker.
//!
//! Tiers are tried in order and the first success wins:
//! 1. verbatim substring of the raw text (exact char offsets)
//! 2. substring of the normalized text (no offsets)
//! 3. token overlap of the normalized texts (no offsets)
//!
//! For transcripts each tier scans all segments before the next tier is
//! tried, and the earliest segment wins within a tier.

pub mod index;
pub mod normalized;
pub mod token_overlap;
pub mod verbatim;

use evidence_core::config::MatchingConfig;
use evidence_core::models::{
    EvidenceMatch, MatchType, Persona, StructuredTranscript, ValidationInput,
};

pub use index::{PreparedSource, TextIndex, TranscriptIndex};

use crate::normalize::normalize;

/// Where a quote is searched for.
#[derive(Debug, Clone, Copy)]
pub enum EvidenceSource<'a> {
    Text(&'a str),
    Transcript(&'a StructuredTranscript),
}

/// Match outcome for a single quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMatch {
    pub match_type: MatchType,
    pub start_char: Option<usize>,
    pub end_char: Option<usize>,
    pub speaker: Option<String>,
}

impl QuoteMatch {
    pub fn no_match() -> Self {
        Self {
            match_type: MatchType::NoMatch,
            start_char: None,
            end_char: None,
            speaker: None,
        }
    }

    fn verbatim(start: usize, end: usize, speaker: Option<&str>) -> Self {
        Self {
            match_type: MatchType::Verbatim,
            start_char: Some(start),
            end_char: Some(end),
            speaker: speaker.map(str::to_string),
        }
    }

    fn normalized(speaker: Option<&str>) -> Self {
        Self {
            match_type: MatchType::Normalized,
            start_char: None,
            end_char: None,
            speaker: speaker.map(str::to_string),
        }
    }

    pub fn is_match(&self) -> bool {
        self.match_type != MatchType::NoMatch
    }

    fn into_evidence_match(self, field: &str, index: usize) -> EvidenceMatch {
        EvidenceMatch {
            field: field.to_string(),
            index,
            match_type: self.match_type,
            start_char: self.start_char,
            end_char: self.end_char,
            speaker: self.speaker,
        }
    }
}

/// Tiered quote matcher.
///
/// Matching is tier-major: a verbatim hit in a later transcript segment
/// beats a normalized or token-overlap hit in an earlier one, so the
/// reported speaker is the one whose segment matched at the best tier.
#[derive(Debug, Clone, Default)]
pub struct EvidenceMatcher {
    config: MatchingConfig,
}

impl EvidenceMatcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Match one quote against one source.
    ///
    /// Builds the source index for this call only; use
    /// [`EvidenceMatcher::match_persona`] or [`EvidenceMatcher::match_prepared`]
    /// to amortize it over many quotes.
    pub fn match_quote(&self, quote: &str, source: EvidenceSource<'_>) -> QuoteMatch {
        let prepared = match source {
            EvidenceSource::Text(text) => {
                PreparedSource::from_input(&ValidationInput::from_text(text))
            }
            EvidenceSource::Transcript(transcript) => {
                PreparedSource::from_input(&ValidationInput::from_transcript(transcript))
            }
        };
        self.match_prepared(quote, &prepared)
    }

    /// Match one quote against a prepared source.
    pub fn match_prepared(&self, quote: &str, source: &PreparedSource<'_>) -> QuoteMatch {
        if quote.trim().is_empty() {
            return QuoteMatch::no_match();
        }
        match source {
            PreparedSource::Empty => QuoteMatch::no_match(),
            PreparedSource::Text(text) => self.match_text(quote, text),
            PreparedSource::Transcript(index) => self.match_transcript(quote, index),
        }
    }

    /// Match every evidence item of the core trait fields, in field order.
    pub fn match_persona(&self, persona: &Persona, input: &ValidationInput<'_>) -> Vec<EvidenceMatch> {
        let prepared = PreparedSource::from_input(input);
        persona
            .core_evidence()
            .map(|(field, index, item)| {
                self.match_prepared(&item.quote, &prepared)
                    .into_evidence_match(field, index)
            })
            .collect()
    }

    fn match_text(&self, quote: &str, text: &TextIndex<'_>) -> QuoteMatch {
        if let Some((start, end)) = verbatim::find(quote, text.raw) {
            return QuoteMatch::verbatim(start, end, None);
        }

        let normalized_quote = normalize(quote);
        if normalized::contains(&normalized_quote, &text.normalized) {
            return QuoteMatch::normalized(None);
        }

        let quote_tokens = token_overlap::tokenize(&normalized_quote);
        if token_overlap::accepts(&quote_tokens, text.tokens(), &self.config) {
            return QuoteMatch::normalized(None);
        }

        QuoteMatch::no_match()
    }

    fn match_transcript(&self, quote: &str, index: &TranscriptIndex<'_>) -> QuoteMatch {
        if let Some(hit) = index.find_verbatim(quote) {
            return QuoteMatch::verbatim(hit.start_char, hit.end_char, index.speaker(hit.segment));
        }

        let normalized_quote = normalize(quote);
        if let Some(segment) = index.find_normalized(&normalized_quote) {
            return QuoteMatch::normalized(index.speaker(segment));
        }

        let quote_tokens = token_overlap::tokenize(&normalized_quote);
        if let Some(segment) = index.find_overlap(&quote_tokens, &self.config) {
            return QuoteMatch::normalized(index.speaker(segment));
        }

        QuoteMatch::no_match()
    }
}

/// Match a quote with the default matching configuration.
pub fn match_evidence(quote: &str, source: EvidenceSource<'_>) -> QuoteMatch {
    EvidenceMatcher::default().match_quote(quote, source)
}
