//! Per-call lookup structures over the evidence source.
//!
//! A structured transcript is addressed as one buffer: dialogues joined by a
//! one-char separator, with a prefix table of byte and char offsets per
//! segment. Normalized dialogue and token sets are computed once here and
//! reused for every evidence item in the call.

use std::collections::HashSet;

use evidence_core::config::MatchingConfig;
use evidence_core::constants::SEGMENT_SEPARATOR;
use evidence_core::models::{StructuredTranscript, ValidationInput};

use super::token_overlap;
use crate::normalize::normalize;

/// One transcript segment with its position in the joined buffer.
#[derive(Debug)]
pub struct IndexedSegment<'a> {
    pub speaker: &'a str,
    pub dialogue: &'a str,
    pub normalized: String,
    byte_start: usize,
    char_start: usize,
    tokens: HashSet<String>,
}

/// Joined-buffer view of a structured transcript.
#[derive(Debug)]
pub struct TranscriptIndex<'a> {
    buffer: String,
    segments: Vec<IndexedSegment<'a>>,
}

/// A verbatim hit inside a transcript, in whole-transcript char coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptHit {
    pub segment: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl<'a> TranscriptIndex<'a> {
    pub fn build(transcript: &'a StructuredTranscript) -> Self {
        let mut buffer = String::new();
        let mut segments = Vec::with_capacity(transcript.segments.len());
        let mut char_offset = 0;

        for (i, segment) in transcript.segments.iter().enumerate() {
            if i > 0 {
                buffer.push(SEGMENT_SEPARATOR);
                char_offset += 1;
            }
            let normalized = normalize(&segment.dialogue);
            let tokens = token_overlap::tokenize(&normalized)
                .into_iter()
                .map(str::to_string)
                .collect();
            segments.push(IndexedSegment {
                speaker: &segment.speaker,
                dialogue: &segment.dialogue,
                normalized,
                byte_start: buffer.len(),
                char_start: char_offset,
                tokens,
            });
            buffer.push_str(&segment.dialogue);
            char_offset += segment.dialogue.chars().count();
        }

        Self { buffer, segments }
    }

    pub fn segments(&self) -> &[IndexedSegment<'a>] {
        &self.segments
    }

    pub fn speaker(&self, segment: usize) -> Option<&'a str> {
        self.segments.get(segment).map(|s| s.speaker)
    }

    /// Earliest exact occurrence that lies wholly inside one segment.
    pub fn find_verbatim(&self, quote: &str) -> Option<TranscriptHit> {
        if quote.is_empty() || self.segments.is_empty() {
            return None;
        }
        let mut from = 0;
        while let Some(rel) = self.buffer[from..].find(quote) {
            let byte = from + rel;
            if let Some(hit) = self.locate(byte, quote) {
                return Some(hit);
            }
            // Straddles a separator; resume one char later.
            from = byte + self.buffer[byte..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    /// Earliest segment whose normalized dialogue contains the normalized quote.
    pub fn find_normalized(&self, normalized_quote: &str) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| super::normalized::contains(normalized_quote, &s.normalized))
    }

    /// Earliest segment whose tokens overlap the quote's enough.
    pub fn find_overlap(&self, quote_tokens: &HashSet<&str>, config: &MatchingConfig) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| token_overlap::accepts(quote_tokens, &s.tokens, config))
    }

    fn locate(&self, byte: usize, quote: &str) -> Option<TranscriptHit> {
        let segment = self.segments.partition_point(|s| s.byte_start <= byte).checked_sub(1)?;
        let seg = &self.segments[segment];
        let local = byte - seg.byte_start;
        if local + quote.len() > seg.dialogue.len() {
            return None;
        }
        let start_char = seg.char_start + seg.dialogue[..local].chars().count();
        Some(TranscriptHit {
            segment,
            start_char,
            end_char: start_char + quote.chars().count(),
        })
    }
}

/// Raw text with its normalized form and token set.
#[derive(Debug)]
pub struct TextIndex<'a> {
    pub raw: &'a str,
    pub normalized: String,
    tokens: HashSet<String>,
}

impl<'a> TextIndex<'a> {
    pub fn build(raw: &'a str) -> Self {
        let normalized = normalize(raw);
        let tokens = token_overlap::tokenize(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            raw,
            normalized,
            tokens,
        }
    }

    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }
}

/// Whatever the current validation call matches against.
#[derive(Debug)]
pub enum PreparedSource<'a> {
    Transcript(TranscriptIndex<'a>),
    Text(TextIndex<'a>),
    Empty,
}

impl<'a> PreparedSource<'a> {
    /// Prefer the transcript (speakers can be attributed), else the raw text.
    pub fn from_input(input: &ValidationInput<'a>) -> Self {
        match (input.transcript, input.source_text) {
            (Some(transcript), _) if !transcript.is_empty() => {
                PreparedSource::Transcript(TranscriptIndex::build(transcript))
            }
            (_, Some(text)) if !text.is_empty() => PreparedSource::Text(TextIndex::build(text)),
            _ => PreparedSource::Empty,
        }
    }
}
