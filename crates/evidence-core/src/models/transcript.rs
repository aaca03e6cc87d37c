use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::persona::json_kind;
use crate::constants::SEGMENT_SEPARATOR;
use crate::errors::{EvidenceError, EvidenceResult};

/// One speaker turn of an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub speaker: String,
    #[serde(default, alias = "text", alias = "content")]
    pub dialogue: String,
}

impl Segment {
    pub fn new(speaker: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            dialogue: dialogue.into(),
        }
    }
}

/// Ordered speaker turns. A speaker label may repeat across segments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredTranscript {
    pub segments: Vec<Segment>,
}

impl StructuredTranscript {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse a transcript from a JSON array of `{speaker, dialogue}` records.
    pub fn from_value(value: Value) -> EvidenceResult<Self> {
        if !value.is_array() {
            return Err(EvidenceError::InputShape {
                expected: "array of transcript segments".to_string(),
                found: json_kind(&value).to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Distinct speaker labels present in the transcript.
    pub fn speakers(&self) -> BTreeSet<&str> {
        self.segments.iter().map(|s| s.speaker.as_str()).collect()
    }

    /// All dialogue as one text, segments separated by a newline.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEGMENT_SEPARATOR);
            }
            out.push_str(&segment.dialogue);
        }
        out
    }
}

impl From<Vec<Segment>> for StructuredTranscript {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

/// The sources available to one validation call.
///
/// Matching prefers the transcript so speakers can be attributed; the raw
/// source text is the fallback, and is also what age backfill scans.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationInput<'a> {
    pub source_text: Option<&'a str>,
    pub transcript: Option<&'a StructuredTranscript>,
}

impl<'a> ValidationInput<'a> {
    pub fn new(source_text: Option<&'a str>, transcript: Option<&'a StructuredTranscript>) -> Self {
        Self {
            source_text,
            transcript,
        }
    }

    pub fn from_text(source_text: &'a str) -> Self {
        Self::new(Some(source_text), None)
    }

    pub fn from_transcript(transcript: &'a StructuredTranscript) -> Self {
        Self::new(None, Some(transcript))
    }

    /// Whether there is nothing to match against.
    pub fn is_empty(&self) -> bool {
        self.source_text.map_or(true, str::is_empty)
            && self.transcript.map_or(true, StructuredTranscript::is_empty)
    }
}
