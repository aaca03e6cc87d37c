use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How an evidence quote was located in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Exact substring of the raw source.
    Verbatim,
    /// Found after canonicalization, or by sufficient token overlap.
    Normalized,
    NoMatch,
}

impl MatchType {
    pub const ALL: [MatchType; 3] = [MatchType::Verbatim, MatchType::Normalized, MatchType::NoMatch];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Verbatim => "verbatim",
            MatchType::Normalized => "normalized",
            MatchType::NoMatch => "no_match",
        }
    }
}

/// Match result for one evidence item, computed fresh on every validation.
///
/// Offsets are char positions and are only present for verbatim matches;
/// for those, `start_char..end_char` bounds the quote exactly within the
/// searched text (whole-transcript coordinates for transcripts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceMatch {
    pub field: String,
    /// Position of the item within its field's evidence list.
    pub index: usize,
    pub match_type: MatchType,
    pub start_char: Option<usize>,
    pub end_char: Option<usize>,
    pub speaker: Option<String>,
}
