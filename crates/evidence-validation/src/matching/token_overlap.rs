//! Fuzzy acceptance by whitespace-token overlap.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use evidence_core::config::MatchingConfig;

/// Distinct whitespace tokens of an already-normalized string.
pub fn tokenize(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}

/// Share of distinct quote tokens present in the source tokens.
pub fn overlap_ratio<S>(quote_tokens: &HashSet<&str>, source_tokens: &HashSet<S>) -> f64
where
    S: Borrow<str> + Eq + Hash,
{
    if quote_tokens.is_empty() {
        return 0.0;
    }
    let shared = quote_tokens
        .iter()
        .filter(|token| source_tokens.contains(**token))
        .count();
    shared as f64 / quote_tokens.len() as f64
}

/// Whether the quote overlaps the source enough to count as a normalized match.
///
/// Quotes with fewer than `min_fuzzy_tokens` distinct tokens never qualify.
pub fn accepts<S>(
    quote_tokens: &HashSet<&str>,
    source_tokens: &HashSet<S>,
    config: &MatchingConfig,
) -> bool
where
    S: Borrow<str> + Eq + Hash,
{
    quote_tokens.len() >= config.min_fuzzy_tokens
        && overlap_ratio(quote_tokens, source_tokens) >= config.fuzzy_overlap_threshold
}
