//! Substring search over canonicalized text.
//!
//! Normalization can change lengths, so a hit here carries no offsets.

/// Whether the normalized quote occurs inside the normalized source.
pub fn contains(normalized_quote: &str, normalized_text: &str) -> bool {
    !normalized_quote.is_empty() && normalized_text.contains(normalized_quote)
}
