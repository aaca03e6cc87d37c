//! Exact substring search with char-accurate offsets.

/// Find the first exact occurrence of `quote` in `text`.
///
/// Returns `(start_char, end_char)` such that the chars of `text` in that
/// range equal `quote`.
pub fn find(quote: &str, text: &str) -> Option<(usize, usize)> {
    if quote.is_empty() {
        return None;
    }
    let byte_start = text.find(quote)?;
    let start = text[..byte_start].chars().count();
    Some((start, start + quote.chars().count()))
}
