//! Text canonicalization for robust quote comparison.
//!
//! `normalize` is total and idempotent: `normalize(&normalize(s)) == normalize(s)`.

/// Speaker labels stripped from the start of a quote.
const SPEAKER_LABELS: [&str; 3] = ["researcher:", "interviewer:", "moderator:"];

/// Matching open/close pairs stripped from around a quote.
const ENCLOSING_PAIRS: [(char, char); 5] = [('"', '"'), ('\'', '\''), ('(', ')'), ('[', ']'), ('{', '}')];

/// Canonicalize text for comparison.
///
/// Lower-cases, maps typographic quotes, dashes, and ellipses to ASCII,
/// drops zero-width characters, turns non-breaking spaces into spaces,
/// collapses whitespace, then strips a leading researcher/interviewer/
/// moderator label and a layer of enclosing quotes or brackets. Label and
/// enclosure stripping repeat until nothing changes, which keeps the
/// function idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut mapped = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '`' => mapped.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{00AB}' | '\u{00BB}' => {
                mapped.push('"')
            }
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => {
                mapped.push('-')
            }
            '\u{2026}' => mapped.push_str("..."),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => {}
            '\u{00A0}' | '\u{202F}' | '\u{2007}' => mapped.push(' '),
            other => mapped.push(other),
        }
    }

    let collapsed = mapped.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut current = collapsed.as_str();
    loop {
        let next = strip_enclosing(strip_speaker_label(current));
        if next.len() == current.len() {
            break;
        }
        current = next;
    }
    current.to_string()
}

fn strip_speaker_label(text: &str) -> &str {
    SPEAKER_LABELS
        .iter()
        .find_map(|label| text.strip_prefix(label))
        .map_or(text, str::trim)
}

fn strip_enclosing(text: &str) -> &str {
    let mut chars = text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return text;
    };
    if ENCLOSING_PAIRS.iter().any(|&(open, close)| first == open && last == close) {
        text[first.len_utf8()..text.len() - last.len_utf8()].trim()
    } else {
        text
    }
}
