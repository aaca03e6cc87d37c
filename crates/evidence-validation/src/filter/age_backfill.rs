//! Derive a narrow age range from ages mentioned in the source text.

use std::sync::LazyLock;

use evidence_core::config::FilterConfig;
use evidence_core::constants::{MAX_PLAUSIBLE_AGE, MIN_PLAUSIBLE_AGE};
use regex::Regex;

/// "Age: 56", "age 56", "aged 56".
static AGE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bage[d]?\s*[:=]?\s*(\d{1,3})\b").unwrap());

/// "32 years old", "56-year-old", "40 yrs old".
static YEARS_OLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,3})[\s-]*(?:years?|yrs?)[\s-]*old\b").unwrap()
});

/// Every plausible age mentioned in the text, in order of appearance.
pub fn extract_ages(text: &str) -> Vec<u32> {
    let mut found: Vec<(usize, u32)> = Vec::new();
    for re in [&*AGE_LABEL_RE, &*YEARS_OLD_RE] {
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            if let Ok(age) = m.as_str().parse::<u32>() {
                if (MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE).contains(&age) {
                    found.push((m.start(), age));
                }
            }
        }
    }
    found.sort_by_key(|(pos, _)| *pos);
    found.dedup_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, age)| age).collect()
}

/// Turn sampled ages into a range such as `"54-58"`.
///
/// One distinct age gives `age ± window`. Several ages within the spread
/// tolerance give `min-max`. A wider spread gives `median ± window`, using
/// the lower median for an even count.
pub fn derive_age_range(ages: &[u32], config: &FilterConfig) -> Option<String> {
    let mut distinct: Vec<u32> = ages.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let (&min, &max) = (distinct.first()?, distinct.last()?);
    let window = config.age_window;

    let (low, high) = if distinct.len() == 1 {
        (min.saturating_sub(window), min.saturating_add(window))
    } else if max - min <= config.age_spread_tolerance {
        (min, max)
    } else {
        let median = distinct[(distinct.len() - 1) / 2];
        (median.saturating_sub(window), median.saturating_add(window))
    };
    Some(format!("{low}-{high}"))
}
