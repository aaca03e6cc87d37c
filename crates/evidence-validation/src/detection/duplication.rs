//! Same-field duplicate and cross-trait quote reuse detection.

use std::collections::HashMap;

use evidence_core::models::{CrossTraitReuse, DuplicateQuote, DuplicationReport, Persona};

/// Find quotes cited twice in one field, or under more than one trait.
///
/// Quotes are compared by exact text. Fields are scanned in the fixed core
/// field order and findings are reported in order of first appearance.
/// Blank quotes cite nothing and are ignored.
pub fn detect_duplication(persona: &Persona) -> DuplicationReport {
    // quote -> fields in scan order (a field repeats once per occurrence)
    let mut occurrences: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (field, _, item) in persona.core_evidence() {
        let quote = item.quote.as_str();
        if quote.trim().is_empty() {
            continue;
        }
        let slot = *positions.entry(quote).or_insert_with(|| {
            occurrences.push((quote, Vec::new()));
            occurrences.len() - 1
        });
        occurrences[slot].1.push(field);
    }

    let mut report = DuplicationReport::default();
    for (quote, fields) in &occurrences {
        let mut distinct: Vec<&str> = Vec::new();
        for &field in fields {
            if !distinct.contains(&field) {
                distinct.push(field);
            }
        }

        for field in &distinct {
            let count = fields.iter().filter(|f| *f == field).count();
            if count > 1 {
                report.duplicates.push(DuplicateQuote {
                    field: field.to_string(),
                    quote: quote.to_string(),
                    occurrences: count,
                });
            }
        }

        if distinct.len() > 1 {
            let mut sorted: Vec<String> = distinct.iter().map(|f| f.to_string()).collect();
            sorted.sort();
            report.cross_trait_reuse.push(CrossTraitReuse {
                quote: quote.to_string(),
                fields: sorted,
            });
        }
    }

    report
}
