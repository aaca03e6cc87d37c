use criterion::{criterion_group, criterion_main, Criterion};

use evidence_core::models::{
    EvidenceItem, Persona, PersonaTrait, Segment, StructuredTranscript, ValidationInput,
};
use evidence_validation::matching::{EvidenceMatcher, EvidenceSource};
use evidence_validation::{normalize, ValidationEngine};

/// A 200-segment interview alternating interviewer and participant turns.
fn build_transcript() -> StructuredTranscript {
    let segments = (0..200)
        .map(|i| {
            if i % 2 == 0 {
                Segment::new("Interviewer", format!("Question {i}: how does step {i} usually go for you?"))
            } else {
                Segment::new(
                    "Participant",
                    format!("Step {i} means I export the report, tidy the columns, and send it to finance by noon."),
                )
            }
        })
        .collect();
    StructuredTranscript::new(segments)
}

fn build_persona() -> Persona {
    let evidence = |offset: usize| -> Vec<EvidenceItem> {
        (0..10)
            .map(|i| {
                let step = offset + i * 18 + 1;
                EvidenceItem::new(format!("Step {step} means I export the report"))
            })
            .collect()
    };
    Persona::new("Bench")
        .with_trait("goals_and_motivations", PersonaTrait::new("g", 0.8, evidence(0)))
        .with_trait("challenges_and_frustrations", PersonaTrait::new("c", 0.8, evidence(4)))
        .with_trait(
            "key_quotes",
            PersonaTrait::new(
                "k",
                0.8,
                vec![
                    EvidenceItem::new("tidy the columns and send it to finance"),
                    EvidenceItem::new("Nothing like this was ever said in the interview"),
                ],
            ),
        )
}

fn bench_normalize(c: &mut Criterion) {
    let text = "Interviewer: \u{201C}So\u{2014}how\u{2019}s   the\u{00A0}week going\u{2026}?\u{201D} ".repeat(20);
    c.bench_function("normalize_1k_chars", |bench| {
        bench.iter(|| normalize(&text));
    });
}

fn bench_match_quote_verbatim(c: &mut Criterion) {
    let transcript = build_transcript();
    let matcher = EvidenceMatcher::default();
    c.bench_function("match_quote_verbatim_200_segments", |bench| {
        bench.iter(|| {
            matcher.match_quote(
                "Step 199 means I export the report",
                EvidenceSource::Transcript(&transcript),
            )
        });
    });
}

fn bench_match_quote_miss(c: &mut Criterion) {
    let transcript = build_transcript();
    let matcher = EvidenceMatcher::default();
    c.bench_function("match_quote_miss_200_segments", |bench| {
        bench.iter(|| {
            matcher.match_quote(
                "Nothing like this was ever said",
                EvidenceSource::Transcript(&transcript),
            )
        });
    });
}

fn bench_validate_persona(c: &mut Criterion) {
    let transcript = build_transcript();
    let persona = build_persona();
    let engine = ValidationEngine::default();
    c.bench_function("validate_persona_22_items", |bench| {
        bench.iter(|| engine.validate(&persona, &ValidationInput::from_transcript(&transcript)));
    });
}

fn bench_validate_batch(c: &mut Criterion) {
    let transcript = build_transcript();
    let personas: Vec<Persona> = (0..32).map(|_| build_persona()).collect();
    let engine = ValidationEngine::default();
    c.bench_function("validate_batch_32_personas", |bench| {
        bench.iter(|| engine.validate_batch(&personas, &ValidationInput::from_transcript(&transcript)));
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_match_quote_verbatim,
    bench_match_quote_miss,
    bench_validate_persona,
    bench_validate_batch,
);
criterion_main!(benches);
