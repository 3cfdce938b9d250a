use criterion::{criterion_group, criterion_main, Criterion};
use esgscore::scorer::ScoreCache;
use esgscore::{score_assessment, TargetYear};
use serde_json::{json, Value};
use std::hint::black_box;

const CATEGORIES: [&str; 3] = ["Environment", "Social", "Governance"];

fn create_envelope(years: usize, responses_per_year: usize) -> Value {
    let years: Vec<Value> = (0..years)
        .map(|y| {
            let responses: Vec<Value> = (0..responses_per_year)
                .map(|i| {
                    json!({
                        "question": {
                            "category": CATEGORIES[i % 3],
                            "indicator": format!("Indicator {}", i % 7),
                            "weight": (i % 4) + 1,
                            "text": {"en": format!("Question {i}"), "ms": format!("Soalan {i}")}
                        },
                        "answer": {"question_score": i % 11, "question_max": 10}
                    })
                })
                .collect();
            json!({"year": 2015 + y, "responses": responses})
        })
        .collect();
    json!({ "years": years })
}

fn benchmark_score_assessment(c: &mut Criterion) {
    let envelope = create_envelope(5, 200);
    let year = TargetYear::from(2019);

    c.bench_function("score_assessment_1000_responses", |b| {
        b.iter(|| score_assessment(black_box(&envelope), black_box(&year)))
    });
}

fn benchmark_cached_scoring(c: &mut Criterion) {
    let envelope = create_envelope(5, 200);
    let year = TargetYear::from(2019);
    let mut cache = ScoreCache::default();

    c.bench_function("score_cache_hit", |b| {
        b.iter(|| cache.score(black_box(&envelope), black_box(&year)))
    });
}

criterion_group!(benches, benchmark_score_assessment, benchmark_cached_scoring);
criterion_main!(benches);
