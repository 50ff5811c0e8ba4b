//! Criterion benchmarks for query intent analysis.
//!
//! Covers the hot lexical paths:
//! - Intent classification
//! - Field and relationship term extraction
//! - Rule-table pattern matching

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use yari::intent::classifier::classify_intent;
use yari::intent::extraction::{extract_field_terms, extract_relationship_terms};
use yari::matcher::pattern::PatternMatcher;
use yari::matcher::rules::RulePatternMatcher;

/// Generate query strings mixing the signal vocabularies.
fn generate_queries(count: usize) -> Vec<String> {
    let templates = [
        "find articles where year equals 2020",
        "papers related to climate policy",
        "show me recent papers",
        "documents where author linked to this project",
        "books with price between 10 and 20",
        "records connected to the main cluster",
        "filter by category and status",
        "what happened last week",
    ];

    (0..count)
        .map(|i| templates[i % templates.len()].to_string())
        .collect()
}

fn bench_classification(c: &mut Criterion) {
    let queries = generate_queries(64);

    c.bench_function("classify_intent", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(classify_intent(black_box(query)));
            }
        })
    });
}

fn bench_extraction(c: &mut Criterion) {
    let queries = generate_queries(64);

    c.bench_function("extract_field_terms", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(extract_field_terms(black_box(query)));
            }
        })
    });

    c.bench_function("extract_relationship_terms", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(extract_relationship_terms(black_box(query)));
            }
        })
    });
}

fn bench_rule_matching(c: &mut Criterion) {
    let matcher = RulePatternMatcher::new().unwrap();
    let queries = generate_queries(64);

    c.bench_function("rule_pattern_matcher", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(matcher.match_query(black_box(query), None).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_classification,
    bench_extraction,
    bench_rule_matching
);
criterion_main!(benches);
