// Criterion benchmarks for rulez-en.
//
// Run:
//   cargo bench -p rulez-en

use criterion::{Criterion, criterion_group, criterion_main};
use rulez_en::hyphenator::hyphenate;
use rulez_en::tokenizer::parse_word;
use std::hint::black_box;

const WORDS: &[&str] = &[
    "Translation!",
    "hyphenation",
    "strawberry",
    "abstract",
    "banana",
    "chat",
    "Philadelphia",
    "quintessential",
    "ate",
    "crab-apple",
];

fn bench_parse_word(c: &mut Criterion) {
    c.bench_function("parse_word", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(parse_word(black_box(word)));
            }
        })
    });
}

fn bench_hyphenate(c: &mut Criterion) {
    let parsed: Vec<_> = WORDS.iter().map(|w| parse_word(w)).collect();
    c.bench_function("hyphenate", |b| {
        b.iter(|| {
            for word in &parsed {
                black_box(hyphenate(black_box(word)));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("parse_and_hyphenate", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(hyphenate(&parse_word(black_box(word))));
            }
        })
    });
}

criterion_group!(benches, bench_parse_word, bench_hyphenate, bench_pipeline);
criterion_main!(benches);
