//! Benchmarks for width measurement and layout helpers.
//!
//! Run with: cargo bench -p ftui-width

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftui_width::{Condition, WidthCache};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

/// ASCII-only text of various lengths
fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// CJK text (width 2 per char)
fn cjk_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Mixed ASCII, CJK and ambiguous symbols
fn mixed_text(len: usize) -> String {
    "Hello \u{4E16}\u{754C}! \u{2606} Test \u{6D4B}\u{8BD5}. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Emoji-heavy text
fn emoji_text(len: usize) -> String {
    "\u{1F600}\u{1F389}\u{1F680}\u{1F4BB}\u{1F3E0}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// ZWJ sequences (complex graphemes)
fn zwj_text(count: usize) -> String {
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".repeat(count)
}

const NARROW: Condition = Condition::new();
const EAST_ASIAN: Condition = Condition::new().with_east_asian_width(true);
const CODEPOINTS: Condition = Condition::new().with_zwj_sequences(false);

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_codepoint_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/codepoint");

    let ranges = [
        ("ascii", 0x00..=0x7F),
        ("bmp", 0x00..=0xFFFF),
        ("all", 0x00..=0x10FFFF),
    ];
    for (name, range) in ranges {
        group.throughput(Throughput::Elements(u64::from(range.end() - range.start() + 1)));
        for (mode, cond) in [("narrow", NARROW), ("east_asian", EAST_ASIAN)] {
            group.bench_with_input(
                BenchmarkId::new(mode, name),
                &range,
                |b, range| {
                    b.iter(|| {
                        let mut total = 0usize;
                        for cp in range.clone() {
                            total += cond.codepoint_width(cp);
                        }
                        black_box(total)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_string_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/string");

    let texts = [
        ("ascii", ascii_text(1000)),
        ("cjk", cjk_text(1000)),
        ("mixed", mixed_text(1000)),
        ("emoji", emoji_text(500)),
        ("zwj", zwj_text(100)),
    ];
    for (name, text) in &texts {
        group.throughput(Throughput::Bytes(text.len() as u64));
        for (mode, cond) in [
            ("narrow", NARROW),
            ("east_asian", EAST_ASIAN),
            ("codepoints", CODEPOINTS),
        ] {
            group.bench_with_input(BenchmarkId::new(mode, name), text, |b, text| {
                b.iter(|| black_box(cond.string_width(text)))
            });
        }
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let text = mixed_text(1000);

    group.bench_function("truncate", |b| {
        b.iter(|| black_box(NARROW.truncate(&text, 80, "...")))
    });
    group.bench_function("wrap", |b| b.iter(|| black_box(NARROW.wrap(&text, 80))));
    group.bench_function("fill_right", |b| {
        b.iter(|| black_box(NARROW.fill_right(&text, 4000)))
    });

    group.finish();
}

fn bench_cache_vs_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_vs_direct");

    let test_strings: Vec<String> = (0..100).map(|i| format!("項目_{i}")).collect();

    group.bench_function("direct", |b| {
        b.iter(|| {
            for s in &test_strings {
                black_box(NARROW.string_width(s));
            }
        })
    });

    group.bench_function("cache_cold", |b| {
        b.iter(|| {
            let mut cache = WidthCache::with_condition(1000, NARROW);
            for s in &test_strings {
                black_box(cache.get_or_compute(s));
            }
        })
    });

    group.bench_function("cache_warm", |b| {
        let mut cache = WidthCache::with_condition(1000, NARROW);
        cache.preload_many(test_strings.iter().map(String::as_str));
        b.iter(|| {
            for s in &test_strings {
                black_box(cache.get_or_compute(s));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_codepoint_width,
    bench_string_width,
    bench_layout,
    bench_cache_vs_direct,
);

criterion_main!(benches);
