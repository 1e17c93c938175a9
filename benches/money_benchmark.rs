// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formatting - Locale rendering across grouping styles and digit systems
// 2. Parsing - Tolerant and strict locale parsing
// 3. Arithmetic - Exact multiplication under each rounding mode
// 4. Allocation - Remainder-exact splitting with growing ratio counts
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use money_kit::prelude::*;
use std::hint::black_box;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let cases = [
        ("en-US", "USD"),
        ("en-IN", "INR"),
        ("de-DE", "EUR"),
        ("ar-EG", "EGP"),
    ];

    for (locale, currency) in cases {
        let money = Money::from_minor(-123_456_789_012i64, currency).unwrap();
        group.bench_with_input(BenchmarkId::new("locale", locale), &money, |b, money| {
            b.iter(|| black_box(money.format(Some(locale))));
        });
    }

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("tolerant_en_US", |b| {
        b.iter(|| black_box(Money::parse(black_box("($1,234,567.89)"), "USD", "en-US")))
    });

    group.bench_function("tolerant_de_DE", |b| {
        b.iter(|| black_box(Money::parse(black_box("1.234.567,89 €"), "EUR", "de-DE")))
    });

    let strict = MoneyConfig::strict_input("INR", "en-IN");
    group.bench_function("strict_en_IN", |b| {
        b.iter(|| black_box(Money::parse_with(black_box("12,34,567.89"), &strict)))
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let money = Money::from_major("98765.43", "USD").unwrap();

    for mode in RoundingMode::ALL {
        group.bench_with_input(BenchmarkId::new("mode", mode), &mode, |b, mode| {
            b.iter(|| black_box(money.multiply_with(black_box("0.0825"), None, *mode)))
        });
    }

    group.finish();
}

// ============================================================================
// Allocation Benchmarks
// ============================================================================

fn benchmark_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    let money = Money::from_minor(1_000_000_007i64, "USD").unwrap();

    for count in [2usize, 10, 100] {
        let ratios: Vec<i64> = (1..=count as i64).collect();
        group.bench_with_input(BenchmarkId::new("ratios", count), &ratios, |b, ratios| {
            b.iter(|| black_box(money.allocate(ratios)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_format,
    benchmark_parse,
    benchmark_multiply,
    benchmark_allocate
);
criterion_main!(benches);
