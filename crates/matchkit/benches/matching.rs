//! Matching benchmarks for matchkit.
//!
//! Each scenario runs once through `Match`/`evaluate` and once as a
//! hand-written `match`, so the overhead of pattern values is visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchkit::{
    between, err, ge, gt, literal, lt, none, ok, some, tags, Match, PackedPattern, Pattern,
    TaggedOption, TaggedResult, WILDCARD,
};

fn divide(a: f64, b: f64) -> TaggedResult<f64, &'static str> {
    if b == 0.0 {
        err("division by zero")
    } else {
        ok(a / b)
    }
}

fn lookup(key: u32) -> TaggedOption<u32> {
    if key % 3 == 0 {
        none()
    } else {
        some(key * 2)
    }
}

fn bench_simple_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_matching");

    group.bench_function("match", |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for value in 0..1000_i64 {
                total += Match::on(&black_box(value))
                    .when(literal(42), |_| 1)
                    .when(gt(500), |_| 2)
                    .when(between(10, 20), |_| 3)
                    .otherwise(|_| 0);
            }
            total
        });
    });

    group.bench_function("handwritten", |b| {
        b.iter(|| {
            let mut total = 0_i64;
            for value in 0..1000_i64 {
                total += match black_box(value) {
                    42 => 1,
                    v if v > 500 => 2,
                    10..=20 => 3,
                    _ => 0,
                };
            }
            total
        });
    });

    group.finish();
}

fn bench_error_handling(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_handling");

    group.bench_function("match", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..1000_u32 {
                let result = divide(100.0, f64::from(black_box(i) % 10));
                total += Match::on(&result)
                    .when_variant::<{ tags::OK }>(|v| *v)
                    .otherwise(|_| 0.0);
            }
            total
        });
    });

    group.bench_function("handwritten", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 0..1000_u32 {
                total += match divide(100.0, f64::from(black_box(i) % 10)) {
                    TaggedResult::Ok(v) => v,
                    TaggedResult::Err(_) => 0.0,
                };
            }
            total
        });
    });

    group.finish();
}

fn bench_optional_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional_values");

    group.bench_function("match", |b| {
        b.iter(|| {
            let mut total = 0_u32;
            for key in 0..1000_u32 {
                total += lookup(black_box(key)).unwrap_or(0);
            }
            total
        });
    });

    group.bench_function("handwritten", |b| {
        b.iter(|| {
            let mut total = 0_u32;
            for key in 0..1000_u32 {
                let key = black_box(key);
                total += if key % 3 == 0 { 0 } else { key * 2 };
            }
            total
        });
    });

    group.finish();
}

fn bench_row_arity(c: &mut Criterion) {
    let mut group = c.benchmark_group("rows");

    let pair = (black_box(15_i32), black_box(-3_i32));
    group.bench_with_input(BenchmarkId::new("arity", 2), &pair, |b, subject| {
        b.iter(|| {
            Match::on(subject)
                .when([lt(0), WILDCARD], |_| 1)
                .when([between(10, 20), lt(0)], |_| 2)
                .otherwise(|_| 0)
        });
    });

    let quad = (black_box(1_i32), black_box(2_u8), black_box('c'), black_box(true));
    group.bench_with_input(BenchmarkId::new("arity", 4), &quad, |b, subject| {
        b.iter(|| {
            Match::on(subject)
                .when([ge(0), ge(0), literal(99), WILDCARD], |_| 1)
                .when([WILDCARD, WILDCARD, WILDCARD, literal(1)], |_| 2)
                .otherwise(|_| 0)
        });
    });

    group.finish();
}

fn bench_packed_codec(c: &mut Criterion) {
    let patterns: Vec<Pattern> = vec![gt(30), between(-5, 5), literal(-1), WILDCARD, literal(7)];

    c.bench_function("packed/round_trip", |b| {
        b.iter(|| {
            patterns
                .iter()
                .filter_map(|p| PackedPattern::encode(black_box(p)).ok())
                .filter_map(|w| w.decode().ok())
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_simple_matching,
    bench_error_handling,
    bench_optional_values,
    bench_row_arity,
    bench_packed_codec,
);
criterion_main!(benches);
