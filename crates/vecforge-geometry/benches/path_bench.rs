//! Benchmarks for path queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vecforge_geometry::generators::{polygon, star};
use vecforge_geometry::{parse_path_data, Path, Point};

fn curvy_path() -> Path {
    parse_path_data(
        "M10 80 C40 10 65 10 95 80 S150 150 180 80 Q210 20 240 80 T300 80 \
         A40 40 0 1 1 380 80 Z",
    )
    .unwrap_or_default()
}

fn bench_queries(c: &mut Criterion) {
    let path = curvy_path();

    c.bench_function("path_length", |b| b.iter(|| black_box(&path).length()));

    c.bench_function("path_bounds", |b| b.iter(|| black_box(&path).bounds()));

    c.bench_function("path_point_cached", |b| {
        let lengths = path.segment_lengths(true, 10);
        b.iter(|| black_box(&path).point_with(black_box(0.37), &lengths))
    });

    c.bench_function("path_contains", |b| {
        b.iter(|| black_box(&path).contains(black_box(120.0), black_box(70.0)))
    });
}

fn bench_resample(c: &mut Criterion) {
    let shape = star(Point::ZERO, 12, 200.0, 80.0);
    c.bench_function("resample_by_amount_100", |b| {
        b.iter(|| black_box(&shape).resample_by_amount(black_box(100), false))
    });

    let poly = polygon(Point::ZERO, 100.0, 64, true);
    c.bench_function("resample_by_length_5", |b| {
        b.iter(|| black_box(&poly).resample_by_length(black_box(5.0)))
    });
}

fn bench_parse(c: &mut Criterion) {
    let data = curvy_path().to_path_data();
    c.bench_function("parse_path_data", |b| {
        b.iter(|| parse_path_data(black_box(&data)))
    });
}

criterion_group!(benches, bench_queries, bench_resample, bench_parse);
criterion_main!(benches);
