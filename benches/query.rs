//! Benchmarks for cache decode and temporal queries.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mdd_cache::{Frame, FrameCache, Point3, codec};

fn build_cache(frame_count: usize, point_count: usize) -> FrameCache {
    let mut cache = FrameCache::new();
    for i in 0..frame_count {
        let time = i as f32 / 30.0;
        let points = (0..point_count)
            .map(|p| Point3::new(p as f32, time, -(p as f32)))
            .collect();
        cache.insert_frame(Frame::new(time, points));
    }
    cache
}

fn bench_interpolated_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolated_frame_at_time");

    for point_count in [100, 1000, 10000] {
        let cache = build_cache(120, point_count);
        let mid = cache.approximate_duration() / 2.0;

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("120x{}", point_count)),
            &point_count,
            |b, _| {
                b.iter(|| cache.interpolated_frame_at_time(black_box(mid)));
            },
        );
    }

    group.finish();
}

fn bench_frame_index_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_index_at_time");

    for frame_count in [16, 256, 4096] {
        let cache = build_cache(frame_count, 1);
        let mid = cache.approximate_duration() / 2.0;

        group.bench_with_input(
            BenchmarkId::from_parameter(frame_count),
            &frame_count,
            |b, _| {
                b.iter(|| cache.frame_index_at_time(black_box(mid)));
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for point_count in [100, 1000, 10000] {
        let cache = build_cache(120, point_count);
        let bytes = codec::encode(&cache, 1.0).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("120x{}", point_count)),
            &point_count,
            |b, _| {
                b.iter(|| codec::decode(black_box(&bytes), 1.0));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_interpolated_query,
    bench_frame_index_lookup,
    bench_decode
);
criterion_main!(benches);
