//! Benchmarks for kurtstream estimators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kurtstream::statistics::{ChannelBank, RollingKurtosis, RunningStats};
use kurtstream::validation::BatchMoments;
use kurtstream::window::RingBuffer;

/// Deterministic pseudo-uniform samples in [0, 1)
fn samples(len: usize) -> Vec<f64> {
    let mut state = 0x853c49e6748fea9bu64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

// ============================================================================
// Per-tick update: incremental vs recomputation
// ============================================================================

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_kurtosis");
    group.throughput(Throughput::Elements(1));

    let stream = samples(10_000);

    for capacity in [100, 500, 1000, 5000] {
        group.bench_with_input(
            BenchmarkId::new("incremental", capacity),
            &capacity,
            |b, &capacity| {
                let mut rk = RollingKurtosis::new(capacity).unwrap();
                rk.extend(stream.iter().copied());
                let mut i = 0;
                b.iter(|| {
                    let k = rk.update(stream[i]);
                    i = (i + 1) % stream.len();
                    black_box(k)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("recompute", capacity),
            &capacity,
            |b, &capacity| {
                let mut ring = RingBuffer::new(capacity).unwrap();
                for &x in &stream {
                    ring.insert(x);
                }
                let mut scratch = Vec::with_capacity(capacity);
                let mut i = 0;
                b.iter(|| {
                    ring.insert(stream[i]);
                    i = (i + 1) % stream.len();
                    scratch.clear();
                    scratch.extend(ring.iter().copied());
                    black_box(BatchMoments::from_window(&scratch).kurtosis())
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Cumulative and multi-channel
// ============================================================================

fn bench_running(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");
    group.throughput(Throughput::Elements(1));

    let stream = samples(10_000);

    group.bench_function("add", |b| {
        let mut stats = RunningStats::new();
        let mut i = 0;
        b.iter(|| {
            stats.add(black_box(stream[i]));
            i = (i + 1) % stream.len();
        });
    });

    group.finish();
}

fn bench_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_bank");
    group.throughput(Throughput::Elements(3));

    let stream = samples(30_000);

    group.bench_function("xyz_frame_w500", |b| {
        let mut bank = ChannelBank::new(3, 500).unwrap();
        let mut i = 0;
        b.iter(|| {
            let frame = [stream[i], stream[i + 1], stream[i + 2]];
            i = (i + 3) % (stream.len() - 2);
            black_box(bank.update(&frame).unwrap()[0])
        });
    });

    group.finish();
}

criterion_group!(benches, bench_update, bench_running, bench_channels);
criterion_main!(benches);
