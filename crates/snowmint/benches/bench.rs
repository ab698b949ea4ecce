use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use snowmint::{Clock, EPOCH_MILLIS, SnowflakeGenerator};
use std::sync::Barrier;
use std::thread::scope;
use std::time::Instant;

/// A frozen clock: every mint stays in one millisecond, so a fresh generator
/// can emit exactly one full sequence (4096 IDs) without ever spinning.
struct FixedMockTime {
    millis: i64,
}

impl Clock for FixedMockTime {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded). One full sequence worth.
const TOTAL_IDS: usize = 4096;

/// Benchmarks the hot path in isolation: lock, compare, increment, compose.
fn bench_hot_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_id/fixed_clock");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = SnowflakeGenerator::with_clock(
                    0,
                    FixedMockTime {
                        millis: EPOCH_MILLIS + 1,
                    },
                )
                .expect("machine id 0 is valid");
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id().expect("fixed clock cannot regress"));
                }
            }

            start.elapsed()
        });
    });
    group.finish();
}

/// Benchmarks minting against the real wall clock, including the occasional
/// sequence-overflow spin into the next millisecond.
fn bench_wall_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_id/wall_clock");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let generator = SnowflakeGenerator::new(0).expect("machine id 0 is valid");
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.next_id().expect("wall clock should not regress"));
            }
        });
    });
    group.finish();
}

/// Benchmarks lock contention: several threads minting from one instance.
fn bench_contended(c: &mut Criterion) {
    const THREADS: usize = 4;

    let mut group = c.benchmark_group("next_id/contended");
    group.throughput(Throughput::Elements((TOTAL_IDS * THREADS) as u64));

    group.bench_function(format!("threads/{THREADS}"), |b| {
        b.iter_custom(|iters| {
            let generator = SnowflakeGenerator::new(0).expect("machine id 0 is valid");
            let barrier = Barrier::new(THREADS);
            let start = Instant::now();

            for _ in 0..iters {
                scope(|s| {
                    for _ in 0..THREADS {
                        let generator = &generator;
                        let barrier = &barrier;
                        s.spawn(move || {
                            barrier.wait();
                            for _ in 0..TOTAL_IDS {
                                black_box(
                                    generator.next_id().expect("wall clock should not regress"),
                                );
                            }
                        });
                    }
                });
            }

            start.elapsed()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hot_path, bench_wall_clock, bench_contended);
criterion_main!(benches);
