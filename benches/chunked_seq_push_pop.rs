//! Criterion benchmarks for push/pop at both ends of [`Deque`].
//!
//! ## Workloads
//!
//! - **Construction**: building a deque of `size` items via `push_back`
//! - **Random end ops**: a mix of push/pop at the front and back
//! - **Micro**: a single `push_back`/`pop_back` on an already-warm deque
//!
//! ## Configuration
//!
//! - `BENCH_SMALL_SIZE`: Default 100
//! - `BENCH_LARGE_SIZE`: Default 10,000
//! - `BENCH_SKIP_LARGE`: Set to "1" to skip large size benchmarks

use chunked_seq::Deque;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::env;

/// Simple deterministic LCG for reproducible pseudo-random sequences.
#[derive(Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    #[inline]
    fn gen_bool(&mut self) -> bool {
        self.next_u64() % 2 == 0
    }
}

struct BenchConfig {
    sizes: Vec<usize>,
}

impl BenchConfig {
    fn from_env() -> Self {
        let small_size = env::var("BENCH_SMALL_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);
        let large_size = env::var("BENCH_LARGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10_000);
        let skip_large = env::var("BENCH_SKIP_LARGE")
            .map(|s| s == "1")
            .unwrap_or(false);

        let mut sizes = vec![small_size];
        if !skip_large {
            sizes.push(large_size);
        }
        Self { sizes }
    }
}

const OPS: usize = 1_000;

fn benchmark_construction(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    size: usize,
) {
    group.bench_with_input(BenchmarkId::new("push_back_construct", size), &size, |b, &s| {
        b.iter(|| {
            let mut d: Deque<i64> = Deque::new();
            for i in 0..s {
                d.push_back(i as i64);
            }
            black_box(d);
        })
    });
}

fn benchmark_random_end_ops(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    size: usize,
) {
    let mut rng = Lcg::new(0xDEADBEEF_u64.wrapping_add(size as u64));
    // true = push, false = pop; alternating ends independently
    let script: Vec<(bool, bool)> = (0..OPS).map(|_| (rng.gen_bool(), rng.gen_bool())).collect();

    group.bench_with_input(BenchmarkId::new("random_end_ops", size), &size, |b, &s| {
        b.iter_batched(
            || {
                let mut d: Deque<i64> = Deque::new();
                for i in 0..s {
                    d.push_back(i as i64);
                }
                (d, script.clone())
            },
            |(mut d, ops)| {
                for (is_push, is_back) in ops {
                    match (is_push, is_back) {
                        (true, true) => d.push_back(0),
                        (true, false) => d.push_front(0),
                        (false, true) => {
                            d.pop_back();
                        }
                        (false, false) => {
                            d.pop_front();
                        }
                    }
                }
                black_box(d.len());
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_micro_ops(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    size: usize,
) {
    group.bench_with_input(BenchmarkId::new("micro_push_pop_back", size), &size, |b, &s| {
        b.iter_batched(
            || {
                let mut d: Deque<i64> = Deque::new();
                for i in 0..s {
                    d.push_back(i as i64);
                }
                d
            },
            |mut d| {
                d.push_back(1);
                black_box(d.pop_back());
            },
            BatchSize::SmallInput,
        )
    });
}

fn push_pop_benchmarks(c: &mut Criterion) {
    let config = BenchConfig::from_env();
    let mut group = c.benchmark_group("chunked_seq_push_pop");
    group.sample_size(30);
    group.measurement_time(std::time::Duration::from_secs(10));

    for &size in &config.sizes {
        eprintln!("Benchmarking Deque push/pop with size: {}", size);
        benchmark_construction(&mut group, size);
        benchmark_random_end_ops(&mut group, size);
        benchmark_micro_ops(&mut group, size);
    }

    group.finish();
}

criterion_group!(benches, push_pop_benchmarks);
criterion_main!(benches);
