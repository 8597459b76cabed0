//! Benchmark of the in-bounds fill-and-sum path.
//!
//! Only in-bounds counts are measured; oversized counts are undefined
//! behavior and have no meaningful cost to report.

use criterion::{criterion_group, criterion_main, Criterion};
use overrun_core::{run, BufferConfig};

fn bench_lesson(c: &mut Criterion) {
    let config = BufferConfig::default();
    c.bench_function("run_in_bounds_n5", |b| {
        b.iter(|| run(&config, 5, &mut std::io::sink()).unwrap());
    });
}

criterion_group!(benches, bench_lesson);
criterion_main!(benches);
