//! Criterion comparison of the three execution strategies.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use forkmul::process::{multiply_cells, multiply_rows};
use forkmul::{DEFAULT_SEED, multiply_naive, populate, strassen};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for &n in &[64usize, 128, 256] {
        let (a, b) = populate(n, DEFAULT_SEED);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut out = vec![0.0; n * n];
                multiply_naive(&a, &b, &mut out, n);
                black_box(out)
            })
        });

        group.bench_with_input(BenchmarkId::new("strassen", n), &n, |bench, &n| {
            bench.iter(|| black_box(strassen::multiply(&a, &b, n)))
        });

        group.bench_with_input(BenchmarkId::new("parallel-row", n), &n, |bench, &n| {
            bench.iter(|| black_box(multiply_rows(&a, &b, n, 4).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("parallel-cell", n), &n, |bench, &n| {
            bench.iter(|| black_box(multiply_cells(&a, &b, n, 4).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
