//! Kernel matrix evaluation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rbf_kernels::{Gaussian, Kernel, Matern, PointSet, Polynomial, Wendland};

/// Deterministic pseudo-random points in [0, 1)^dim
fn points(n: usize, dim: usize, seed: u64) -> PointSet {
    let mut state = seed;
    let data = (0..n * dim)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect();
    PointSet::from_flat(data, dim).unwrap()
}

fn bench_kernel_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_matrix");

    let kernels: Vec<Box<dyn Kernel>> = vec![
        Box::new(Gaussian::new(1.0)),
        Box::new(Matern::new(1.0, 2).unwrap()),
        Box::new(Wendland::new(2.0, 2, 3).unwrap()),
        Box::new(Polynomial::new(1.0, 3.0)),
    ];

    for n in [100, 400] {
        let x = points(n, 3, 7);
        for kernel in &kernels {
            group.bench_with_input(BenchmarkId::new(kernel.name(), n), &x, |b, x| {
                b.iter(|| kernel.evaluate(black_box(x), black_box(x)))
            });
        }
    }

    group.finish();
}

fn bench_diagonal(c: &mut Criterion) {
    let x = points(10_000, 3, 11);
    let kernel = Wendland::new(1.0, 4, 3).unwrap();
    c.bench_function("wendland_diagonal_10000", |b| {
        b.iter(|| kernel.diagonal(black_box(&x)))
    });
}

criterion_group!(benches, bench_kernel_matrices, bench_diagonal);
criterion_main!(benches);
