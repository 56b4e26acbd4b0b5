//! Criterion benchmarks for the three multipliers.
//!
//! `cargo bench` pins the inputs with a fixed seed so runs are comparable
//! across machines and commits.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use matcmp::{multiply_ijk, multiply_ikj, random_matrix, strassen};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZE: usize = 64;

fn multiply_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_matrix(SIZE, &mut rng);
    let b = random_matrix(SIZE, &mut rng);

    c.bench_function("classical i-j-k 64", |bencher| {
        bencher.iter(|| multiply_ijk(black_box(&a), black_box(&b)))
    });
    c.bench_function("classical i-k-j 64", |bencher| {
        bencher.iter(|| multiply_ikj(black_box(&a), black_box(&b)))
    });
    c.bench_function("strassen 64", |bencher| {
        bencher.iter(|| strassen::multiply(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, multiply_benchmark);
criterion_main!(benches);
