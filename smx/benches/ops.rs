//! Criterion benchmarks for the three matrix operations

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smx::CooMatrix;

/// Build a random square matrix with roughly `nnz` non-zero entries
fn random_matrix(size: usize, nnz: usize, seed: u64) -> CooMatrix<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = CooMatrix::new(size, size);
    while matrix.nnz() < nnz {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        let value = rng.gen_range(-1000..=1000i64);
        if value != 0 {
            matrix.set(row, col, value);
        }
    }
    matrix
}

fn bench_ops(c: &mut Criterion) {
    let size = 1000;
    for nnz in [1_000, 10_000] {
        let a = random_matrix(size, nnz, 1);
        let b = random_matrix(size, nnz, 2);

        c.bench_with_input(BenchmarkId::new("add", nnz), &nnz, |bencher, _| {
            bencher.iter(|| a.add(&b).unwrap())
        });
        c.bench_with_input(BenchmarkId::new("sub", nnz), &nnz, |bencher, _| {
            bencher.iter(|| a.sub(&b).unwrap())
        });
        c.bench_with_input(BenchmarkId::new("mul", nnz), &nnz, |bencher, _| {
            bencher.iter(|| a.mul(&b).unwrap())
        });
        c.bench_with_input(BenchmarkId::new("par_mul", nnz), &nnz, |bencher, _| {
            bencher.iter(|| smx::parallel::multiply(&a, &b).unwrap())
        });
    }
}

fn bench_codec(c: &mut Criterion) {
    let matrix = random_matrix(1000, 10_000, 3);
    let text = smx::encode(&matrix);

    c.bench_function("encode_10k", |bencher| {
        bencher.iter(|| smx::encode(&matrix))
    });
    c.bench_function("decode_10k", |bencher| {
        bencher.iter(|| smx::decode::<i64>(&text).unwrap())
    });
}

criterion_group!(benches, bench_ops, bench_codec);
criterion_main!(benches);
