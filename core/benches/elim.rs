//! Row reduction benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linea_core::math::{Matrix, Xorshift64};

const SIZES: [usize; 3] = [2, 4, 8];

fn inputs() -> impl Iterator<Item = (usize, Matrix)> {
    let mut rng = Xorshift64::default();
    SIZES.into_iter().map(move |n| {
        let m = Matrix::random(n, n, &mut rng);
        // Dominant diagonal to keep every input invertible
        let m = m.add(&Matrix::identity(n).mul_scalar(n as f64));
        (n, m.unwrap_or_else(|_| Matrix::identity(n)))
    })
}

fn right_triangular(c: &mut Criterion) {
    let mut g = c.benchmark_group("to_right_triangular");
    for (n, m) in inputs() {
        g.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(m).to_right_triangular())
        });
    }
    g.finish();
}

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant");
    for (n, m) in inputs() {
        g.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(m).determinant())
        });
    }
    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");
    for (n, m) in inputs() {
        g.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(m).inverse())
        });
    }
    g.finish();
}

criterion_group!(benches, right_triangular, determinant, inverse);
criterion_main!(benches);
