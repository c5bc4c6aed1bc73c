use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matrix_rref::Matrix;
use rand::prelude::*;

/// A random matrix that is invertible with overwhelming probability:
/// random entries plus a strong diagonal.
fn random_matrix(n: usize, rng: &mut impl Rng) -> Matrix<f64> {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let noise: f64 = rng.random_range(-1.0..1.0);
                    if i == j { noise + n as f64 } else { noise }
                })
                .collect()
        })
        .collect();
    Matrix::try_with(rows).expect("generated rows are rectangular")
}

fn bench_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4, 8, 16] {
        let m = random_matrix(n, &mut rng);
        c.bench_function(&format!("invert_{n}x{n}"), |b| {
            b.iter(|| {
                let inverse = black_box(&m).inverse().expect("matrix is invertible");
                black_box(inverse);
            })
        });
    }
}

criterion_group!(benches, bench_invert);
criterion_main!(benches);
