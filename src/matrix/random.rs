//! Random matrix generation.
//!
//! The generator is an explicit parameter rather than a process-wide
//! time-seeded stream, so benchmark runs and tests can be made repeatable
//! by seeding.

use rand::Rng;

use crate::matrix::dense::Matrix;

/// Fill an n×n matrix with values drawn uniformly from 0 through 9.
///
/// Single-digit entries keep classical accumulation far from the `i64`
/// overflow boundary even at the largest benchmark sizes.
pub fn random_matrix<R: Rng>(n: usize, rng: &mut R) -> Matrix {
    let mut m = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            m[i][j] = rng.gen_range(0..=9);
        }
    }
    m
}
