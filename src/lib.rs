//! Classical vs Strassen matrix multiplication, benchmarked head to head.
//!
//! I wrote this to see where Strassen's O(n^2.807) divide-and-conquer
//! actually starts beating the O(n^3) triple loop on a real machine. The
//! answer depends less on asymptotics than on constant factors: Strassen
//! trades one multiplication per level for a pile of additions and
//! temporary matrices, and the classical loop can be made surprisingly
//! fast just by reordering its loops for sequential memory access.
//!
//! ## Usage
//!
//! ```
//! use matcmp::{Matrix, multiply, strassen};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//!
//! let c = multiply(&a, &b);
//! assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]));
//! assert_eq!(c, strassen::multiply(&a, &b).unwrap());
//! ```
//!
//! ## What's inside
//!
//! - Classical multiplication in both i-j-k and i-k-j loop orders
//! - Recursive Strassen multiplication down to a 1×1 base case
//! - A timing driver that sweeps power-of-two sizes and writes a CSV report
//!
//! All entries are `i64` (see [`Entry`]); with the digit-valued matrices the
//! benchmark generates, sums never get near the overflow boundary.

pub mod classical;
pub mod error;
pub mod matrix;
pub mod report;
pub mod strassen;

pub use classical::ijk::multiply_ijk;
pub use classical::ikj::multiply_ikj;
pub use error::Error;
pub use matrix::dense::{Entry, Matrix};
pub use matrix::random::random_matrix;

/// Multiply two square matrices: C = A * B.
///
/// Uses the cache-friendly i-k-j loop order. For the slow textbook order or
/// the divide-and-conquer algorithm, call the variant modules directly.
///
/// # Panics
///
/// Panics if the operands are not the same size.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    classical::ikj::multiply_ikj(a, b)
}
