use crate::matrix::dense::Matrix;

/// Classical multiplication in the textbook i-j-k loop order.
///
/// Each entry of C is computed as a complete dot product before moving on.
/// The innermost loop reads B with stride n (a column walk), touching a new
/// cache line on every iteration, which is why this order falls behind
/// [`ikj`](crate::classical::ikj::multiply_ikj) as n grows.
///
/// Kept as the baseline the reordered variant is measured against.
///
/// # Panics
///
/// Panics if the operands are not the same size.
pub fn multiply_ijk(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(
        a.size(),
        b.size(),
        "multiply on {0}x{0} and {1}x{1} operands",
        a.size(),
        b.size()
    );
    let n = a.size();
    let mut c = Matrix::zeros(n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    c
}
