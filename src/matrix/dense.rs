//! Dense square-matrix storage and elementwise arithmetic.

use std::ops::{Index, IndexMut};

/// The entry type used by every matrix in this crate.
///
/// The benchmark fills matrices with single digits, so a classical product
/// entry is bounded by `81 * n`; `i64` leaves that bound many orders of
/// magnitude of headroom at any size a run could finish.
pub type Entry = i64;

/// A square matrix of [`Entry`] values, stored row-major in one flat
/// allocation.
///
/// Matrices are plain values: operations borrow their operands and return a
/// freshly allocated result, so two logical matrices never alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<Entry>,
}

impl Matrix {
    /// All-zero n×n matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[i][i] = 1;
        }
        m
    }

    /// Build a matrix from nested row vectors.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square grid.
    pub fn from_rows(rows: Vec<Vec<Entry>>) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            assert_eq!(row.len(), n, "expected {} columns per row", n);
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    /// Side length n of this n×n matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Mutable view of row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [Entry] {
        let start = i * self.n;
        &mut self.data[start..start + self.n]
    }

    /// Elementwise sum: `C[i][j] = A[i][j] + B[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if the operands are not the same size.
    pub fn add(&self, other: &Matrix) -> Matrix {
        self.elementwise(other, |a, b| a + b)
    }

    /// Elementwise difference: `C[i][j] = A[i][j] - B[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if the operands are not the same size.
    pub fn sub(&self, other: &Matrix) -> Matrix {
        self.elementwise(other, |a, b| a - b)
    }

    fn elementwise<F>(&self, other: &Matrix, op: F) -> Matrix
    where
        F: Fn(Entry, Entry) -> Entry,
    {
        assert_eq!(
            self.n, other.n,
            "elementwise op on {}x{} and {}x{} matrices",
            self.n, self.n, other.n, other.n
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Matrix { n: self.n, data }
    }
}

impl Index<usize> for Matrix {
    type Output = [Entry];

    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.n;
        &self.data[start..start + self.n]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.n;
        &mut self.data[start..start + self.n]
    }
}
