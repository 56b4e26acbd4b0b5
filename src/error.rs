//! Error type for multiplication preconditions that are rejected rather
//! than left undefined.

use thiserror::Error;

/// Errors returned by [`crate::strassen::multiply`].
///
/// The elementwise and classical operations treat bad dimensions as caller
/// bugs and panic; Strassen's power-of-two requirement is easy to trip from
/// otherwise-valid input, so it is surfaced as a typed error instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Strassen's quadrant split requires the size to halve evenly all the
    /// way down to 1×1.
    #[error("matrix size {n} is not a power of two")]
    NotPowerOfTwo {
        /// The offending size.
        n: usize,
    },

    /// The operands are not the same size.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}
