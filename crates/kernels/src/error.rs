use thiserror::Error;

/// An error type for the matrix kernels.
#[derive(Error, Debug, PartialEq)]
pub enum KernelError {
    /// The inner dimensions of a matrix product do not agree.
    #[error("Dimension mismatch: lhs has {0} columns but rhs has {1} rows")]
    DimensionMismatch(usize, usize),

    /// A buffer is shorter than its declared dimensions require.
    #[error("Length mismatch: expected a buffer of at least {0} elements, got {1}")]
    LengthMismatch(usize, usize),
}
