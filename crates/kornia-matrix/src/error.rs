use thiserror::Error;

/// An error type for the matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// The determinant is too close to zero for the matrix to be inverted.
    #[error("Singular matrix: determinant {0} is nearly zero")]
    Singular(f32),
}
