#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! All kernels work on flat, row-major buffers where the element at `(row, col)`
//! of a matrix with `cols` columns lives at index `cols * row + col`.

/// Error types for the kernels module.
pub mod error;

/// module containing ops implementations.
pub mod ops;
