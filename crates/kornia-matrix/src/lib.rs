#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Matrix
//!
//! Fixed-size 2x2, 3x3 and 4x4 single precision matrices for real-time graphics and physics.
//!
//! Matrices are stored as flat row-major arrays and follow the **row vector** convention:
//! a point is transformed as `p * M`, translation lives in the last row, and `A * B`
//! applies `A` first. All angles taken by the transform builders are in degrees.
//!
//! ## Example
//!
//! ```rust
//! use kornia_matrix::{Mat4F32, Vec3F32};
//!
//! let model = Mat4F32::scale(2.0, 2.0, 2.0)
//!     * Mat4F32::z_rotation(90.0)
//!     * Mat4F32::translation(1.0, 2.0, 3.0);
//!
//! let p = model.transform_point(Vec3F32::new(1.0, 0.0, 0.0));
//! assert!((p.x - 1.0).abs() < 1e-5);
//! assert!((p.y - 4.0).abs() < 1e-5);
//! assert!((p.z - 3.0).abs() < 1e-5);
//!
//! let inv = model.inverse();
//! let back = inv.transform_point(p);
//! assert!((back.x - 1.0).abs() < 1e-5);
//! ```

mod error;
mod matrix;
mod transform;
mod vector;

/// Scalar helpers shared by the matrix operations.
pub mod utils;

pub use error::MatrixError;
pub use matrix::{Mat2F32, Mat3F32, Mat4F32};
pub use vector::{Vec3F32, Vec4F32};

// Type aliases for the default (single) precision.
/// 2x2 matrix alias.
pub type Mat2 = Mat2F32;
/// 3x3 matrix alias.
pub type Mat3 = Mat3F32;
/// 4x4 matrix alias.
pub type Mat4 = Mat4F32;
/// 3D vector alias.
pub type Vec3 = Vec3F32;
/// 4D vector alias.
pub type Vec4 = Vec4F32;
