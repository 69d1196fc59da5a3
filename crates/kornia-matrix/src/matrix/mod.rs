//! Matrix types module.
//!
//! This module provides the fixed-size matrix types:
//! - Mat2F32: 2x2 matrix
//! - Mat3F32: 3x3 matrix
//! - Mat4F32: 4x4 matrix

#[macro_use]
mod mat;

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Mat2F32;
pub use mat3::Mat3F32;
pub use mat4::Mat4F32;
