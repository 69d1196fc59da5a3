//! Vector types module.
//!
//! - Vec3F32: 3D vector
//! - Vec4F32: 4D vector, used for homogeneous points

#[macro_use]
mod vec;

mod vec3;
mod vec4;

pub use vec3::Vec3F32;
pub use vec4::Vec4F32;
