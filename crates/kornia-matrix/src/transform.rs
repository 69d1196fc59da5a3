//! Transform builders.
//!
//! All angles are in degrees. Rotations are right-handed: looking down the rotation
//! axis towards the origin, a positive angle turns counter-clockwise. With the row
//! vector convention, `(0, 1, 0) * Mat3F32::x_rotation(90.0)` is `(0, 0, 1)`.

use crate::utils::{deg_to_rad, nearly_eq};
use crate::{Mat3F32, Mat4F32, Vec3F32};

impl Mat3F32 {
    /// Rotation of `degrees` about the x axis.
    pub fn x_rotation(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self([
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        ])
    }

    /// Rotation of `degrees` about the y axis.
    pub fn y_rotation(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self([
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c,
        ])
    }

    /// Rotation of `degrees` about the z axis.
    pub fn z_rotation(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Euler rotation, applying roll (z) first, then pitch (x), then yaw (y).
    pub fn rotation(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::z_rotation(roll) * Self::x_rotation(pitch) * Self::y_rotation(yaw)
    }

    /// Rotation of `degrees` about an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis does not need to be unit length; it is normalized unless its squared
    /// length is already nearly one. A zero axis yields a non-finite matrix.
    pub fn axis_angle(axis: Vec3F32, degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let t = 1.0 - c;

        let axis = if nearly_eq(axis.length_squared(), 1.0) {
            axis
        } else {
            axis.normalize()
        };
        let Vec3F32 { x, y, z } = axis;

        Self([
            t * x * x + c,
            t * x * y + s * z,
            t * x * z - s * y,
            t * x * y - s * z,
            t * y * y + c,
            t * y * z + s * x,
            t * x * z + s * y,
            t * y * z - s * x,
            t * z * z + c,
        ])
    }
}

impl Mat4F32 {
    /// Translation by `(x, y, z)`.
    #[inline]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0,
        ])
    }

    /// Translation by `t`.
    #[inline]
    pub fn from_translation(t: Vec3F32) -> Self {
        Self::translation(t.x, t.y, t.z)
    }

    /// Translation stored in the last row.
    #[inline]
    pub fn extract_translation(&self) -> Vec3F32 {
        Vec3F32::new(self.0[12], self.0[13], self.0[14])
    }

    /// Scale by `(x, y, z)`.
    #[inline]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_diagonal([x, y, z, 1.0])
    }

    /// Scale by `s`.
    #[inline]
    pub fn from_scale(s: Vec3F32) -> Self {
        Self::scale(s.x, s.y, s.z)
    }

    /// Scale stored on the diagonal.
    ///
    /// Only exact for matrices without rotation.
    #[inline]
    pub fn extract_scale(&self) -> Vec3F32 {
        Vec3F32::new(self.0[0], self.0[5], self.0[10])
    }

    /// Rotation of `degrees` about the x axis.
    pub fn x_rotation(degrees: f32) -> Self {
        Self::from_mat3(Mat3F32::x_rotation(degrees))
    }

    /// Rotation of `degrees` about the y axis.
    pub fn y_rotation(degrees: f32) -> Self {
        Self::from_mat3(Mat3F32::y_rotation(degrees))
    }

    /// Rotation of `degrees` about the z axis.
    pub fn z_rotation(degrees: f32) -> Self {
        Self::from_mat3(Mat3F32::z_rotation(degrees))
    }

    /// Euler rotation, applying roll (z) first, then pitch (x), then yaw (y).
    pub fn rotation(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::z_rotation(roll) * Self::x_rotation(pitch) * Self::y_rotation(yaw)
    }

    /// Rotation of `degrees` about an arbitrary axis, see [`Mat3F32::axis_angle`].
    pub fn axis_angle(axis: Vec3F32, degrees: f32) -> Self {
        Self::from_mat3(Mat3F32::axis_angle(axis, degrees))
    }

    /// Scale, then rotate by Euler angles `(pitch, yaw, roll)`, then translate.
    pub fn transform(scale: Vec3F32, euler_rotation: Vec3F32, translate: Vec3F32) -> Self {
        Self::from_scale(scale)
            * Self::rotation(euler_rotation.x, euler_rotation.y, euler_rotation.z)
            * Self::from_translation(translate)
    }

    /// Scale, then rotate about `axis` by `degrees`, then translate.
    pub fn transform_axis_angle(
        scale: Vec3F32,
        axis: Vec3F32,
        degrees: f32,
        translate: Vec3F32,
    ) -> Self {
        Self::from_scale(scale) * Self::axis_angle(axis, degrees) * Self::from_translation(translate)
    }
}
