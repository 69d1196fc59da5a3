//! 3D vector (single precision).

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    glam::Vec3,
    [f32; 3],
    [x, y, z]
);

impl Vec3F32 {
    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Cross product between two vectors.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::from(glam::Vec3::from(self).cross(glam::Vec3::from(rhs)))
    }
}

#[cfg(all(test, feature = "approx"))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_basic() {
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_from_array() {
        let v = Vec3F32::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vec3_conversion() {
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        let glam_v: glam::Vec3 = v.into();
        let back: Vec3F32 = glam_v.into();
        assert_eq!(v, back);
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3F32::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_vec3_normalize() {
        let n = Vec3F32::new(0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(n, Vec3F32::new(0.0, 0.6, 0.8), epsilon = 1e-6);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let a = Vec3F32::new(1.0, 2.0, 3.0);
        let b = Vec3F32::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3F32::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3F32::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vec3F32::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3F32::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Vec3F32::X.cross(Vec3F32::Y), Vec3F32::Z);
        assert_eq!(Vec3F32::Y.cross(Vec3F32::X), -Vec3F32::Z);
    }
}
