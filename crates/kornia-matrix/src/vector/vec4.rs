//! 4D vector (single precision).

define_vector_type!(
    /// 4D vector (single precision).
    ///
    /// Mostly used as a homogeneous point or direction multiplied by a `Mat4F32`.
    Vec4F32,
    glam::Vec4,
    [f32; 4],
    [x, y, z, w]
);

impl Vec4F32 {
    /// Homogeneous point (w = 1) from a 3D position.
    #[inline]
    pub fn from_point(p: crate::Vec3F32) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Drops the w component.
    #[inline]
    pub fn truncate(self) -> crate::Vec3F32 {
        crate::Vec3F32::new(self.x, self.y, self.z)
    }
}
