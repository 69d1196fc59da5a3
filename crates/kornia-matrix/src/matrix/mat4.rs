//! 4x4 matrix (single precision).

use crate::{Mat3F32, Vec3F32, Vec4F32};

define_matrix_type!(
    /// 4x4 matrix (single precision), stored row-major.
    ///
    /// Affine transforms keep their translation in the last row.
    Mat4F32,
    4,
    16,
    glam::Mat4
);

impl Mat4F32 {
    /// Submatrix left after removing row `row` and column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 3.
    pub fn cut(&self, row: usize, col: usize) -> Mat3F32 {
        assert!(row < 4 && col < 4, "cut index ({row}, {col}) out of bounds");

        let mut out = Mat3F32::ZERO;
        let kept = (0..4)
            .filter(|&i| i != row)
            .flat_map(|i| (0..4).filter(move |&j| j != col).map(move |j| 4 * i + j));
        for (dst, src) in out.0.iter_mut().zip(kept) {
            *dst = self.0[src];
        }
        out
    }

    /// Matrix of minors: entry `(i, j)` is the determinant of `cut(i, j)`.
    pub fn minor(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out[(i, j)] = self.cut(i, j).determinant();
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let cofactor = self.cofactor();
        (0..4).map(|j| self.0[j] * cofactor.0[j]).sum()
    }

    /// Inverse from the expanded closed form.
    ///
    /// The cofactor expansion is written out in terms of the twelve 2x2 determinants
    /// of the top (`s*`) and bottom (`c*`) row pairs. Gives the same result as
    /// [`Self::inverse`], including the zero matrix for singular input.
    ///
    /// The singularity check uses the determinant computed from those
    /// sub-determinants, which can differ from [`Self::determinant`] by rounding.
    /// For a determinant right at the [`crate::utils::nearly_eq`] threshold one
    /// path may return the zero matrix while the other returns a finite inverse.
    pub fn inverse_exp(&self) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;

        let s0 = a00 * a11 - a10 * a01;
        let s1 = a00 * a12 - a10 * a02;
        let s2 = a00 * a13 - a10 * a03;
        let s3 = a01 * a12 - a11 * a02;
        let s4 = a01 * a13 - a11 * a03;
        let s5 = a02 * a13 - a12 * a03;

        let c5 = a22 * a33 - a32 * a23;
        let c4 = a21 * a33 - a31 * a23;
        let c3 = a21 * a32 - a31 * a22;
        let c2 = a20 * a33 - a30 * a23;
        let c1 = a20 * a32 - a30 * a22;
        let c0 = a20 * a31 - a30 * a21;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if crate::utils::nearly_eq(det, 0.0) {
            log::debug!("Mat4F32: singular matrix, det = {det}");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;

        Self([
            (a11 * c5 - a12 * c4 + a13 * c3) * inv_det,
            (-a01 * c5 + a02 * c4 - a03 * c3) * inv_det,
            (a31 * s5 - a32 * s4 + a33 * s3) * inv_det,
            (-a21 * s5 + a22 * s4 - a23 * s3) * inv_det,
            (-a10 * c5 + a12 * c2 - a13 * c1) * inv_det,
            (a00 * c5 - a02 * c2 + a03 * c1) * inv_det,
            (-a30 * s5 + a32 * s2 - a33 * s1) * inv_det,
            (a20 * s5 - a22 * s2 + a23 * s1) * inv_det,
            (a10 * c4 - a11 * c2 + a13 * c0) * inv_det,
            (-a00 * c4 + a01 * c2 - a03 * c0) * inv_det,
            (a30 * s4 - a31 * s2 + a33 * s0) * inv_det,
            (-a20 * s4 + a21 * s2 - a23 * s0) * inv_det,
            (-a10 * c3 + a11 * c1 - a12 * c0) * inv_det,
            (a00 * c3 - a01 * c1 + a02 * c0) * inv_det,
            (-a30 * s3 + a31 * s1 - a32 * s0) * inv_det,
            (a20 * s3 - a21 * s1 + a22 * s0) * inv_det,
        ])
    }

    /// Embed a 3x3 matrix in the upper-left block of an identity matrix.
    #[inline]
    pub fn from_mat3(m: Mat3F32) -> Self {
        let [a, b, c, d, e, f, g, h, i] = m.0;
        Self([
            a, b, c, 0.0, //
            d, e, f, 0.0, //
            g, h, i, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Upper-left 3x3 block.
    #[inline]
    pub fn to_mat3(&self) -> Mat3F32 {
        self.cut(3, 3)
    }

    /// Transform a point (w = 1), picking up the translation row.
    #[inline]
    pub fn transform_point(&self, p: Vec3F32) -> Vec3F32 {
        (Vec4F32::from_point(p) * *self).truncate()
    }

    /// Transform a direction (w = 0), ignoring the translation row.
    #[inline]
    pub fn transform_vector(&self, v: Vec3F32) -> Vec3F32 {
        (Vec4F32::new(v.x, v.y, v.z, 0.0) * *self).truncate()
    }
}

// Row vector times matrix.
impl std::ops::Mul<Mat4F32> for Vec4F32 {
    type Output = Vec4F32;

    #[inline]
    fn mul(self, rhs: Mat4F32) -> Self::Output {
        let m = &rhs.0;
        let [x, y, z, w] = self.to_array();
        Vec4F32::new(
            x * m[0] + y * m[4] + z * m[8] + w * m[12],
            x * m[1] + y * m[5] + z * m[9] + w * m[13],
            x * m[2] + y * m[6] + z * m[10] + w * m[14],
            x * m[3] + y * m[7] + z * m[11] + w * m[15],
        )
    }
}
