//! 3x3 matrix (single precision).

use crate::{Mat2F32, Vec3F32};

define_matrix_type!(
    /// 3x3 matrix (single precision), stored row-major.
    Mat3F32,
    3,
    9,
    glam::Mat3
);

impl Mat3F32 {
    /// Submatrix left after removing row `row` and column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    pub fn cut(&self, row: usize, col: usize) -> Mat2F32 {
        assert!(row < 3 && col < 3, "cut index ({row}, {col}) out of bounds");

        let mut out = Mat2F32::ZERO;
        let kept = (0..3)
            .filter(|&i| i != row)
            .flat_map(|i| (0..3).filter(move |&j| j != col).map(move |j| 3 * i + j));
        for (dst, src) in out.0.iter_mut().zip(kept) {
            *dst = self.0[src];
        }
        out
    }

    /// Matrix of minors: entry `(i, j)` is the determinant of `cut(i, j)`.
    pub fn minor(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out[(i, j)] = self.cut(i, j).determinant();
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let cofactor = self.cofactor();
        (0..3).map(|j| self.0[j] * cofactor.0[j]).sum()
    }

    /// Inverse from the expanded closed form.
    ///
    /// Gives the same result as [`Self::inverse`], including the zero matrix for
    /// singular input, without going through the cofactor matrix.
    pub fn inverse_exp(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.0;

        let ei_fh = e * i - f * h;
        let fg_di = f * g - d * i;
        let dh_eg = d * h - e * g;

        let det = a * ei_fh + b * fg_di + c * dh_eg;
        if crate::utils::nearly_eq(det, 0.0) {
            log::debug!("Mat3F32: singular matrix, det = {det}");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;

        Self([
            ei_fh * inv_det,
            (c * h - b * i) * inv_det,
            (b * f - c * e) * inv_det,
            fg_di * inv_det,
            (a * i - c * g) * inv_det,
            (c * d - a * f) * inv_det,
            dh_eg * inv_det,
            (b * g - a * h) * inv_det,
            (a * e - b * d) * inv_det,
        ])
    }
}

// Row vector times matrix.
impl std::ops::Mul<Mat3F32> for Vec3F32 {
    type Output = Vec3F32;

    #[inline]
    fn mul(self, rhs: Mat3F32) -> Self::Output {
        let m = &rhs.0;
        Vec3F32::new(
            self.x * m[0] + self.y * m[3] + self.z * m[6],
            self.x * m[1] + self.y * m[4] + self.z * m[7],
            self.x * m[2] + self.y * m[5] + self.z * m[8],
        )
    }
}
