//! 2x2 matrix (single precision).

define_matrix_type!(
    /// 2x2 matrix (single precision), stored row-major.
    Mat2F32,
    2,
    4,
    glam::Mat2
);

impl Mat2F32 {
    /// Determinant, `ad - bc`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.0;
        a * d - b * c
    }

    /// Matrix of minors.
    ///
    /// The minor of each element is the single element left after cutting its row and
    /// column, so the matrix is built directly as `(d, c, b, a)`.
    #[inline]
    pub fn minor(&self) -> Self {
        let [a, b, c, d] = self.0;
        Self([d, c, b, a])
    }

    /// Inverse from the expanded closed form.
    ///
    /// Gives the same result as [`Self::inverse`], including the zero matrix for
    /// singular input, without going through the cofactor matrix.
    pub fn inverse_exp(&self) -> Self {
        let [a, b, c, d] = self.0;
        let det = a * d - b * c;
        if crate::utils::nearly_eq(det, 0.0) {
            log::debug!("Mat2F32: singular matrix, det = {det}");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        Self([d * inv_det, -b * inv_det, -c * inv_det, a * inv_det])
    }
}

#[cfg(all(test, feature = "approx"))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mat2_identity() {
        let m = Mat2F32::IDENTITY;
        assert_eq!(m.0, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(Mat2F32::default(), Mat2F32::ZERO);
    }

    #[test]
    fn test_mat2_element_access() {
        let mut m = Mat2F32::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.at(1, 0), 3.0);
        assert_eq!(m.row(1), [3.0, 4.0]);
        m[(1, 1)] = 5.0;
        assert_eq!(m.0[3], 5.0);
        assert_eq!(Mat2F32::from_rows([[1.0, 2.0], [3.0, 5.0]]), m);
    }

    #[test]
    fn test_mat2_transpose() {
        let m = Mat2F32::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.transpose().0, [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_mat2_mul() {
        let a = Mat2F32::new([1.0, 2.0, 3.0, 4.0]);
        let b = Mat2F32::new([5.0, 6.0, 7.0, 8.0]);
        assert_eq!((a * b).0, [19.0, 22.0, 43.0, 50.0]);
        assert_eq!(a * Mat2F32::IDENTITY, a);
        assert_eq!((a * 2.0).0, [2.0, 4.0, 6.0, 8.0]);
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn test_mat2_assign_ops() {
        let mut m = Mat2F32::IDENTITY;
        m += Mat2F32::IDENTITY;
        assert_eq!(m.row(0), [2.0, 0.0]);

        m -= Mat2F32::IDENTITY;
        assert_eq!(m, Mat2F32::IDENTITY);

        m *= 2.0;
        assert_eq!(m.row(0), [2.0, 0.0]);

        let mut m2 = Mat2F32::IDENTITY;
        m2 *= Mat2F32::IDENTITY;
        assert_eq!(m2, Mat2F32::IDENTITY);
    }

    #[test]
    fn test_mat2_determinant() {
        let m = Mat2F32::new([4.0, 7.0, 2.0, 6.0]);
        assert_eq!(m.determinant(), 10.0);
    }

    #[test]
    fn test_mat2_minor_cofactor_adjugate() {
        let m = Mat2F32::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.minor().0, [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(m.cofactor().0, [4.0, -3.0, -2.0, 1.0]);
        assert_eq!(m.adjugate().0, [4.0, -2.0, -3.0, 1.0]);
    }

    #[test]
    fn test_mat2_inverse() {
        let m = Mat2F32::new([4.0, 7.0, 2.0, 6.0]);
        let expected = Mat2F32::new([0.6, -0.7, -0.2, 0.4]);
        assert_relative_eq!(m.inverse(), expected, epsilon = 1e-6);
        assert_relative_eq!(m.inverse_exp(), expected, epsilon = 1e-6);
        assert_relative_eq!(m.inverse() * m, Mat2F32::IDENTITY, epsilon = 1e-6);
        assert_relative_eq!(m.inverse_exp() * m, Mat2F32::IDENTITY, epsilon = 1e-6);
    }

    #[test]
    fn test_mat2_inverse_singular() {
        let m = Mat2F32::new([1.0, 2.0, 1.0, 2.0]);
        assert_eq!(m.inverse(), Mat2F32::ZERO);
        assert_eq!(m.inverse_exp(), Mat2F32::ZERO);
        assert_eq!(Mat2F32::ZERO.inverse(), Mat2F32::ZERO);
        assert!(matches!(
            m.try_inverse(),
            Err(crate::MatrixError::Singular(d)) if d == 0.0
        ));
    }

    #[test]
    fn test_mat2_glam_conversions() {
        let m = Mat2F32::new([1.0, 2.0, 3.0, 4.0]);
        let g: glam::Mat2 = m.into();
        assert_eq!(g.x_axis, glam::Vec2::new(1.0, 2.0));
        assert_eq!(g.y_axis, glam::Vec2::new(3.0, 4.0));
        assert_eq!(Mat2F32::from(g), m);

        let arr: [f32; 4] = m.into();
        assert_eq!(Mat2F32::from(arr), m);
    }
}
