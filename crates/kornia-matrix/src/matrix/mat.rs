//! Macro to define a square matrix type.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over a flat,
//! row-major `[f32; N * N]` buffer. The element at `(row, col)` lives at index
//! `N * row + col`.
//!
//! The macro covers everything that does not depend on the size: construction,
//! element access, transpose, arithmetic, conversions, cofactor, adjugate and the
//! inverse built on top of them. Every size provides `minor` and `determinant`.
//!
//! # Arguments
//!
//! * `name`      - The name of the matrix type.
//! * `dim`       - The number of rows (and columns).
//! * `len`       - The number of elements (`dim * dim`).
//! * `glam_type` - The `glam` matrix type describing the same transform.
//!

macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $dim:literal,
        $len:literal,
        $glam_type:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub [f32; $len]);

        impl $name {
            /// Number of rows and columns.
            pub const DIM: usize = $dim;

            /// Zero matrix.
            pub const ZERO: Self = Self([0.0; $len]);

            /// Identity matrix.
            pub const IDENTITY: Self = {
                let mut data = [0.0; $len];
                let mut i = 0;
                while i < $dim {
                    data[$dim * i + i] = 1.0;
                    i += 1;
                }
                Self(data)
            };

            /// Create a new matrix from a row-major array.
            #[inline]
            pub const fn new(data: [f32; $len]) -> Self {
                Self(data)
            }

            /// Create a new matrix from its rows.
            #[inline]
            pub fn from_rows(rows: [[f32; $dim]; $dim]) -> Self {
                let mut out = Self::ZERO;
                for (dst, row) in out.0.chunks_exact_mut($dim).zip(rows.iter()) {
                    dst.copy_from_slice(row);
                }
                out
            }

            /// Create a diagonal matrix.
            #[inline]
            pub fn from_diagonal(diagonal: [f32; $dim]) -> Self {
                let mut out = Self::ZERO;
                for (i, d) in diagonal.iter().enumerate() {
                    out.0[$dim * i + i] = *d;
                }
                out
            }

            /// Get the element at `(row, col)`.
            #[inline]
            pub fn at(&self, row: usize, col: usize) -> f32 {
                self.0[$dim * row + col]
            }

            /// Get the row `row` as an array.
            #[inline]
            pub fn row(&self, row: usize) -> [f32; $dim] {
                let mut out = [0.0; $dim];
                out.copy_from_slice(&self.0[$dim * row..$dim * (row + 1)]);
                out
            }

            /// Get the matrix as a flat, row-major slice.
            #[inline]
            pub fn as_slice(&self) -> &[f32] {
                &self.0
            }

            /// Convert the matrix to a flat, row-major array.
            #[inline]
            pub fn to_array(self) -> [f32; $len] {
                self.0
            }

            /// Check if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.0.iter().all(|v| v.is_finite())
            }

            /// Transpose the matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                let mut out = Self::ZERO;
                kernels::ops::transpose_kernel(&self.0, &mut out.0, $dim, $dim);
                out
            }

            /// Matrix of cofactors: the minors with the checkerboard sign applied.
            pub fn cofactor(&self) -> Self {
                let minor = self.minor();
                let mut out = Self::ZERO;
                kernels::ops::cofactor_kernel(&mut out.0, &minor.0, $dim, $dim);
                out
            }

            /// Adjugate: the transpose of the cofactor matrix.
            pub fn adjugate(&self) -> Self {
                self.cofactor().transpose()
            }

            /// Inverse computed as `adjugate / determinant`.
            ///
            /// Returns the zero matrix when the determinant is nearly zero; use
            /// [`Self::try_inverse`] to get an error instead.
            pub fn inverse(&self) -> Self {
                self.try_inverse().unwrap_or(Self::ZERO)
            }

            /// Inverse computed as `adjugate / determinant`.
            ///
            /// # Errors
            ///
            /// Returns `MatrixError::Singular` when the determinant is nearly zero.
            pub fn try_inverse(&self) -> Result<Self, crate::MatrixError> {
                let det = self.determinant();
                if crate::utils::nearly_eq(det, 0.0) {
                    log::debug!("{}: singular matrix, det = {det}", stringify!($name));
                    return Err(crate::MatrixError::Singular(det));
                }
                Ok(self.adjugate() * (1.0 / det))
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl std::ops::Index<(usize, usize)> for $name {
            type Output = f32;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                &self.0[$dim * row + col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $name {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                &mut self.0[$dim * row + col]
            }
        }

        // Conversions to and from row-major arrays.
        impl From<[f32; $len]> for $name {
            #[inline]
            fn from(arr: [f32; $len]) -> Self {
                Self(arr)
            }
        }

        impl From<$name> for [f32; $len] {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        // glam stores columns and multiplies column vectors, so our rows are its
        // columns and the flat buffer is shared as-is.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m.to_cols_array())
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam_type>::from_cols_array(&m.0)
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                f32::EPSILON
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.0
                    .iter()
                    .zip(other.0.iter())
                    .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                f32::EPSILON
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.0.iter().zip(other.0.iter()).all(|(a, b)| {
                    <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative)
                })
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                let mut out = Self::ZERO;
                for i in 0..$dim {
                    for j in 0..$dim {
                        let mut acc = 0.0;
                        for k in 0..$dim {
                            acc += self.0[$dim * i + k] * rhs.0[$dim * k + j];
                        }
                        out.0[$dim * i + j] = acc;
                    }
                }
                out
            }
        }

        impl std::ops::Add<$name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> Self::Output {
                let mut out = self;
                out += rhs;
                out
            }
        }

        impl std::ops::Sub<$name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> Self::Output {
                let mut out = self;
                out -= rhs;
                out
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                let mut out = self;
                out *= rhs;
                out
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self::Output {
                self * -1.0
            }
        }

        impl std::ops::AddAssign<$name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                self.0.iter_mut().zip(rhs.0.iter()).for_each(|(a, b)| *a += b);
            }
        }

        impl std::ops::SubAssign<$name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                self.0.iter_mut().zip(rhs.0.iter()).for_each(|(a, b)| *a -= b);
            }
        }

        impl std::ops::MulAssign<$name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                *self = *self * rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                self.0.iter_mut().for_each(|a| *a *= rhs);
            }
        }
    };
}
