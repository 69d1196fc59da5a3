use crate::error::KernelError;
use num_traits::Zero;

/// Transposes a row-major matrix stored in a flat buffer.
///
/// The source is a `rows x cols` matrix and the destination receives the
/// `cols x rows` transpose.
///
/// # Arguments
///
/// * `src` - The source matrix, row-major.
/// * `dst` - The destination buffer, row-major.
/// * `rows` - The number of rows of the source matrix.
/// * `cols` - The number of columns of the source matrix.
///
/// PRECONDITION: `src` and `dst` hold at least `rows * cols` elements.
///
/// # Panics
///
/// Panics if either buffer is shorter than `rows * cols`.
///
/// Example:
/// ```
/// use kernels::ops::transpose_kernel;
///
/// let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2x3
/// let mut dst = [0.0; 6];
/// transpose_kernel(&src, &mut dst, 2, 3);
/// assert_eq!(dst, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]); // 3x2
/// ```
pub fn transpose_kernel<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    let len = rows * cols;
    assert!(src.len() >= len, "source buffer too short");
    assert!(dst.len() >= len, "destination buffer too short");

    for (i, out) in dst.iter_mut().take(len).enumerate() {
        let row = i / rows;
        let col = i % rows;
        *out = src[cols * col + row];
    }
}

/// Multiplies two row-major matrices stored in flat buffers.
///
/// Computes `out = a * b` where `a` is `a_rows x a_cols` and `b` is
/// `b_rows x b_cols`. The result is `a_rows x b_cols`.
///
/// # Arguments
///
/// * `out` - The output buffer, row-major.
/// * `a` - The left hand side matrix.
/// * `a_rows` - The number of rows of `a`.
/// * `a_cols` - The number of columns of `a`.
/// * `b` - The right hand side matrix.
/// * `b_rows` - The number of rows of `b`.
/// * `b_cols` - The number of columns of `b`.
///
/// # Errors
///
/// * If `a_cols != b_rows`, a `DimensionMismatch` error is returned.
/// * If any buffer is shorter than its dimensions require, a `LengthMismatch` error is returned.
///
/// `out` is not written to when an error is returned.
///
/// Example:
/// ```
/// use kernels::ops::matmul_kernel;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [5.0, 6.0, 7.0, 8.0];
/// let mut out = [0.0; 4];
/// matmul_kernel(&mut out, &a, 2, 2, &b, 2, 2).unwrap();
/// assert_eq!(out, [19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matmul_kernel<T>(
    out: &mut [T],
    a: &[T],
    a_rows: usize,
    a_cols: usize,
    b: &[T],
    b_rows: usize,
    b_cols: usize,
) -> Result<(), KernelError>
where
    T: Zero + Copy + std::ops::Add<Output = T> + std::ops::Mul<Output = T>,
{
    if a_cols != b_rows {
        return Err(KernelError::DimensionMismatch(a_cols, b_rows));
    }

    for (expected, got) in [
        (a_rows * a_cols, a.len()),
        (b_rows * b_cols, b.len()),
        (a_rows * b_cols, out.len()),
    ] {
        if got < expected {
            return Err(KernelError::LengthMismatch(expected, got));
        }
    }

    for i in 0..a_rows {
        for j in 0..b_cols {
            let mut acc = T::zero();
            for k in 0..b_rows {
                acc = acc + a[a_cols * i + k] * b[b_cols * k + j];
            }
            out[b_cols * i + j] = acc;
        }
    }

    Ok(())
}

/// Applies the checkerboard cofactor sign to a matrix of minors.
///
/// Every element keeps its position and is negated when `row + col` is odd.
///
/// # Arguments
///
/// * `out` - The output buffer, row-major.
/// * `minor` - The matrix of minors, row-major.
/// * `rows` - The number of rows.
/// * `cols` - The number of columns.
///
/// PRECONDITION: `out` and `minor` hold at least `rows * cols` elements.
///
/// # Panics
///
/// Panics if either buffer is shorter than `rows * cols`.
///
/// Example:
/// ```
/// use kernels::ops::cofactor_kernel;
///
/// let minor = [1.0, 2.0, 3.0, 4.0];
/// let mut out = [0.0; 4];
/// cofactor_kernel(&mut out, &minor, 2, 2);
/// assert_eq!(out, [1.0, -2.0, -3.0, 4.0]);
/// ```
pub fn cofactor_kernel<T>(out: &mut [T], minor: &[T], rows: usize, cols: usize)
where
    T: Copy + std::ops::Neg<Output = T>,
{
    let len = rows * cols;
    assert!(minor.len() >= len, "minor buffer too short");
    assert!(out.len() >= len, "output buffer too short");

    for i in 0..rows {
        for j in 0..cols {
            let idx = cols * i + j;
            out[idx] = if (i + j) % 2 == 0 {
                minor[idx]
            } else {
                -minor[idx]
            };
        }
    }
}
