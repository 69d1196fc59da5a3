/// Compares two floats with an epsilon scaled by their magnitude.
///
/// Returns `true` when `|a - b| <= f32::EPSILON * max(1, |a|, |b|)`. Below a
/// magnitude of one the comparison is absolute, above it is relative.
///
/// Example:
/// ```
/// use kornia_matrix::utils::nearly_eq;
///
/// assert!(nearly_eq(0.1 + 0.2, 0.3));
/// assert!(!nearly_eq(1.0, 1.001));
/// ```
#[inline]
pub fn nearly_eq(a: f32, b: f32) -> bool {
    nearly_eq_eps(a, b, f32::EPSILON)
}

/// Same as [`nearly_eq`] with a caller provided epsilon.
#[inline]
pub fn nearly_eq_eps(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps * 1.0f32.max(a.abs().max(b.abs()))
}

/// Converts an angle from degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}
