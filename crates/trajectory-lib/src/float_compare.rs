//! Tolerant floating point comparison
//!
//! Distance, speed and interpolation results accumulate rounding error, so geometric
//! equivalence is always tested with [`almost_equal`] rather than `==`.

/// Default relative tolerance for [`almost_equal`]
pub const EQUALITY_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Default absolute tolerance for [`almost_zero`]
pub const ZERO_ABSOLUTE_TOLERANCE: f64 = 1e-5;

/// Check whether `z` is within [`ZERO_ABSOLUTE_TOLERANCE`] of zero
#[inline]
pub fn almost_zero(z: f64) -> bool {
    almost_zero_within(z, ZERO_ABSOLUTE_TOLERANCE)
}

/// Check whether `|z| < epsilon`
///
/// `NaN` is never almost zero.
#[inline]
pub fn almost_zero_within(z: f64, epsilon: f64) -> bool {
    z.abs() < epsilon
}

/// Compare two values with the default relative tolerance
#[inline]
pub fn almost_equal(a: f64, b: f64) -> bool {
    almost_equal_within(a, b, EQUALITY_RELATIVE_TOLERANCE)
}

/// Compare two values for equality up to `tolerance`
///
/// # Behavior
/// - Identical values (including equal infinities) are equal.
/// - If either value is exactly zero, or they differ by less than one machine epsilon,
///   relative error is meaningless and the difference is compared against
///   `tolerance * f64::EPSILON` instead. The bound scales with machine epsilon rather
///   than `f64::MIN_POSITIVE`, so tiny values such as `1e-30` compare equal to `0.0`.
/// - Otherwise the relative error `|a - b| / (|a| + |b|)` must be below `tolerance`.
///
/// Any comparison involving `NaN` is false.
#[inline]
pub fn almost_equal_within(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f64::EPSILON {
        diff < tolerance * f64::EPSILON
    } else {
        diff / (a.abs() + b.abs()) < tolerance
    }
}
