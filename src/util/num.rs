/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// [`MAX_SAFE_U64_INT`] as a float.
#[allow(clippy::cast_precision_loss)]
pub const MAX_SAFE_F64_INT: f64 = MAX_SAFE_U64_INT as f64;

/// Returns `true` if `value` is a non-negative whole number no larger than
/// [`MAX_SAFE_U64_INT`], i.e. a digit run that survived conversion to `f64`
/// without rounding.
///
/// ## Example
/// ```
/// use rdcalc::util::num::{MAX_SAFE_F64_INT, is_exact_integer};
///
/// assert!(is_exact_integer(42.0));
/// assert!(is_exact_integer(MAX_SAFE_F64_INT));
/// assert!(!is_exact_integer(MAX_SAFE_F64_INT + 1.0));
/// assert!(!is_exact_integer(0.5));
/// ```
#[must_use]
pub fn is_exact_integer(value: f64) -> bool {
    (0.0..=MAX_SAFE_F64_INT).contains(&value) && value.fract() == 0.0
}

/// Compares two evaluation results with a relative tolerance.
///
/// Infinities compare equal when they have the same sign, and two NaNs are
/// considered equal, so results of the same division by zero agree.
///
/// ## Example
/// ```
/// use rdcalc::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(approx_eq(f64::INFINITY, f64::INFINITY));
/// assert!(approx_eq(f64::NAN, f64::NAN));
/// assert!(!approx_eq(1.0, 1.1));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f64::EPSILON * 16.0 * scale
}
