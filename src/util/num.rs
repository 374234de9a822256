use crate::error::RuntimeError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Truncates an `f64` toward zero and narrows it to `i64`.
///
/// Fractional parts are discarded. Only values that have no `i64`
/// counterpart at all are rejected.
///
/// ## Errors
/// Returns `RuntimeError::NotAnInteger` for non-finite values and for values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use calq::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9, 1).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9, 1).unwrap(), -7);
///
/// let err = f64_to_i64_truncated(f64::NAN, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::NotAnInteger { line: 3, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> Result<i64, RuntimeError> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::NotAnInteger { value, line });
    }
    Ok(truncated as i64)
}

/// Converts an `f64` to `u64` if the value is a non-negative whole number.
///
/// ## Errors
/// Returns `RuntimeError::ExpectedInteger` for negative, fractional,
/// non-finite or unsafely large values.
///
/// ## Example
/// ```
/// use calq::{error::RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(5.0, 1).unwrap(), 5);
///
/// let err = f64_to_u64_checked(4.5, 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::ExpectedInteger { line: 2, .. }));
///
/// let err = f64_to_u64_checked(-1.0, 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::ExpectedInteger { line: 2, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, line: usize) -> Result<u64, RuntimeError> {
    if !value.is_finite()
       || value < 0.0
       || value > MAX_SAFE_U64_INT as f64
       || value.fract() != 0.0
    {
        return Err(RuntimeError::ExpectedInteger { value, line });
    }
    Ok(value as u64)
}

/// Widens an `i64` back to `f64`.
///
/// Values beyond `2^53` round to the nearest representable `f64`, which is
/// the same rounding every other arithmetic result is subject to.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
