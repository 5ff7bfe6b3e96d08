//! integer — near-integer predicate with absolute/relative slack.
//!
//! Purpose
//! -------
//! Decide whether floating-point values are integers up to rounding noise,
//! as needed when integer-valued hyperparameters travel through the
//! `f64` transforms in this crate.
//!
//! Key behaviors
//! -------------
//! - [`is_close_to_integer`] tests `|v − rint(v)| ≤ atol + rtol · |rint(v)|`
//!   for a scalar (returning `bool`) or element-wise for arrays (returning a
//!   boolean mask of the same shape).
//! - [`is_close_to_integer_single`] is the scalar-only shorthand taking the
//!   same tolerance pair.
//! - [`IntegerTolerance`] carries validated `(atol, rtol)` with defaults
//!   `(1e-9, 1e-5)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rint` rounds half to even, so `2.5` is compared against `2`.
//! - `NaN` and `±∞` are never close to an integer.
//!
//! Conventions
//! -----------
//! - Same closeness rule as a generic `isclose(a, b)` with `b = rint(a)`, but
//!   computed directly without materializing `b`.
use crate::transforms::{
    elementwise::ElementWise,
    errors::{TransformError, TransformResult},
};

/// Default absolute tolerance for [`is_close_to_integer`].
pub const DEFAULT_ATOL: f64 = 1e-9;

/// Default relative tolerance for [`is_close_to_integer`].
pub const DEFAULT_RTOL: f64 = 1e-5;

/// IntegerTolerance — absolute and relative slack for near-integer tests.
///
/// Fields
/// ------
/// - `atol`: `f64`
///   Absolute slack, `≥ 0`.
/// - `rtol`: `f64`
///   Slack relative to the magnitude of the nearest integer, `≥ 0`.
///
/// Invariants
/// ----------
/// - Both fields are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerTolerance {
    pub atol: f64,
    pub rtol: f64,
}

impl IntegerTolerance {
    /// Construct validated tolerances.
    ///
    /// Errors
    /// ------
    /// - `TransformError::InvalidTolerance`
    ///   Returned when either tolerance is negative, `NaN` or infinite.
    pub fn new(atol: f64, rtol: f64) -> TransformResult<Self> {
        if !atol.is_finite() || !rtol.is_finite() {
            return Err(TransformError::InvalidTolerance {
                atol,
                rtol,
                reason: "Tolerances must be finite.",
            });
        }

        if atol < 0.0 || rtol < 0.0 {
            return Err(TransformError::InvalidTolerance {
                atol,
                rtol,
                reason: "Tolerances must be non-negative.",
            });
        }

        Ok(IntegerTolerance { atol, rtol })
    }
}

impl Default for IntegerTolerance {
    fn default() -> Self {
        IntegerTolerance { atol: DEFAULT_ATOL, rtol: DEFAULT_RTOL }
    }
}

#[inline]
fn close_to_integer_value(v: f64, tol: IntegerTolerance) -> bool {
    let nearest = v.round_ties_even();
    (v - nearest).abs() <= tol.atol + tol.rtol * nearest.abs()
}

/// Test whether values are within tolerance of their nearest integer.
///
/// Parameters
/// ----------
/// - `value`: `f64`, `&ArrayBase<_, D>` or `&[f64]`
///   Values to test.
/// - `tol`: [`IntegerTolerance`]
///   Slack; use `IntegerTolerance::default()` for `(1e-9, 1e-5)`.
///
/// Returns
/// -------
/// `bool` for a scalar, a boolean mask of the input's shape for arrays.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::transforms::integer::{IntegerTolerance, is_close_to_integer};
/// # use ndarray::array;
/// let tol = IntegerTolerance::default();
/// assert!(is_close_to_integer(2.0000000001, tol));
/// assert!(!is_close_to_integer(2.1, tol));
/// assert_eq!(is_close_to_integer(&array![1.0, 1.5], tol), array![true, false]);
/// ```
pub fn is_close_to_integer<X: ElementWise>(value: X, tol: IntegerTolerance) -> X::Mapped<bool> {
    value.map_elements(|v| close_to_integer_value(v, tol))
}

/// Scalar [`is_close_to_integer`]; pass `IntegerTolerance::default()` for
/// `(1e-9, 1e-5)`.
#[inline]
pub fn is_close_to_integer_single(value: f64, tol: IntegerTolerance) -> bool {
    close_to_integer_value(value, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default tolerances on values just off an integer.
    // - Relative slack growing with magnitude.
    // - Half-to-even rounding, negative values, and non-finite inputs.
    // - Mask shape for array inputs and tolerance validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reference cases under the default tolerances.
    fn default_tolerance_reference_cases() {
        let tol = IntegerTolerance::default();

        assert!(is_close_to_integer_single(2.0000000001, tol));
        assert!(!is_close_to_integer_single(2.1, tol));
        assert!(is_close_to_integer_single(0.0, tol));
        assert!(is_close_to_integer_single(-3.0, tol));
        assert!(is_close_to_integer_single(-3.0000000004, tol));
    }

    #[test]
    // Purpose
    // -------
    // The scalar shorthand honors caller-supplied tolerances.
    //
    // Given
    // -----
    // - atol = 0.2, rtol = 0 and atol = rtol = 0.
    //
    // Expect
    // ------
    // - 2.1 is close under the loose pair, not under the default.
    // - 3.0000000001 is not close under zero slack; 3.0 is.
    fn single_form_honors_custom_tolerance() {
        let loose = IntegerTolerance::new(0.2, 0.0).unwrap();
        let exact = IntegerTolerance::new(0.0, 0.0).unwrap();

        assert!(is_close_to_integer_single(2.1, loose));
        assert!(!is_close_to_integer_single(2.1, IntegerTolerance::default()));
        assert!(!is_close_to_integer_single(3.0000000001, exact));
        assert!(is_close_to_integer_single(3.0, exact));
    }

    #[test]
    // Purpose
    // -------
    // Relative slack scales with the integer's magnitude: an offset of 1e-3
    // is far at 1 but within `rtol` at 1e6.
    fn relative_tolerance_scales_with_magnitude() {
        let tol = IntegerTolerance::default();

        assert!(!is_close_to_integer(1.001, tol));
        assert!(is_close_to_integer(1_000_000.001, tol));
    }

    #[test]
    // Purpose
    // -------
    // Exact halves are never close under default tolerances, and NaN/∞
    // never are.
    fn halves_and_non_finite_values_are_not_close() {
        let tol = IntegerTolerance::default();

        assert!(!is_close_to_integer(2.5, tol));
        assert!(!is_close_to_integer(-0.5, tol));
        assert!(!is_close_to_integer(f64::NAN, tol));
        assert!(!is_close_to_integer(f64::INFINITY, tol));
    }

    #[test]
    // Purpose
    // -------
    // Array inputs return a same-shaped boolean mask.
    fn array_form_returns_elementwise_mask() {
        let x = array![[1.0, 1.2], [3.0000000001, -7.9]];

        let mask = is_close_to_integer(&x, IntegerTolerance::default());

        assert_eq!(mask, array![[true, false], [true, false]]);
    }

    #[test]
    // Purpose
    // -------
    // Custom tolerances widen the acceptance band.
    fn custom_tolerance_widens_band() {
        let loose = IntegerTolerance::new(0.2, 0.0).unwrap();

        assert!(is_close_to_integer(2.1, loose));
        assert!(!is_close_to_integer(2.3, loose));
    }

    #[test]
    // Purpose
    // -------
    // Negative or non-finite tolerances are rejected.
    fn tolerance_new_rejects_invalid_values() {
        assert!(matches!(
            IntegerTolerance::new(-1e-9, 1e-5),
            Err(TransformError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            IntegerTolerance::new(1e-9, f64::NAN),
            Err(TransformError::InvalidTolerance { .. })
        ));
        assert_eq!(IntegerTolerance::new(0.0, 0.0).unwrap(), IntegerTolerance { atol: 0.0, rtol: 0.0 });
    }
}
