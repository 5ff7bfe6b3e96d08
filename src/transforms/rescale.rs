//! Linear rescaling between bounded ranges.
//!
//! Provides the three affine maps the rest of the crate is built on:
//!
//! - [`normalize`]: `[low, high] → [0, 1]`, `(x - low) / (high - low)`.
//! - [`scale`]: `[0, 1] → [low, high]`, `u * (high - low) + low`.
//! - [`rescale`]: `from → to`, the composition of the two.
//!
//! Each works on a bare `f64` or element-wise on arrays through
//! [`ElementWise`]; the scalar kernels are shared with the quantizers.
//!
//! # Degenerate bounds
//! A zero-width `bounds` passed to `normalize` (or a zero-width `from` passed
//! to `rescale`) divides by zero and yields `±∞` or `NaN` by the usual IEEE
//! rules. This is deliberate: callers that may hold zero-width ranges must
//! guard before calling. The unit and identity fast paths are checked first,
//! so `rescale(x, b, b)` is well defined even when `b` has zero width.

use crate::transforms::{bounds::Bounds, elementwise::ElementWise};

#[inline]
pub(crate) fn normalize_value(x: f64, bounds: Bounds) -> f64 {
    if bounds.is_unit() { x } else { (x - bounds.low) / bounds.width() }
}

#[inline]
pub(crate) fn scale_value(unit_x: f64, to: Bounds) -> f64 {
    unit_x * to.width() + to.low
}

#[inline]
pub(crate) fn rescale_value(x: f64, from: Bounds, to: Bounds) -> f64 {
    if from == to { x } else { scale_value(normalize_value(x, from), to) }
}

/// Normalize values from `bounds` into the unit interval.
///
/// Returns `x` unchanged when `bounds` is exactly `[0, 1]`.
///
/// # Examples
/// ```rust
/// # use space_transforms::transforms::{bounds::Bounds, rescale::normalize};
/// # use ndarray::array;
/// let b = Bounds::new(0.0, 10.0).unwrap();
/// assert_eq!(normalize(&array![0.0, 5.0, 10.0], b), array![0.0, 0.5, 1.0]);
/// assert_eq!(normalize(2.5, b), 0.25);
/// ```
pub fn normalize<X: ElementWise>(x: X, bounds: Bounds) -> X::Mapped<f64> {
    x.map_elements(|v| normalize_value(v, bounds))
}

/// Scale values assumed to lie in `[0, 1]` onto `to`.
///
/// ```rust
/// # use space_transforms::transforms::{bounds::Bounds, rescale::scale};
/// # use ndarray::array;
/// let to = Bounds::new(0.0, 10.0).unwrap();
/// assert_eq!(scale(&array![0.0, 0.5, 1.0], to), array![0.0, 5.0, 10.0]);
/// ```
pub fn scale<X: ElementWise>(unit_x: X, to: Bounds) -> X::Mapped<f64> {
    unit_x.map_elements(|v| scale_value(v, to))
}

/// Rescale values from the range `from` to the range `to`.
///
/// When `from == to` the input is returned as-is, skipping the
/// normalize/scale round trip and the rounding error it would introduce.
///
/// ```rust
/// # use space_transforms::transforms::{bounds::Bounds, rescale::rescale};
/// # use ndarray::array;
/// let from = Bounds::new(0.0, 100.0).unwrap();
/// let to = Bounds::new(0.0, 10.0).unwrap();
/// assert_eq!(rescale(&array![0.0, 10.0, 20.0], from, to), array![0.0, 1.0, 2.0]);
/// ```
pub fn rescale<X: ElementWise>(x: X, from: Bounds, to: Bounds) -> X::Mapped<f64> {
    x.map_elements(|v| rescale_value(v, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form values of normalize/scale/rescale on simple ranges.
    // - The unit-bounds and identity fast paths.
    // - The normalize → scale round-trip law on a grid of bounds.
    // - IEEE propagation for zero-width bounds.
    // -------------------------------------------------------------------------

    fn b(low: f64, high: f64) -> Bounds {
        Bounds::new(low, high).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // `normalize` maps the endpoints to 0 and 1 and the midpoint to 0.5.
    fn normalize_maps_endpoints_and_midpoint() {
        let bounds = b(-4.0, 6.0);

        let out = normalize(&array![-4.0, 1.0, 6.0], bounds);

        assert_eq!(out, array![0.0, 0.5, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Unit bounds short-circuit and return the input bit-for-bit, even for
    // values outside `[0, 1]`.
    fn normalize_unit_bounds_is_identity() {
        let x = array![-0.3, 0.1, 0.7, 1.9];

        assert_eq!(normalize(&x, Bounds::UNIT), x);
        assert_eq!(normalize(0.123_456_789, Bounds::UNIT), 0.123_456_789);
    }

    #[test]
    // Purpose
    // -------
    // `scale` is the affine inverse of `normalize`.
    //
    // Given
    // -----
    // - Several bound pairs of different magnitudes and signs.
    // - Eleven evenly spaced points inside each.
    //
    // Expect
    // ------
    // - `scale(normalize(x, b), b) ≈ x` to within 1e-12 relative error.
    fn scale_of_normalize_round_trips() {
        for bounds in [b(0.0, 1.0), b(-3.0, 5.0), b(1e-3, 1e3), b(-1e6, -10.0), b(2.0, 2.5)] {
            let x = Array1::linspace(bounds.low, bounds.high, 11);

            let back = scale(&normalize(&x, bounds), bounds);

            for (orig, got) in x.iter().zip(back.iter()) {
                assert_relative_eq!(*orig, *got, epsilon = 1e-12, max_relative = 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `rescale` with `from == to` returns the input unchanged, including for
    // zero-width bounds where the full round trip would produce NaN.
    fn rescale_identity_when_ranges_match() {
        let x = array![0.1, 0.2, 0.30000000000000004];
        let same = b(-7.25, 3.5);

        assert_eq!(rescale(&x, same, same), x);
        assert_eq!(rescale(4.0, b(4.0, 4.0), b(4.0, 4.0)), 4.0);
    }

    #[test]
    // Purpose
    // -------
    // `rescale` maps between two non-trivial ranges linearly.
    fn rescale_maps_between_ranges() {
        let from = b(0.0, 100.0);
        let to = b(-1.0, 1.0);

        let out = rescale(&array![0.0, 25.0, 50.0, 100.0], from, to);

        assert_eq!(out, array![-1.0, -0.5, 0.0, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Zero-width bounds propagate IEEE results instead of erroring:
    // the interior point gives NaN (0/0), others give ±∞.
    fn normalize_zero_width_bounds_propagates_ieee_values() {
        let degenerate = b(2.0, 2.0);

        let out = normalize(&array![1.0, 2.0, 3.0], degenerate);

        assert_eq!(out[0], f64::NEG_INFINITY);
        assert!(out[1].is_nan());
        assert_eq!(out[2], f64::INFINITY);
    }
}
