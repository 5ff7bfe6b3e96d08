//! quantize — discretize bounded values onto a fixed number of levels.
//!
//! Purpose
//! -------
//! Snap continuous values living in a bounded range onto `bins` evenly spaced
//! levels, returning the snapped values in the *original* range rather than
//! bin indices. A log-scale variant performs the snapping on the linear axis
//! of values that were sampled on a logarithmic one.
//!
//! Key behaviors
//! -------------
//! - [`quantize`]: normalize into `[0, 1]`, take
//!   `level = clamp(floor(u · bins), 0, bins − 1)`, map the level back to
//!   `level / (bins − 1)` and scale into the original bounds.
//! - [`quantize_log`]: lift values from `bounds` onto `ln(scale_slice)`,
//!   exponentiate, [`quantize`] on `scale_slice`, take `ln`, and rescale back
//!   onto `bounds`.
//! - Both accept a scalar or an array through [`ElementWise`] and share one
//!   scalar kernel per operation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `bins ≥ 1`; `bins == 0` is rejected with `TransformError::InvalidBins`.
//! - The upper bound maps to the top level (the clamp absorbs
//!   `floor(1 · bins) == bins`), and results never leave `[low, high]`.
//! - Idempotence: `quantize(quantize(x)) == quantize(x)` for equal
//!   `bounds`/`bins`.
//! - `bins == 1` and zero-width bounds both collapse every non-NaN input to
//!   `bounds.low`; `NaN` inputs stay `NaN`.
//! - `quantize_log` requires a strictly positive `scale_slice`; otherwise it
//!   fails with `TransformError::NonPositiveLogBounds` before touching `x`.
//!
//! Conventions
//! -----------
//! - Values outside `bounds` are accepted and land on the nearest end level.
//! - Degenerate fallbacks emit a `tracing` event at `trace` level once per
//!   call, never per element.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the documented three-bin example, top-bin behavior on
//!   awkward bounds, idempotence over a grid, the `bins == 1` and zero-width
//!   fallbacks, scalar/array agreement, and the log-scale level grid.
use crate::transforms::{
    bounds::Bounds,
    elementwise::ElementWise,
    errors::{TransformError, TransformResult},
    rescale::{normalize_value, rescale_value, scale_value},
};

fn validate_bins(bins: usize) -> TransformResult<()> {
    if bins == 0 {
        return Err(TransformError::InvalidBins { bins });
    }
    Ok(())
}

#[inline]
pub(crate) fn quantize_value(x: f64, bounds: Bounds, bins: usize) -> f64 {
    if x.is_nan() {
        return x;
    }
    if bins == 1 || bounds.is_degenerate() {
        return bounds.low;
    }

    let top = (bins - 1) as f64;
    let unit = normalize_value(x, bounds);
    let level = (unit * bins as f64).floor().clamp(0.0, top);
    if level == top {
        return bounds.high;
    }
    let unit_quantized = level / top;

    if bounds.is_unit() {
        return unit_quantized;
    }
    // `u · width + low` can overshoot `high` by an ulp.
    scale_value(unit_quantized, bounds).clamp(bounds.low, bounds.high)
}

/// Quantize values in `bounds` onto `bins` evenly spaced levels.
///
/// Parameters
/// ----------
/// - `x`: `f64`, `&ArrayBase<_, D>` or `&[f64]`
///   Values to quantize, nominally inside `bounds`.
/// - `bounds`: [`Bounds`]
///   Range the values live in; the levels are
///   `low + k · (high − low) / (bins − 1)` for `k = 0, …, bins − 1`.
/// - `bins`: `usize`
///   Number of levels, `≥ 1`.
///
/// Returns
/// -------
/// TransformResult<X::Mapped<f64>>
///   Quantized values with the same shape as `x`.
///
/// Errors
/// ------
/// - `TransformError::InvalidBins` when `bins == 0`.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::transforms::{bounds::Bounds, quantize::quantize};
/// # use ndarray::array;
/// let x = array![0.0, 0.32, 0.33, 0.34, 0.65, 0.66, 0.67, 0.99, 1.0];
/// let q = quantize(&x, Bounds::UNIT, 3).unwrap();
/// assert_eq!(q, array![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]);
/// ```
pub fn quantize<X: ElementWise>(
    x: X, bounds: Bounds, bins: usize,
) -> TransformResult<X::Mapped<f64>> {
    validate_bins(bins)?;

    if bins == 1 || bounds.is_degenerate() {
        tracing::trace!(
            bins,
            low = bounds.low,
            high = bounds.high,
            "quantize collapsing to a single level"
        );
    }

    Ok(x.map_elements(|v| quantize_value(v, bounds, bins)))
}

/// Quantize values that were sampled on a logarithmic scale.
///
/// Parameters
/// ----------
/// - `x`: `f64`, `&ArrayBase<_, D>` or `&[f64]`
///   Values living linearly on `bounds`; their position in `bounds` is their
///   position on the log axis of `scale_slice`.
/// - `bounds`: [`Bounds`]
///   Range `x` lives in (often the unit interval).
/// - `scale_slice`: `Option<Bounds>`
///   Linear range the values were log-sampled from. Defaults to `bounds`.
///   Both endpoints must be strictly positive.
/// - `bins`: `usize`
///   Number of levels on the linear axis of `scale_slice`, `≥ 1`.
///
/// Returns
/// -------
/// TransformResult<X::Mapped<f64>>
///   Quantized values expressed back on `bounds`, same shape as `x`.
///
/// Errors
/// ------
/// - `TransformError::InvalidBins` when `bins == 0`.
/// - `TransformError::NonPositiveLogBounds` when `scale_slice.low ≤ 0`.
///
/// Notes
/// -----
/// - A zero-width `scale_slice` or zero-width `bounds` maps every non-NaN
///   input to `bounds.low`, since either trip through the log range would
///   otherwise be `0/0`.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::transforms::{bounds::Bounds, quantize::quantize_log};
/// let slice = Bounds::new(1.0, 1000.0).unwrap();
/// let q = quantize_log(0.5, Bounds::UNIT, Some(slice), 4).unwrap();
/// // sqrt(1000) ≈ 31.6 sits in the lowest of the levels {1, 334, 667, 1000}.
/// assert_eq!(q, 0.0);
/// ```
pub fn quantize_log<X: ElementWise>(
    x: X, bounds: Bounds, scale_slice: Option<Bounds>, bins: usize,
) -> TransformResult<X::Mapped<f64>> {
    validate_bins(bins)?;
    let slice = scale_slice.unwrap_or(bounds);
    let log_bounds = slice.ln()?;

    if log_bounds.is_degenerate() || bounds.is_degenerate() {
        tracing::trace!(
            low = bounds.low,
            slice_low = slice.low,
            "quantize_log on zero-width bounds or scale slice"
        );
        return Ok(x.map_elements(|v| if v.is_nan() { v } else { bounds.low }));
    }

    Ok(x.map_elements(|v| {
        let x_log = rescale_value(v, bounds, log_bounds);
        let x_orig = x_log.exp();
        let q_orig = quantize_value(x_orig, slice, bins);
        rescale_value(q_orig.ln(), log_bounds, bounds)
    }))
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
    // - The canonical three-bin example on the unit interval.
    // - Non-unit bounds, top-bin handling, and the `≤ high` guarantee.
    // - Idempotence over a grid of inputs, bounds, and bin counts.
    // - `bins == 0` rejection, `bins == 1` and zero-width fallbacks.
    // - Log-scale quantization onto the expected level grid, its default
    //   slice, and rejection of non-positive slices.
    // -------------------------------------------------------------------------

    fn b(low: f64, high: f64) -> Bounds {
        Bounds::new(low, high).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Reproduce the documented three-bin example exactly.
    //
    // Given
    // -----
    // - x = [0.0, 0.32, 0.33, 0.34, 0.65, 0.66, 0.67, 0.99, 1.0] on [0, 1].
    // - bins = 3.
    //
    // Expect
    // ------
    // - [0, 0, 0, 0.5, 0.5, 0.5, 1, 1, 1].
    fn quantize_unit_three_bins_matches_reference() {
        // Arrange
        let x = array![0.0, 0.32, 0.33, 0.34, 0.65, 0.66, 0.67, 0.99, 1.0];

        // Act
        let q = quantize(&x, Bounds::UNIT, 3).unwrap();

        // Assert
        assert_eq!(q, array![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Non-unit bounds return levels in the original range.
    //
    // Given
    // -----
    // - x = [0, 2.5, 5, 7.5, 10] on [0, 10] with 5 bins.
    //
    // Expect
    // ------
    // - Every point already sits on a level and is returned unchanged.
    fn quantize_non_unit_bounds_returns_original_scale() {
        let x = array![0.0, 2.5, 5.0, 7.5, 10.0];

        let q = quantize(&x, b(0.0, 10.0), 5).unwrap();

        assert_eq!(q, x);
    }

    #[test]
    // Purpose
    // -------
    // The upper bound maps to the top level and nothing exceeds `high`.
    //
    // Given
    // -----
    // - Bounds whose width is not exactly representable, e.g. [0.1, 0.3].
    // - Several bin counts.
    //
    // Expect
    // ------
    // - `quantize(high) == high` and every output of a dense grid is ≤ high.
    fn quantize_upper_bound_maps_to_top_level() {
        for bounds in [b(0.1, 0.3), b(-1.7, 2.9), b(1e-5, 3e-5), b(-10.0, 0.0)] {
            for bins in [2, 3, 7, 10, 101] {
                let top = quantize(bounds.high, bounds, bins).unwrap();
                assert_eq!(top, bounds.high, "bounds={bounds:?} bins={bins}");

                let grid = Array1::linspace(bounds.low, bounds.high, 257);
                let q = quantize(&grid, bounds, bins).unwrap();
                assert!(q.iter().all(|&v| v <= bounds.high && v >= bounds.low));
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Quantization is idempotent.
    //
    // Given
    // -----
    // - A dense grid on several bounds and bin counts.
    //
    // Expect
    // ------
    // - `quantize(quantize(x)) == quantize(x)` element-wise.
    fn quantize_is_idempotent() {
        for bounds in [Bounds::UNIT, b(-3.0, 5.0), b(0.1, 0.3), b(10.0, 1000.0)] {
            for bins in [2, 3, 4, 9, 50] {
                let grid = Array1::linspace(bounds.low, bounds.high, 333);

                let once = quantize(&grid, bounds, bins).unwrap();
                let twice = quantize(&once, bounds, bins).unwrap();

                assert_eq!(once, twice, "bounds={bounds:?} bins={bins}");
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Values outside the bounds are clamped to the end levels.
    fn quantize_out_of_range_values_clamp_to_end_levels() {
        let q = quantize(&array![-5.0, 1.5], Bounds::UNIT, 4).unwrap();

        assert_eq!(q, array![0.0, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Scalar and array forms agree element by element.
    fn quantize_scalar_and_array_forms_agree() {
        let bounds = b(-2.0, 6.0);
        let x = array![-2.0, -0.3, 1.1, 2.0, 4.44, 5.999, 6.0];

        let arr = quantize(&x, bounds, 6).unwrap();

        for (xi, qi) in x.iter().zip(arr.iter()) {
            assert_eq!(quantize(*xi, bounds, 6).unwrap(), *qi);
        }
    }

    #[test]
    // Purpose
    // -------
    // `bins == 0` is a precondition violation.
    fn quantize_rejects_zero_bins() {
        assert_eq!(quantize(0.5, Bounds::UNIT, 0), Err(TransformError::InvalidBins { bins: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // `bins == 1` collapses every value to `bounds.low`; NaN stays NaN.
    fn quantize_single_bin_collapses_to_low() {
        let q = quantize(&array![2.0, 3.3, 4.0, f64::NAN], b(2.0, 4.0), 1).unwrap();

        assert_eq!(&q.as_slice().unwrap()[..3], &[2.0, 2.0, 2.0]);
        assert!(q[3].is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Zero-width bounds collapse to their single value instead of NaN.
    fn quantize_zero_width_bounds_returns_low() {
        let q = quantize(&array![1.0, 7.0, 9.0], b(7.0, 7.0), 5).unwrap();

        assert_eq!(q, array![7.0, 7.0, 7.0]);
    }

    #[test]
    // Purpose
    // -------
    // Log-scale quantization lands on the log image of the linear levels.
    //
    // Given
    // -----
    // - Unit bounds, scale slice [1, 1000], bins = 4 (linear levels
    //   {1, 334, 667, 1000}).
    //
    // Expect
    // ------
    // - 0 and 1 map to themselves.
    // - 0.5 (≈ 31.6 on the slice) maps to level 1 → 0.
    // - 0.9 and 0.95 (≈ 501 and ≈ 708) both map to level 667 →
    //   ln(667) / ln(1000).
    fn quantize_log_maps_onto_log_image_of_levels() {
        // Arrange
        let slice = b(1.0, 1000.0);
        let x = array![0.0, 0.5, 0.9, 0.95, 1.0];

        // Act
        let q = quantize_log(&x, Bounds::UNIT, Some(slice), 4).unwrap();

        // Assert
        let expected_mid = 667.0_f64.ln() / 1000.0_f64.ln();
        assert_eq!(q[0], 0.0);
        assert_eq!(q[1], 0.0);
        assert_relative_eq!(q[2], expected_mid, epsilon = 1e-12);
        assert_relative_eq!(q[3], expected_mid, epsilon = 1e-12);
        assert_relative_eq!(q[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Omitting `scale_slice` uses `bounds` as the slice.
    fn quantize_log_defaults_slice_to_bounds() {
        let bounds = b(1.0, 1000.0);
        let x = array![1.0, 20.0, 300.0, 999.0];

        let implicit = quantize_log(&x, bounds, None, 5).unwrap();
        let explicit = quantize_log(&x, bounds, Some(bounds), 5).unwrap();

        assert_eq!(implicit, explicit);
        assert_relative_eq!(implicit[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Non-positive slices and zero bins fail before any arithmetic.
    fn quantize_log_rejects_invalid_arguments() {
        assert_eq!(
            quantize_log(0.5, Bounds::UNIT, Some(b(0.0, 10.0)), 3),
            Err(TransformError::NonPositiveLogBounds { low: 0.0, high: 10.0 })
        );
        assert_eq!(
            quantize_log(0.5, Bounds::UNIT, Some(b(-1.0, 10.0)), 3),
            Err(TransformError::NonPositiveLogBounds { low: -1.0, high: 10.0 })
        );
        assert_eq!(
            quantize_log(0.5, Bounds::UNIT, Some(b(1.0, 10.0)), 0),
            Err(TransformError::InvalidBins { bins: 0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // A zero-width positive slice maps everything to `bounds.low`.
    fn quantize_log_zero_width_slice_returns_low() {
        let q = quantize_log(&array![0.2, 0.8], Bounds::UNIT, Some(b(5.0, 5.0)), 3).unwrap();

        assert_eq!(q, array![0.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Zero-width `bounds` with a regular positive slice collapse to
    // `bounds.low`, matching `quantize` on the same bounds.
    //
    // Given
    // -----
    // - bounds = [5, 5], scale_slice = [1, 10], bins = 3.
    //
    // Expect
    // ------
    // - Every non-NaN input returns 5; NaN stays NaN.
    fn quantize_log_zero_width_bounds_returns_low() {
        let bounds = b(5.0, 5.0);

        let scalar = quantize_log(5.0, bounds, Some(b(1.0, 10.0)), 3).unwrap();
        let q = quantize_log(&array![5.0, 2.0, f64::NAN], bounds, Some(b(1.0, 10.0)), 3).unwrap();

        assert_eq!(scalar, 5.0);
        assert_eq!(scalar, quantize(5.0, bounds, 3).unwrap());
        assert_eq!(&q.as_slice().unwrap()[..2], &[5.0, 5.0]);
        assert!(q[2].is_nan());
    }
}
