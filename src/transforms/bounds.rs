//! Bound pairs — validated closed intervals `[low, high]`.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the `(low, high)` pairs that every
//! rescaling and quantization routine is parameterized by, so that the
//! transforms themselves can assume `low ≤ high` and finite endpoints without
//! re-checking on every call.
//!
//! Key behaviors
//! -------------
//! - Construct [`Bounds`] values that enforce finiteness and `low ≤ high`.
//! - Accept zero-width intervals (`low == high`); downstream transforms
//!   document how they treat them.
//! - Expose the unit interval as [`Bounds::UNIT`], which the transforms use as
//!   a fast path.
//! - Lift strictly positive bounds into log space via [`Bounds::ln`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `low ≤ high` for all constructed bounds.
//! - Both endpoints are finite.
//!
//! Conventions
//! -----------
//! - Invalid configurations return `TransformError::InvalidBounds` rather than
//!   panicking.
//! - Equality is exact `f64` equality of both endpoints; the unit fast paths
//!   rely on this.
//!
//! Testing notes
//! -------------
//! - Unit tests validate that `Bounds::new` accepts ordered finite pairs,
//!   including zero-width ones, and rejects reversed or non-finite pairs with
//!   the right reason; `ln` is checked for positive and non-positive inputs.
use crate::transforms::errors::{TransformError, TransformResult};

/// Bounds — a closed interval `[low, high]` of finite reals.
///
/// Purpose
/// -------
/// Describe the value range a transform reads from or writes to, for example
/// the raw domain of a hyperparameter or the log-transformed slice a value was
/// sampled from.
///
/// Fields
/// ------
/// - `low`: `f64`
///   Lower edge of the interval (inclusive).
/// - `high`: `f64`
///   Upper edge of the interval (inclusive, `≥ low`).
///
/// Invariants
/// ----------
/// - `low.is_finite() && high.is_finite()`.
/// - `low ≤ high`; `low == high` is a legal zero-width interval.
///
/// Performance
/// -----------
/// - `Copy`, two `f64`s; pass by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower edge (inclusive).
    pub low: f64,
    /// Upper edge (inclusive).
    pub high: f64,
}

impl Bounds {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Bounds = Bounds { low: 0.0, high: 1.0 };

    /// Construct validated bounds from two endpoints.
    ///
    /// Parameters
    /// ----------
    /// - `low`: `f64`
    ///   Lower edge of the interval.
    /// - `high`: `f64`
    ///   Upper edge of the interval.
    ///
    /// Returns
    /// -------
    /// TransformResult<Bounds>
    ///   - `Ok(Bounds)` when both endpoints are finite and `low ≤ high`.
    ///   - `Err(TransformError::InvalidBounds { .. })` otherwise.
    ///
    /// Errors
    /// ------
    /// - `TransformError::InvalidBounds`
    ///   Returned when either endpoint is `NaN`/±∞ or when `low > high`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use space_transforms::transforms::bounds::Bounds;
    /// # use space_transforms::transforms::errors::TransformError;
    /// let b = Bounds::new(-1.0, 3.0).unwrap();
    /// assert_eq!(b.width(), 4.0);
    ///
    /// match Bounds::new(3.0, -1.0) {
    ///     Err(TransformError::InvalidBounds { .. }) => (),
    ///     other => panic!("expected InvalidBounds, got {other:?}"),
    /// }
    /// ```
    pub fn new(low: f64, high: f64) -> TransformResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(TransformError::InvalidBounds {
                low,
                high,
                reason: "Bounds must be finite.",
            });
        }

        if low > high {
            return Err(TransformError::InvalidBounds {
                low,
                high,
                reason: "Bounds must satisfy low ≤ high.",
            });
        }

        Ok(Bounds { low, high })
    }

    /// Width `high - low` of the interval (zero for degenerate bounds).
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether these bounds are exactly `[0, 1]`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        *self == Bounds::UNIT
    }

    /// Whether the interval has zero width.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Lift strictly positive bounds to `(ln(low), ln(high))`.
    ///
    /// Errors
    /// ------
    /// - `TransformError::NonPositiveLogBounds`
    ///   Returned when `low ≤ 0`, since the logarithm is undefined there.
    ///
    /// Notes
    /// -----
    /// - `ln` is monotone, so the result is again a valid `Bounds`.
    pub fn ln(&self) -> TransformResult<Bounds> {
        if self.low <= 0.0 {
            return Err(TransformError::NonPositiveLogBounds { low: self.low, high: self.high });
        }
        Ok(Bounds { low: self.low.ln(), high: self.high.ln() })
    }
}

impl TryFrom<(f64, f64)> for Bounds {
    type Error = TransformError;

    fn try_from(value: (f64, f64)) -> TransformResult<Self> {
        Bounds::new(value.0, value.1)
    }
}

impl From<Bounds> for (f64, f64) {
    fn from(bounds: Bounds) -> Self {
        (bounds.low, bounds.high)
    }
}
