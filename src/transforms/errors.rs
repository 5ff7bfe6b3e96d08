//! transforms::errors — error surface for value transforms.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the rescaling,
//! quantization, and near-integer routines, together with a conversion to
//! Python exceptions when the `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Define [`TransformResult`] and [`TransformError`] as the canonical result
//!   and error types for every fallible constructor or transform in
//!   [`crate::transforms`].
//! - Attach human-readable `Display` messages that name the violated
//!   precondition and embed the offending value(s).
//! - Implement `From<TransformError> for PyErr`, mapping every variant to a
//!   `ValueError` at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every variant describes a *precondition violation* detected before any
//!   arithmetic is performed; numerically degenerate results (e.g., division
//!   by a zero-width range inside `normalize`) are never reported here and
//!   propagate as `inf`/`NaN` instead.
//! - Variants are small and `Clone`, so they can be stored or compared in
//!   tests without allocation beyond the `&'static str` reasons.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the mathematical constraint (e.g.
//!   "low ≤ high", "bins ≥ 1") rather than implementation details.
//! - Enumeration errors live in [`crate::enumerate::errors`]; this module
//!   only covers value transforms.
//!
//! Testing notes
//! -------------
//! - Unit tests check that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TransformResult<T> = Result<T, TransformError>;

/// TransformError — precondition violations for value transforms.
///
/// Variants
/// --------
/// - `InvalidBounds { low, high, reason }`
///   A bound pair is non-finite or has `low > high`.
/// - `InvalidBins { bins }`
///   Quantization was requested with fewer than one level.
/// - `NonPositiveLogBounds { low, high }`
///   A log-scale slice contains a non-positive endpoint, so `ln` is
///   undefined on it.
/// - `InvalidTolerance { atol, rtol, reason }`
///   Near-integer tolerances are negative or non-finite.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it can be
///   propagated with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Bounds ----
    InvalidBounds { low: f64, high: f64, reason: &'static str },
    NonPositiveLogBounds { low: f64, high: f64 },

    // ---- Quantization ----
    InvalidBins { bins: usize },

    // ---- Tolerances ----
    InvalidTolerance { atol: f64, rtol: f64, reason: &'static str },
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Bounds ----
            TransformError::InvalidBounds { low, high, reason } => {
                write!(f, "Invalid bounds ({low}, {high}): {reason}")
            }
            TransformError::NonPositiveLogBounds { low, high } => {
                write!(
                    f,
                    "Invalid log-scale bounds ({low}, {high}): both endpoints must be strictly positive"
                )
            }

            // ---- Quantization ----
            TransformError::InvalidBins { bins } => {
                write!(f, "Invalid bin count {bins}: must satisfy bins ≥ 1")
            }

            // ---- Tolerances ----
            TransformError::InvalidTolerance { atol, rtol, reason } => {
                write!(f, "Invalid tolerance (atol={atol}, rtol={rtol}): {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
