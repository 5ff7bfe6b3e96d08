//! enumerate::errors — error surface for lazy range enumerators.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by the enumerator
//! constructors in [`crate::enumerate`], plus the Python conversion when the
//! `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Define [`RangeResult`] and [`RangeError`].
//! - Give each variant a `Display` message naming the violated precondition
//!   and the offending value(s).
//! - Map every variant to `ValueError` at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised only by constructors, before any chunk is produced;
//!   once an enumerator exists, pulling from it cannot fail.
//!
//! Testing notes
//! -------------
//! - Unit tests check payload embedding in the `Display` output.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RangeResult<T> = Result<T, RangeError>;

/// RangeError — precondition violations for range enumerators.
///
/// Variants
/// --------
/// - `InvalidStep { step }`
///   Step must be strictly positive.
/// - `InvalidChunkSize { chunk_size }`
///   Chunk size must be strictly positive.
/// - `EmptyRange { start, stop }`
///   Integer range with `start ≥ stop`.
/// - `EmptyLinspace { start, stop }`
///   Real range with `start ≥ stop`.
/// - `NonFiniteEndpoint { start, stop }`
///   Real range with a `NaN`/±∞ endpoint.
/// - `NonFiniteWidth { start, stop }`
///   Finite endpoints whose width `stop − start` overflows to ∞.
/// - `InvalidSampleCount { num }`
///   Sample count is zero or not representable as an index.
/// - `CenterOutOfRange { center, low, high }`
///   Center-out enumeration requires `low ≤ center ≤ high`.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    //------ Shared ------
    InvalidStep { step: i64 },
    InvalidChunkSize { chunk_size: usize },

    //------ Integer ranges ------
    EmptyRange { start: i64, stop: i64 },
    CenterOutOfRange { center: i64, low: i64, high: i64 },

    //------ Real ranges ------
    EmptyLinspace { start: f64, stop: f64 },
    NonFiniteEndpoint { start: f64, stop: f64 },
    NonFiniteWidth { start: f64, stop: f64 },
    InvalidSampleCount { num: usize },
}

impl std::error::Error for RangeError {}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::InvalidStep { step } => {
                write!(f, "Invalid step {step}: must be > 0")
            }
            RangeError::InvalidChunkSize { chunk_size } => {
                write!(f, "Invalid chunk size {chunk_size}: must be > 0")
            }
            RangeError::EmptyRange { start, stop } => {
                write!(f, "Empty range [{start}, {stop}): must satisfy start < stop")
            }
            RangeError::CenterOutOfRange { center, low, high } => {
                write!(f, "Center {center} outside [{low}, {high}]: must satisfy low ≤ center ≤ high")
            }
            RangeError::EmptyLinspace { start, stop } => {
                write!(f, "Empty interval [{start}, {stop}]: must satisfy start < stop")
            }
            RangeError::NonFiniteEndpoint { start, stop } => {
                write!(f, "Non-finite interval endpoint in [{start}, {stop}]")
            }
            RangeError::NonFiniteWidth { start, stop } => {
                write!(f, "Interval [{start}, {stop}] has a width that overflows f64")
            }
            RangeError::InvalidSampleCount { num } => {
                write!(f, "Invalid sample count {num}: must be > 0")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RangeError> for PyErr {
    fn from(err: RangeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
