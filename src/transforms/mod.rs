//! transforms — rescaling, quantization, and near-integer tests.
//!
//! Purpose
//! -------
//! Collect the pure value transforms used to move hyperparameter values
//! between coordinate spaces: the raw domain, the unit interval, the log
//! domain, and the quantized domain. Higher-level sampling and configuration
//! code supplies raw values and bounds and receives transformed values back.
//!
//! Key behaviors
//! -------------
//! - Represent bound pairs as validated [`Bounds`] (`low ≤ high`, finite).
//! - Rescale linearly via [`normalize`], [`scale`], and [`rescale`], with
//!   fast paths for unit bounds and identical ranges.
//! - Snap values onto `bins` levels with [`quantize`], or onto the linear
//!   levels of a log-sampled axis with [`quantize_log`].
//! - Test values against their nearest integer with [`is_close_to_integer`].
//! - Serve scalar and array inputs from a single implementation through the
//!   [`ElementWise`] trait.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every transform is stateless and side-effect free; nothing is cached
//!   between calls.
//! - Preconditions (bounds ordering, `bins ≥ 1`, positive log slices,
//!   non-negative tolerances) are enforced at construction or at call entry
//!   and reported as [`TransformError`]; no output is produced on failure.
//! - Zero-width bounds in `normalize`/`rescale` propagate `±∞`/`NaN`; callers
//!   that can hold such bounds must guard before calling.
//!
//! Conventions
//! -----------
//! - All arithmetic is `f64`. Arrays are `ndarray` arrays of any dimension,
//!   taken by reference, returned as owned arrays of the same shape.
//! - This module never performs I/O; it only emits `tracing` events at
//!   `trace` level on degenerate fallbacks.
//!
//! Downstream usage
//! ----------------
//! - Import the surface via `transforms::prelude::*`, or the crate-wide
//!   `space_transforms::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own laws (round-trip,
//!   idempotence, top-bin inclusivity, tolerance edges). Cross-module
//!   pipelines are exercised from `tests/`.

pub mod bounds;
pub mod elementwise;
pub mod errors;
pub mod integer;
pub mod quantize;
pub mod rescale;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bounds::Bounds;
pub use self::elementwise::ElementWise;
pub use self::errors::{TransformError, TransformResult};
pub use self::integer::{
    DEFAULT_ATOL, DEFAULT_RTOL, IntegerTolerance, is_close_to_integer, is_close_to_integer_single,
};
pub use self::quantize::{quantize, quantize_log};
pub use self::rescale::{normalize, rescale, scale};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use space_transforms::transforms::prelude::*;
//
// to import the main transform surface in a single line.

pub mod prelude {
    pub use super::bounds::Bounds;
    pub use super::elementwise::ElementWise;
    pub use super::errors::{TransformError, TransformResult};
    pub use super::integer::{IntegerTolerance, is_close_to_integer, is_close_to_integer_single};
    pub use super::quantize::{quantize, quantize_log};
    pub use super::rescale::{normalize, rescale, scale};
}
