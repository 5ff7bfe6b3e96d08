//! enumerate — lazy, bounded-memory range enumeration.
//!
//! Purpose
//! -------
//! Enumerate integer and real-valued ranges that may be far larger than
//! memory, either as a stream of bounded `ndarray` segments or as a
//! center-outward integer ordering, and build small "all but one" integer
//! ranges.
//!
//! Key behaviors
//! -------------
//! - [`center_range`]: integers of `[low, high]` alternating outward from a
//!   center (below first), excluding the center.
//! - [`arange_chunked`]: the stepped range `[start, stop)` as `Array1<i64>`
//!   segments of at most `chunk_size` values.
//! - [`linspace_chunked`]: `num` evenly spaced samples over `[start, stop]`
//!   (or `[start, stop)`) as `Array1<f64>` segments.
//! - [`split_arange`]: `[from, to)` without a pivot value, materialized.
//!
//! Invariants & assumptions
//! ------------------------
//! - Enumerators are plain iterators: each `next()` computes one item or
//!   one segment from a few scalars, never re-deriving earlier segments, and
//!   holds no reference to what it returned.
//! - Segments partition the logical sequence exactly and arrive in
//!   increasing order.
//! - Enumerators are `Send`, but a single instance is a sequential cursor;
//!   share one across threads only behind external synchronization.
//!
//! Conventions
//! -----------
//! - Constructors validate their arguments and return [`RangeError`];
//!   iteration never fails or panics.
//! - Consumers cancel by simply dropping the iterator.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover the reference orderings, exact
//!   partitioning over parameter grids, boundary values at the `i64`
//!   extremes, and argument validation.

pub mod center;
pub mod chunked;
pub mod errors;
pub mod split;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::center::{CenterRange, center_range};
pub use self::chunked::{ArangeChunked, LinspaceChunked, arange_chunked, linspace_chunked};
pub use self::errors::{RangeError, RangeResult};
pub use self::split::split_arange;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::center::center_range;
    pub use super::chunked::{arange_chunked, linspace_chunked};
    pub use super::errors::{RangeError, RangeResult};
    pub use super::split::split_arange;
}
