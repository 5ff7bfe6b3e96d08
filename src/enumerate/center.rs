//! center — center-outward enumeration of an integer interval.
//!
//! Purpose
//! -------
//! Enumerate the integers of `[low, high]` reachable from a `center` in steps
//! of `step`, alternating below/above and moving outward, so that consumers
//! visit the neighbors of a value before the far ends of its range.
//!
//! Key behaviors
//! -------------
//! - [`center_range`] validates its arguments and returns a [`CenterRange`]
//!   iterator.
//! - The first value is `center − step`, then `center + step`, then
//!   `center − 2·step`, and so on; once one side runs out the other side
//!   continues alone.
//! - `center` itself is never produced.
//!
//! Invariants & assumptions
//! ------------------------
//! - `low ≤ center ≤ high` and `step > 0` (checked).
//! - Each value appears once; the total count is
//!   `⌊(center − low)/step⌋ + ⌊(high − center)/step⌋`.
//! - Values are computed incrementally from two cursors; no state beyond a
//!   few integers is held and no value outside `[low, high]` is computed.
use std::iter::FusedIterator;

use crate::enumerate::errors::{RangeError, RangeResult};

/// One direction of a center-out walk.
#[derive(Debug, Clone)]
struct Side {
    cursor: i64,
    delta: i64,
    remaining: u64,
}

impl Side {
    #[inline]
    fn pull(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.cursor;
        self.cursor = value.saturating_add(self.delta);
        Some(value)
    }
}

/// CenterRange — iterator over integers moving outward from a center.
///
/// Purpose
/// -------
/// Lazily produce the center-out ordering described in [`center_range`].
///
/// Fields
/// ------
/// - `below`, `above`: cursors walking down from `center − step` and up from
///   `center + step`, each with its remaining count.
/// - `below_next`: which side is pulled on the next call.
///
/// Performance
/// -----------
/// - O(1) memory and O(1) per item; `len()` is exact.
#[derive(Debug, Clone)]
pub struct CenterRange {
    below: Side,
    above: Side,
    below_next: bool,
}

impl Iterator for CenterRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.below_next {
            self.below_next = false;
            self.below.pull().or_else(|| self.above.pull())
        } else {
            self.below_next = true;
            self.above.pull().or_else(|| self.below.pull())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.below.remaining.saturating_add(self.above.remaining);
        match usize::try_from(total) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for CenterRange {}

impl FusedIterator for CenterRange {}

/// Enumerate `[low, high]` outward from `center` in steps of `step`.
///
/// Parameters
/// ----------
/// - `center`: `i64`
///   Pivot value; excluded from the output.
/// - `low`, `high`: `i64`
///   Inclusive ends of the interval, `low ≤ center ≤ high`.
/// - `step`: `i64`
///   Distance between consecutive values on each side, `> 0`.
///
/// Returns
/// -------
/// RangeResult<CenterRange>
///   An iterator over `center − step, center + step, center − 2·step, …`.
///
/// Errors
/// ------
/// - `RangeError::CenterOutOfRange` when `center ∉ [low, high]`.
/// - `RangeError::InvalidStep` when `step ≤ 0`.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::enumerate::center::center_range;
/// let order: Vec<i64> = center_range(5, 0, 10, 1).unwrap().collect();
/// assert_eq!(order, vec![4, 6, 3, 7, 2, 8, 1, 9, 0, 10]);
/// ```
pub fn center_range(center: i64, low: i64, high: i64, step: i64) -> RangeResult<CenterRange> {
    if !(low <= center && center <= high) {
        return Err(RangeError::CenterOutOfRange { center, low, high });
    }
    if step <= 0 {
        return Err(RangeError::InvalidStep { step });
    }

    let stride = step as u64;
    let below = Side {
        cursor: center.saturating_sub(step),
        delta: -step,
        remaining: center.abs_diff(low) / stride,
    };
    let above = Side {
        cursor: center.saturating_add(step),
        delta: step,
        remaining: high.abs_diff(center) / stride,
    };

    Ok(CenterRange { below, above, below_next: true })
}
