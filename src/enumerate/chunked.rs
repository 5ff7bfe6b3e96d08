//! chunked — bounded-memory enumeration of large ranges.
//!
//! Purpose
//! -------
//! Produce `arange`/`linspace`-style sequences as a stream of `ndarray`
//! segments of at most `chunk_size` elements, so that ranges far larger than
//! memory can be scanned one bounded buffer at a time.
//!
//! Key behaviors
//! -------------
//! - [`arange_chunked`] yields `Array1<i64>` segments of the stepped
//!   half-open range `[start, stop)`.
//! - [`linspace_chunked`] yields `Array1<f64>` segments of `num` evenly
//!   spaced samples over `[start, stop]` or `[start, stop)`.
//! - Segments come out in increasing order and partition the full sequence:
//!   no gaps, no overlap, only the last segment may be short.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each pull allocates exactly one segment and keeps no reference to it;
//!   the enumerator itself holds a handful of scalars.
//! - Element `i` of the arange sequence is `start + i · step`, computed
//!   directly from its index, so segment boundaries never accumulate drift.
//! - The item count `⌈(stop − start) / step⌉` is computed in unsigned
//!   integer arithmetic and cannot overflow for any `i64` inputs.
//!
//! Conventions
//! -----------
//! - Constructors validate all preconditions and return
//!   [`RangeError`](crate::enumerate::errors::RangeError) before any
//!   allocation; iteration itself never fails.
//! - Construction logs the planned item/chunk counts at `debug` level.
use std::iter::FusedIterator;

use ndarray::Array1;

use crate::enumerate::errors::{RangeError, RangeResult};

fn validate_chunk_size(chunk_size: usize) -> RangeResult<()> {
    if chunk_size == 0 {
        return Err(RangeError::InvalidChunkSize { chunk_size });
    }
    Ok(())
}

/// ArangeChunked — chunked iterator over `start, start + step, …` below `stop`.
///
/// Fields
/// ------
/// - `start`, `step`: first value and stride of the sequence.
/// - `n_items`: total number of values, `⌈(stop − start) / step⌉`.
/// - `chunk_size`: maximum segment length.
/// - `next_item`: index of the first value of the next segment.
///
/// Performance
/// -----------
/// - O(chunk_size) time and memory per pull; `len()` is the number of
///   remaining segments.
#[derive(Debug, Clone)]
pub struct ArangeChunked {
    start: i64,
    step: i64,
    n_items: u64,
    chunk_size: u64,
    next_item: u64,
}

impl ArangeChunked {
    /// Total number of values across all segments.
    pub fn n_items(&self) -> u64 {
        self.n_items
    }

    /// Total number of segments, including those already produced.
    pub fn n_chunks(&self) -> u64 {
        self.n_items.div_ceil(self.chunk_size)
    }

    #[inline]
    fn value_at(&self, index: u64) -> i64 {
        // Stays within [start, stop), so the narrowing is lossless.
        (self.start as i128 + index as i128 * self.step as i128) as i64
    }
}

impl Iterator for ArangeChunked {
    type Item = Array1<i64>;

    fn next(&mut self) -> Option<Array1<i64>> {
        if self.next_item >= self.n_items {
            return None;
        }
        let end = self.next_item.saturating_add(self.chunk_size).min(self.n_items);
        let chunk: Array1<i64> = (self.next_item..end).map(|i| self.value_at(i)).collect();
        self.next_item = end;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n_items - self.next_item).div_ceil(self.chunk_size);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for ArangeChunked {}

impl FusedIterator for ArangeChunked {}

/// Enumerate `[start, stop)` in steps of `step`, `chunk_size` values at a time.
///
/// Parameters
/// ----------
/// - `start`, `stop`: `i64`
///   Half-open range, `start < stop`.
/// - `step`: `i64`
///   Stride, `> 0`.
/// - `chunk_size`: `usize`
///   Maximum segment length, `> 0`.
///
/// Returns
/// -------
/// RangeResult<ArangeChunked>
///   Iterator of `Array1<i64>` segments whose concatenation equals the
///   stepped range.
///
/// Errors
/// ------
/// - `RangeError::InvalidStep` when `step ≤ 0`.
/// - `RangeError::InvalidChunkSize` when `chunk_size == 0`.
/// - `RangeError::EmptyRange` when `start ≥ stop`.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::enumerate::chunked::arange_chunked;
/// # use ndarray::array;
/// let chunks: Vec<_> = arange_chunked(0, 10, 1, 3).unwrap().collect();
/// assert_eq!(chunks, vec![array![0, 1, 2], array![3, 4, 5], array![6, 7, 8], array![9]]);
/// ```
pub fn arange_chunked(
    start: i64, stop: i64, step: i64, chunk_size: usize,
) -> RangeResult<ArangeChunked> {
    if step <= 0 {
        return Err(RangeError::InvalidStep { step });
    }
    validate_chunk_size(chunk_size)?;
    if start >= stop {
        return Err(RangeError::EmptyRange { start, stop });
    }

    let n_items = stop.abs_diff(start).div_ceil(step as u64);
    let chunked =
        ArangeChunked { start, step, n_items, chunk_size: chunk_size as u64, next_item: 0 };

    tracing::debug!(
        start,
        stop,
        step,
        chunk_size,
        n_items,
        n_chunks = chunked.n_chunks(),
        "arange_chunked planned"
    );
    Ok(chunked)
}

#[derive(Debug, Clone)]
enum LinspaceSource {
    /// Whole sequence fits in one segment; taken on the first pull.
    Single(Option<Array1<f64>>),
    /// Index segments mapped through `i / divisor · width + start`.
    Chunked { indices: ArangeChunked, start: f64, width: f64, divisor: f64 },
}

/// LinspaceChunked — chunked iterator over evenly spaced samples.
///
/// Notes
/// -----
/// - When the sample count fits in one chunk, the single segment is built
///   eagerly at construction (it is bounded by `chunk_size` anyway).
#[derive(Debug, Clone)]
pub struct LinspaceChunked {
    source: LinspaceSource,
}

impl Iterator for LinspaceChunked {
    type Item = Array1<f64>;

    fn next(&mut self) -> Option<Array1<f64>> {
        match &mut self.source {
            LinspaceSource::Single(segment) => segment.take(),
            LinspaceSource::Chunked { indices, start, width, divisor } => {
                let (start, width, divisor) = (*start, *width, *divisor);
                indices.next().map(|chunk| chunk.mapv(|i| (i as f64 / divisor) * width + start))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            LinspaceSource::Single(segment) => {
                let n = usize::from(segment.is_some());
                (n, Some(n))
            }
            LinspaceSource::Chunked { indices, .. } => indices.size_hint(),
        }
    }
}

impl ExactSizeIterator for LinspaceChunked {}

impl FusedIterator for LinspaceChunked {}

fn linspace_single(start: f64, stop: f64, num: usize, endpoint: bool) -> Array1<f64> {
    let divisor = if endpoint { num - 1 } else { num };
    if divisor == 0 {
        return Array1::from_elem(num, start);
    }

    let step = (stop - start) / divisor as f64;
    let mut samples: Array1<f64> = (0..num).map(|i| i as f64 * step + start).collect();
    if endpoint {
        samples[num - 1] = stop;
    }
    samples
}

/// Produce `num` evenly spaced samples over `[start, stop]`, chunked.
///
/// Parameters
/// ----------
/// - `start`, `stop`: `f64`
///   Finite interval ends, `start < stop`.
/// - `num`: `usize`
///   Number of samples, `> 0`.
/// - `chunk_size`: `usize`
///   Maximum segment length, `> 0`.
/// - `endpoint`: `bool`
///   Whether `stop` is the last sample (`[start, stop]`) or excluded
///   (`[start, stop)`).
///
/// Returns
/// -------
/// RangeResult<LinspaceChunked>
///   Iterator of `Array1<f64>` segments.
///
/// Errors
/// ------
/// - `RangeError::InvalidSampleCount` when `num == 0`.
/// - `RangeError::InvalidChunkSize` when `chunk_size == 0`.
/// - `RangeError::NonFiniteEndpoint` when either end is `NaN`/±∞.
/// - `RangeError::EmptyLinspace` when `start ≥ stop`.
/// - `RangeError::NonFiniteWidth` when `stop − start` overflows to ∞.
///
/// Notes
/// -----
/// - If `num ≤ chunk_size`, one segment is produced with step
///   `(stop − start) / divisor` and, with `endpoint`, a final sample equal to
///   `stop` exactly. Otherwise sample `i` is `i / divisor · (stop − start) +
///   start`, where `divisor = num − 1` with `endpoint` and `num` without.
///
/// Examples
/// --------
/// ```rust
/// # use space_transforms::enumerate::chunked::linspace_chunked;
/// let chunks: Vec<_> = linspace_chunked(0.0, 1.0, 4, 10, false).unwrap().collect();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace_chunked(
    start: f64, stop: f64, num: usize, chunk_size: usize, endpoint: bool,
) -> RangeResult<LinspaceChunked> {
    if num == 0 {
        return Err(RangeError::InvalidSampleCount { num });
    }
    validate_chunk_size(chunk_size)?;
    if !start.is_finite() || !stop.is_finite() {
        return Err(RangeError::NonFiniteEndpoint { start, stop });
    }
    if start >= stop {
        return Err(RangeError::EmptyLinspace { start, stop });
    }
    if !(stop - start).is_finite() {
        return Err(RangeError::NonFiniteWidth { start, stop });
    }

    tracing::debug!(start, stop, num, chunk_size, endpoint, "linspace_chunked planned");

    if num <= chunk_size {
        let segment = linspace_single(start, stop, num, endpoint);
        return Ok(LinspaceChunked { source: LinspaceSource::Single(Some(segment)) });
    }

    let n = i64::try_from(num).map_err(|_| RangeError::InvalidSampleCount { num })?;
    let indices = arange_chunked(0, n, 1, chunk_size)?;
    let divisor = if endpoint { (num - 1) as f64 } else { num as f64 };

    Ok(LinspaceChunked {
        source: LinspaceSource::Chunked { indices, start, width: stop - start, divisor },
    })
}
