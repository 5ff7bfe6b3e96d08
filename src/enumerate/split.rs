//! Integer range with one value punched out.
use ndarray::Array1;

/// Every integer of `[from, to)` except `pivot`, in increasing order.
///
/// Built as the concatenation of `[from, pivot)` and `[pivot + 1, to)`, each
/// clipped to `[from, to)`, so a pivot outside the range leaves it whole.
///
/// # Examples
/// ```rust
/// # use space_transforms::enumerate::split::split_arange;
/// # use ndarray::array;
/// assert_eq!(split_arange(0, 10, 5), array![0, 1, 2, 3, 4, 6, 7, 8, 9]);
/// assert_eq!(split_arange(0, 3, 7), array![0, 1, 2]);
/// ```
pub fn split_arange(from: i64, to: i64, pivot: i64) -> Array1<i64> {
    let below = from..pivot.min(to);
    let above = pivot.saturating_add(1).max(from)..to;
    below.chain(above).collect()
}
