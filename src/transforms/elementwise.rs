//! elementwise — one algorithm, scalar and array call sites.
//!
//! Purpose
//! -------
//! Let every transform in [`crate::transforms`] be written once as a scalar
//! kernel `f64 -> T` and then applied to either a single `f64` or to every
//! element of an `ndarray` array (or slice), without a second copy of the
//! algorithm for the array case.
//!
//! Key behaviors
//! -------------
//! - [`ElementWise`] maps a scalar kernel over its receiver and returns a
//!   value of the same "shape": a bare `T` for `f64`, an owned
//!   `Array<T, D>` with the input's dimension for arrays, and a `Vec<T>` for
//!   slices.
//! - Outputs are always freshly allocated for the array/slice cases; inputs are
//!   never mutated.
//!
//! Conventions
//! -----------
//! - Arrays are accepted by reference (`&Array1<f64>`, `&ArrayView2<f64>`,
//!   ...), so callers keep ownership of their data.
//! - The kernel is `FnMut` so callers may capture precomputed constants such
//!   as the bound width.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// ElementWise — apply a scalar `f64` kernel to a scalar or to each element.
///
/// Purpose
/// -------
/// Serve as the single seam between scalar and array forms of the same
/// numeric operation, so that `quantize(0.4, ..)` and
/// `quantize(&array, ..)` share one implementation and cannot diverge.
///
/// Notes
/// -----
/// - `Mapped<T>` is a generic associated type so the same receiver can yield
///   `f64` outputs (transforms) and `bool` outputs (masks).
pub trait ElementWise {
    type Mapped<T>;

    fn map_elements<T, F>(self, f: F) -> Self::Mapped<T>
    where
        F: FnMut(f64) -> T;
}

impl ElementWise for f64 {
    type Mapped<T> = T;

    #[inline]
    fn map_elements<T, F>(self, mut f: F) -> T
    where
        F: FnMut(f64) -> T,
    {
        f(self)
    }
}

impl<S, D> ElementWise for &ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Mapped<T> = Array<T, D>;

    #[inline]
    fn map_elements<T, F>(self, f: F) -> Array<T, D>
    where
        F: FnMut(f64) -> T,
    {
        self.mapv(f)
    }
}

impl ElementWise for &[f64] {
    type Mapped<T> = Vec<T>;

    #[inline]
    fn map_elements<T, F>(self, f: F) -> Vec<T>
    where
        F: FnMut(f64) -> T,
    {
        self.iter().copied().map(f).collect()
    }
}
