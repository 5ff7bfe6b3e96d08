//! space_transforms — numeric transforms and chunked ranges for search spaces.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, when the `python-bindings`
//! feature is enabled, as the PyO3 bridge that exposes the same kernel to
//! Python via the `_space_transforms` extension module. The kernel maps
//! hyperparameter values between the raw domain, the unit interval, the log
//! domain and the quantized domain, and enumerates very large ranges in
//! bounded-size chunks.
//!
//! Key behaviors
//! -------------
//! - Re-export the two core modules: [`transforms`] (rescaling, quantization,
//!   near-integer tests) and [`enumerate`] (center-out ordering, chunked
//!   `arange`/`linspace`, split ranges).
//! - Define `#[pyfunction]` wrappers, iterator `#[pyclass]`es, and the
//!   `#[pymodule]` initializer for `_space_transforms`.
//! - Register the Python submodules (`transforms`, `enumerate`) in
//!   `sys.modules` so that dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, argument conversion, and error mapping.
//! - Every public operation is pure. Enumerators are the only stateful
//!   values, and each is an independent cursor.
//!
//! Conventions
//! -----------
//! - Python-exposed functions keep the keyword-only argument style of the
//!   Python library they back (`bounds=`, `bins=`, `chunk_size=`, ...).
//! - Rust errors ([`transforms::TransformError`], [`enumerate::RangeError`])
//!   surface in Python as `ValueError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should use [`prelude`] or the module paths directly and
//!   can ignore the PyO3 items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and
//!   by the cross-module pipeline tests under `tests/`.
//! - The PyO3 layer is exercised from Python.

pub mod enumerate;
pub mod transforms;
pub mod utils;

pub mod prelude {
    pub use crate::enumerate::prelude::*;
    pub use crate::transforms::prelude::*;
}

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    enumerate::{
        center::{CenterRange, center_range},
        chunked::{ArangeChunked, LinspaceChunked, arange_chunked, linspace_chunked},
        split::split_arange,
    },
    transforms::{
        integer::is_close_to_integer,
        quantize::{quantize, quantize_log},
        rescale::{normalize, rescale, scale},
    },
    utils::{PyValues, extract_bounds, extract_tolerance, extract_values, map_values},
};

/// CenterRangeIter — Python iterator over a center-out integer ordering.
///
/// Wraps [`CenterRange`]; each `__next__` yields one `int`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "space_transforms.enumerate")]
pub struct CenterRangeIter {
    inner: CenterRange,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CenterRangeIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<i64> {
        slf.inner.next()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// ArangeChunks — Python iterator over `int64` numpy segments.
///
/// Wraps [`ArangeChunked`]; at most one segment is alive on the Rust side
/// at any time, and each is handed to numpy without copying.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "space_transforms.enumerate")]
pub struct ArangeChunks {
    inner: ArangeChunked,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ArangeChunks {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__<'py>(mut slf: PyRefMut<'py, Self>) -> Option<Bound<'py, PyArray1<i64>>> {
        let py = slf.py();
        slf.inner.next().map(|chunk| chunk.into_pyarray(py))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    fn n_items(&self) -> u64 {
        self.inner.n_items()
    }
}

/// LinspaceChunks — Python iterator over `float64` numpy segments.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "space_transforms.enumerate")]
pub struct LinspaceChunks {
    inner: LinspaceChunked,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LinspaceChunks {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__<'py>(mut slf: PyRefMut<'py, Self>) -> Option<Bound<'py, PyArray1<f64>>> {
        let py = slf.py();
        slf.inner.next().map(|chunk| chunk.into_pyarray(py))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// normalize(x, bounds) — map `x` from `bounds` into `[0, 1]`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "normalize", signature = (x, *, bounds))]
fn py_normalize<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, bounds: (f64, f64),
) -> PyResult<PyObject> {
    let bounds = extract_bounds(bounds)?;
    let values = extract_values(py, x)?;
    map_values(py, values, |v| Ok(normalize(v, bounds)), |view| Ok(normalize(view, bounds)))
}

/// scale(unit_xs, to) — map unit-interval values onto `to`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "scale", signature = (unit_xs, to))]
fn py_scale<'py>(
    py: Python<'py>, unit_xs: &Bound<'py, PyAny>, to: (f64, f64),
) -> PyResult<PyObject> {
    let to = extract_bounds(to)?;
    let values = extract_values(py, unit_xs)?;
    map_values(py, values, |v| Ok(scale(v, to)), |view| Ok(scale(view, to)))
}

/// rescale(x, frm, to) — map `x` from the range `frm` onto `to`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "rescale", signature = (x, frm, to))]
fn py_rescale<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, frm: (f64, f64), to: (f64, f64),
) -> PyResult<PyObject> {
    let frm = extract_bounds(frm)?;
    let to = extract_bounds(to)?;
    let values = extract_values(py, x)?;
    map_values(py, values, |v| Ok(rescale(v, frm, to)), |view| Ok(rescale(view, frm, to)))
}

/// quantize(x, *, bounds, bins) — snap values onto `bins` levels of `bounds`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "quantize", signature = (x, *, bounds, bins))]
fn py_quantize<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, bounds: (f64, f64), bins: usize,
) -> PyResult<PyObject> {
    let bounds = extract_bounds(bounds)?;
    let values = extract_values(py, x)?;
    map_values(
        py,
        values,
        |v| Ok(quantize(v, bounds, bins)?),
        |view| Ok(quantize(view, bounds, bins)?),
    )
}

/// quantize_log(x, *, bounds, bins, scale_slice=None) — log-scale quantization.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "quantize_log", signature = (x, *, bounds, bins, scale_slice = None))]
fn py_quantize_log<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, bounds: (f64, f64), bins: usize,
    scale_slice: Option<(f64, f64)>,
) -> PyResult<PyObject> {
    let bounds = extract_bounds(bounds)?;
    let slice = scale_slice.map(extract_bounds).transpose()?;
    let values = extract_values(py, x)?;
    map_values(
        py,
        values,
        |v| Ok(quantize_log(v, bounds, slice, bins)?),
        |view| Ok(quantize_log(view, bounds, slice, bins)?),
    )
}

/// is_close_to_integer(value, *, atol=1e-9, rtol=1e-5) — `bool` or mask.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "is_close_to_integer", signature = (value, *, atol = None, rtol = None))]
fn py_is_close_to_integer<'py>(
    py: Python<'py>, value: &Bound<'py, PyAny>, atol: Option<f64>, rtol: Option<f64>,
) -> PyResult<PyObject> {
    let tol = extract_tolerance(atol, rtol)?;
    match extract_values(py, value)? {
        PyValues::Scalar(v) => {
            Ok(is_close_to_integer(v, tol).into_pyobject(py)?.to_owned().into_any().unbind())
        }
        PyValues::Array(arr) => {
            let mask: Array1<bool> = is_close_to_integer(&arr.as_array(), tol);
            Ok(mask.into_pyarray(py).into_any().unbind())
        }
    }
}

/// center_range(center, low, high, step=1) — center-out integer iterator.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "center_range", signature = (center, low, high, step = 1))]
fn py_center_range(center: i64, low: i64, high: i64, step: i64) -> PyResult<CenterRangeIter> {
    Ok(CenterRangeIter { inner: center_range(center, low, high, step)? })
}

/// arange_chunked(start, stop, step=1, *, chunk_size) — chunked `np.arange`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "arange_chunked", signature = (start, stop, step = 1, *, chunk_size))]
fn py_arange_chunked(start: i64, stop: i64, step: i64, chunk_size: usize) -> PyResult<ArangeChunks> {
    Ok(ArangeChunks { inner: arange_chunked(start, stop, step, chunk_size)? })
}

/// linspace_chunked(start, stop, num, *, chunk_size, endpoint=False) — chunked `np.linspace`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "linspace_chunked",
    signature = (start, stop, num, *, chunk_size, endpoint = false)
)]
fn py_linspace_chunked(
    start: f64, stop: f64, num: usize, chunk_size: usize, endpoint: bool,
) -> PyResult<LinspaceChunks> {
    Ok(LinspaceChunks { inner: linspace_chunked(start, stop, num, chunk_size, endpoint)? })
}

/// split_arange(frm, to, *, pivot) — `[frm, to)` without `pivot`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "split_arange", signature = (frm, to, *, pivot))]
fn py_split_arange<'py>(py: Python<'py>, frm: i64, to: i64, pivot: i64) -> Bound<'py, PyArray1<i64>> {
    split_arange(frm, to, pivot).into_pyarray(py)
}

/// _space_transforms — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_space_transforms` Python module and register its
/// `transforms` and `enumerate` submodules.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension; not called
///   directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _space_transforms<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let transforms_mod = PyModule::new(_py, "transforms")?;
    let enumerate_mod = PyModule::new(_py, "enumerate")?;
    transforms_submodule(_py, m, &transforms_mod)?;
    enumerate_submodule(_py, m, &enumerate_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("space_transforms.transforms", transforms_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("space_transforms.enumerate", enumerate_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn transforms_submodule<'py>(
    _py: Python, space_transforms: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(py_scale, m)?)?;
    m.add_function(wrap_pyfunction!(py_rescale, m)?)?;
    m.add_function(wrap_pyfunction!(py_quantize, m)?)?;
    m.add_function(wrap_pyfunction!(py_quantize_log, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_close_to_integer, m)?)?;
    space_transforms.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn enumerate_submodule<'py>(
    _py: Python, space_transforms: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CenterRangeIter>()?;
    m.add_class::<ArangeChunks>()?;
    m.add_class::<LinspaceChunks>()?;
    m.add_function(wrap_pyfunction!(py_center_range, m)?)?;
    m.add_function(wrap_pyfunction!(py_arange_chunked, m)?)?;
    m.add_function(wrap_pyfunction!(py_linspace_chunked, m)?)?;
    m.add_function(wrap_pyfunction!(py_split_arange, m)?)?;
    space_transforms.add_submodule(m)?;
    Ok(())
}
