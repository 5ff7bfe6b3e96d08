//! utils — Python argument extraction for the PyO3 bindings.
//!
//! Converts loosely typed Python arguments (floats, numpy arrays, pandas
//! Series, plain sequences, `(low, high)` tuples) into the validated Rust
//! types used by [`crate::transforms`], and hands results back as Python
//! floats or numpy arrays. Everything here is compiled only with the
//! `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, ArrayView1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::transforms::{bounds::Bounds, integer::IntegerTolerance};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array1 / Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a float, a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Values received from Python: a bare float or a 1-D float64 array.
#[cfg(feature = "python-bindings")]
pub enum PyValues<'py> {
    Scalar(f64),
    Array(PyReadonlyArray1<'py, f64>),
}

#[cfg(feature = "python-bindings")]
pub fn extract_values<'py>(py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<PyValues<'py>> {
    // Arrays first: 1-element arrays also convert through `__float__`.
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(PyValues::Array(arr_ro));
    }
    if let Ok(value) = raw.extract::<f64>() {
        return Ok(PyValues::Scalar(value));
    }
    Ok(PyValues::Array(extract_f64_array(py, raw)?))
}

/// Apply a transform to either form of [`PyValues`] and convert the result
/// back into a Python float or numpy array.
///
/// The two closures should call the same generic transform; they exist only
/// because Rust closures cannot be generic over the receiver.
#[cfg(feature = "python-bindings")]
pub fn map_values<'py, S, A>(
    py: Python<'py>, values: PyValues<'py>, on_scalar: S, on_array: A,
) -> PyResult<PyObject>
where
    S: FnOnce(f64) -> PyResult<f64>,
    A: FnOnce(&ArrayView1<'_, f64>) -> PyResult<Array1<f64>>,
{
    match values {
        PyValues::Scalar(value) => Ok(on_scalar(value)?.into_pyobject(py)?.into_any().unbind()),
        PyValues::Array(arr) => {
            let view = arr.as_array();
            Ok(on_array(&view)?.into_pyarray(py).into_any().unbind())
        }
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_bounds(raw: (f64, f64)) -> PyResult<Bounds> {
    Ok(Bounds::new(raw.0, raw.1)?)
}

#[cfg(feature = "python-bindings")]
pub fn extract_tolerance(atol: Option<f64>, rtol: Option<f64>) -> PyResult<IntegerTolerance> {
    let defaults = IntegerTolerance::default();
    Ok(IntegerTolerance::new(atol.unwrap_or(defaults.atol), rtol.unwrap_or(defaults.rtol))?)
}
