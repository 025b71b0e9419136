//! utils — Python-side input extraction for the PyO3 bindings.
//!
//! Every helper accepts a numpy array, a pandas object exposing
//! `to_numpy`, or a plain (nested) Python sequence of floats, and returns
//! a read-only numpy view that the bindings pass to the Rust API as
//! `ArrayView` / `&[f64]`.
#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArray2,       // Vec<Vec<_>> → PyArray2
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2, PyReadonlyArrayDyn,
};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict, PyDictMethods},
};

#[cfg(feature = "python-bindings")]
use crate::{
    outliers::Tail,
    statistical_tests::{
        Alternative,
        validation::{as_matrix, as_vector},
    },
};

/// Extract a contiguous 1-D `float64` array from a numpy array, pandas
/// Series or sequence of floats.
///
/// A float64 ndarray of another rank fails with the `RankMismatch` message
/// naming `name`.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &'static str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = pandas_to_numpy(py, raw_data) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    if let Ok(arr_dyn) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        as_vector(name, arr_dyn.as_array())?;
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract a 2-D `float64` matrix (rows = observations) from a numpy array,
/// pandas DataFrame or sequence of equal-length float sequences.
///
/// A float64 ndarray of another rank fails with the `RankMismatch` message
/// naming `name`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &'static str,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = pandas_to_numpy(py, raw_data) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    if let Ok(arr_dyn) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        as_matrix(name, arr_dyn.as_array())?;
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    let matrix = PyArray2::from_vec2(py, &rows)
        .map_err(|_| PyValueError::new_err("all rows must have the same length"))?;
    Ok(matrix.readonly())
}

/// Call pandas' `to_numpy(copy=False)`. The first positional parameter of
/// `to_numpy` is `dtype`, so `copy` is passed by keyword.
#[cfg(feature = "python-bindings")]
fn pandas_to_numpy<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let kwargs = PyDict::new(py);
    kwargs.set_item("copy", false)?;
    raw_data.call_method("to_numpy", (), Some(&kwargs))
}

/// Borrow a contiguous slice from an extracted 1-D array.
#[cfg(feature = "python-bindings")]
pub fn as_contiguous<'a>(arr: &'a PyReadonlyArray1<'_, f64>, name: &str) -> PyResult<&'a [f64]> {
    arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })
}

/// Parse an alternative-hypothesis selector, mapping failures to `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_alternative(alternative: &str) -> PyResult<Alternative> {
    Ok(alternative.parse::<Alternative>()?)
}

/// Parse a `"min"` / `"max"` tail selector, mapping failures to `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_tail(kind: &str) -> PyResult<Tail> {
    Ok(kind.parse::<Tail>()?)
}
