//! rust_stattests — classical hypothesis tests and outlier heuristics with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the tests to Python via the `_rust_stattests` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes, functions and submodules used by the
//! `rust_stattests` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`linalg`, `statistical_tests`,
//!   `outliers`) as the public crate surface.
//! - Define `#[pyclass]` result wrappers, `#[pyfunction]` heuristics and the
//!   `#[pymodule]` initializer for `_rust_stattests`.
//! - Create and register the Python submodules `statistical_tests` and
//!   `outliers` under `rust_stattests` so that dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion and error mapping.
//! - Every crate error surfaces in Python as `ValueError` carrying the
//!   `Display` message of the Rust error.
//!
//! Conventions
//! -----------
//! - Alternative selectors are the strings `"two-sided"`, `"less"` and
//!   `"greater"`; tail selectors are `"min"` and `"max"`.
//! - Matrices are rows = observations, columns = variables.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the integration tests under `tests/`.

pub mod linalg;
pub mod outliers;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    outliers::{HuberOptions, MahalanobisScan, ScanOptions},
    statistical_tests::{CorrelationOutcome, HotellingOutcome, MahalanobisOutcome},
    utils::{
        as_contiguous, extract_alternative, extract_f64_array, extract_f64_matrix, extract_tail,
    },
};

/// CorrelationTest — Python-facing result of a correlation significance test.
///
/// Purpose
/// -------
/// Run one of the three correlation significance tests from Python and keep
/// its [`CorrelationOutcome`] for inspection.
///
/// Key behaviors
/// -------------
/// - Factory-style constructors `matthews`, `pearson_spearman` and
///   `kendall`, each taking `(corr_coef, n_samples, alternative="two-sided")`.
/// - Scalar getters `statistic` and `pvalue`.
///
/// Notes
/// -----
/// - An invalid alternative raises `ValueError` before any computation.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stattests.statistical_tests", frozen)]
pub struct CorrelationTest {
    inner: CorrelationOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CorrelationTest {
    /// Matthews (phi) test: χ² = n·r² against χ²(1).
    #[staticmethod]
    #[pyo3(signature = (corr_coef, n_samples, alternative = "two-sided"))]
    pub fn matthews(corr_coef: f64, n_samples: usize, alternative: &str) -> PyResult<Self> {
        let alt = extract_alternative(alternative)?;
        let inner = statistical_tests::matthews_significance_test(corr_coef, n_samples, alt);
        Ok(CorrelationTest { inner })
    }

    /// Pearson / Spearman test: t = r·√((n − 2)/(1 − r²)) against t(n − 2).
    #[staticmethod]
    #[pyo3(signature = (corr_coef, n_samples, alternative = "two-sided"))]
    pub fn pearson_spearman(corr_coef: f64, n_samples: usize, alternative: &str) -> PyResult<Self> {
        let alt = extract_alternative(alternative)?;
        let inner =
            statistical_tests::pearson_spearman_significance_test(corr_coef, n_samples, alt);
        Ok(CorrelationTest { inner })
    }

    /// Kendall test: z = τ·√(9n(n − 1)/(4n + 10)) against N(0, 1).
    #[staticmethod]
    #[pyo3(signature = (corr_coef, n_samples, alternative = "two-sided"))]
    pub fn kendall(corr_coef: f64, n_samples: usize, alternative: &str) -> PyResult<Self> {
        let alt = extract_alternative(alternative)?;
        let inner = statistical_tests::kendall_significance_test(corr_coef, n_samples, alt);
        Ok(CorrelationTest { inner })
    }

    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }
}

/// HotellingT2 — Python-facing one- / two-sample Hotelling T² result.
///
/// Constructed via `HotellingT2.one_sample(X, mu)` or
/// `HotellingT2.two_sample(X, Y)`; inputs may be numpy arrays, pandas
/// objects or nested sequences.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stattests.statistical_tests", frozen)]
pub struct HotellingT2 {
    inner: HotellingOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HotellingT2 {
    #[staticmethod]
    pub fn one_sample<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, mu: &Bound<'py, PyAny>,
    ) -> PyResult<Self> {
        let x = extract_f64_matrix(py, x, "X")?;
        let mu = extract_f64_array(py, mu, "mu")?;
        let inner = statistical_tests::hotelling_t2_1samp_test(x.as_array(), mu.as_array())?;
        Ok(HotellingT2 { inner })
    }

    #[staticmethod]
    pub fn two_sample<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    ) -> PyResult<Self> {
        let x = extract_f64_matrix(py, x, "X")?;
        let y = extract_f64_matrix(py, y, "Y")?;
        let inner = statistical_tests::hotelling_t2_2samp_test(x.as_array(), y.as_array())?;
        Ok(HotellingT2 { inner })
    }

    #[getter]
    pub fn t2_statistic(&self) -> f64 {
        self.inner.t2_statistic()
    }

    #[getter]
    pub fn f_statistic(&self) -> f64 {
        self.inner.f_statistic()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// `(df_num, df_den)` of the F reference distribution.
    #[getter]
    pub fn df(&self) -> (f64, f64) {
        (self.inner.df_num(), self.inner.df_den())
    }
}

/// MahalanobisTest — Python-facing Mahalanobis-distance test result.
///
/// Constructed via `MahalanobisTest(u, v, VI, n_u, n_v)`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stattests.statistical_tests", frozen)]
pub struct MahalanobisTest {
    inner: MahalanobisOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MahalanobisTest {
    #[new]
    #[pyo3(text_signature = "(u, v, VI, n_u, n_v)")]
    pub fn new<'py>(
        py: Python<'py>, u: &Bound<'py, PyAny>, v: &Bound<'py, PyAny>, vi: &Bound<'py, PyAny>,
        n_u: usize, n_v: usize,
    ) -> PyResult<Self> {
        let u = extract_f64_array(py, u, "u")?;
        let v = extract_f64_array(py, v, "v")?;
        let vi = extract_f64_matrix(py, vi, "VI")?;
        let inner =
            statistical_tests::mahalanobis_test(u.as_array(), v.as_array(), vi.as_array(), n_u, n_v)?;
        Ok(MahalanobisTest { inner })
    }

    #[getter]
    pub fn distance(&self) -> f64 {
        self.inner.distance()
    }

    #[getter]
    pub fn t2_statistic(&self) -> f64 {
        self.inner.t2_statistic()
    }

    #[getter]
    pub fn f_statistic(&self) -> f64 {
        self.inner.f_statistic()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }
}

/// MahalanobisOutlierScan — Python-facing per-row outlier scan.
///
/// Purpose
/// -------
/// Run [`outliers::mahalanobis_outlier_test`] on a Python matrix and expose
/// the four per-row result vectors as numpy arrays.
///
/// Parameters
/// ----------
/// Constructed via `MahalanobisOutlierScan(X, parallel=False, verbose=False,
/// progress_every=1000)`; the keyword arguments map onto [`ScanOptions`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stattests.outliers", frozen)]
pub struct MahalanobisOutlierScan {
    inner: MahalanobisScan,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MahalanobisOutlierScan {
    #[new]
    #[pyo3(
        text_signature = "(X, /, parallel=False, verbose=False, progress_every=1000)",
        signature = (x, parallel = false, verbose = false, progress_every = 1000)
    )]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, parallel: bool, verbose: bool,
        progress_every: usize,
    ) -> PyResult<Self> {
        let opts = ScanOptions::new(parallel, verbose, progress_every)?;
        let x = extract_f64_matrix(py, x, "X")?;
        let view = x.as_array();
        let inner = py.allow_threads(|| outliers::mahalanobis_outlier_test(view, &opts))?;
        Ok(MahalanobisOutlierScan { inner })
    }

    #[getter]
    pub fn distances<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.distances.clone().into_pyarray(py)
    }

    #[getter]
    pub fn t2_statistics<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.t2_statistics.clone().into_pyarray(py)
    }

    #[getter]
    pub fn f_statistics<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f_statistics.clone().into_pyarray(py)
    }

    #[getter]
    pub fn pvalues<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.p_values.clone().into_pyarray(py)
    }

    /// Row indices with p-value strictly below `alpha`.
    #[pyo3(signature = (alpha = 0.05))]
    pub fn outliers(&self, alpha: f64) -> Vec<usize> {
        self.inner.outliers(alpha)
    }
}

/// Smirnov–Grubbs extreme deviation |extreme − mean|.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, kind = "min"))]
fn smirnov_grubbs<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, kind: &str) -> PyResult<f64> {
    let tail = extract_tail(kind)?;
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::smirnov_grubbs(as_contiguous(&arr, "data")?, tail)?)
}

/// Grubbs ratio std(without extreme) / std(data).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, kind = "min"))]
fn grubbs<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, kind: &str) -> PyResult<f64> {
    let tail = extract_tail(kind)?;
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::grubbs(as_contiguous(&arr, "data")?, tail)?)
}

/// Trimmed standard-deviation ratio after dropping `k` values from one tail.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, k = 1, kind = "min"))]
fn trimmed_std_ratio<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, k: usize, kind: &str,
) -> PyResult<f64> {
    let tail = extract_tail(kind)?;
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::trimmed_std_ratio(as_contiguous(&arr, "data")?, k, tail)?)
}

/// Ratio of stds of sorted absolute deviations without the `k` largest.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, k = 1))]
fn abs_trimmed_std_ratio<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, k: usize) -> PyResult<f64> {
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::abs_trimmed_std_ratio(as_contiguous(&arr, "data")?, k)?)
}

/// Poincaré (trimmed) mean for contamination fraction `e`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn poincare<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, e: f64) -> PyResult<f64> {
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::poincare(as_contiguous(&arr, "data")?, e)?)
}

/// Winsorized mean for contamination fraction `e`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn winsor<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, e: f64) -> PyResult<f64> {
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::winsor(as_contiguous(&arr, "data")?, e)?)
}

/// Huber M-estimate of location for contamination fraction `e`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (data, e, max_iter = 100, tol = 1e-10))]
fn huber<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, e: f64, max_iter: usize, tol: f64,
) -> PyResult<f64> {
    let opts = HuberOptions::new(max_iter, tol)?;
    let arr = extract_f64_array(py, data, "data")?;
    Ok(outliers::huber(as_contiguous(&arr, "data")?, e, &opts)?)
}

/// _rust_stattests — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `statistical_tests` and `outliers` submodules and attach
///   them to `_rust_stattests`.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_stattests<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    let outliers_mod = PyModule::new(_py, "outliers")?;
    statistical_tests_module(_py, m, &statistical_tests_mod)?;
    outliers_module(_py, m, &outliers_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_stattests.statistical_tests", statistical_tests_mod)?;
    modules.set_item("rust_stattests.outliers", outliers_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests_module<'py>(
    _py: Python, rust_stattests: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CorrelationTest>()?;
    m.add_class::<HotellingT2>()?;
    m.add_class::<MahalanobisTest>()?;
    rust_stattests.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn outliers_module<'py>(
    _py: Python, rust_stattests: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<MahalanobisOutlierScan>()?;
    m.add_function(wrap_pyfunction!(smirnov_grubbs, m)?)?;
    m.add_function(wrap_pyfunction!(grubbs, m)?)?;
    m.add_function(wrap_pyfunction!(trimmed_std_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(abs_trimmed_std_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(poincare, m)?)?;
    m.add_function(wrap_pyfunction!(winsor, m)?)?;
    m.add_function(wrap_pyfunction!(huber, m)?)?;
    rust_stattests.add_submodule(m)?;
    Ok(())
}
