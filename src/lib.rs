//! sqrt_transform_fitter — fit a normal so its squared, truncated image hits
//! target moments.
//!
//! Purpose
//! -------
//! Given a target mean, standard deviation and upper bound for a
//! non-negative quantity, find the mean and sd of an underlying normal such
//! that squaring its quantiles (the inverse of a square-root transform) and
//! truncating to `[0, upper]` reproduces the target moments as closely as
//! possible under an L1 loss. When the `python-bindings` feature is enabled,
//! this file also defines the `_sqrt_transform_fitter` extension module.
//!
//! Key behaviors
//! -------------
//! - [`transform`]: deterministic grid estimator of the transformed,
//!   truncated moments.
//! - [`optimization`]: argmin-backed, box-constrained Nelder–Mead and the
//!   crate-wide error surface.
//! - [`fitting`]: the moment-matching objective and the
//!   [`fit`] / [`fit_distribution`] entry points.
//! - Behind `python-bindings`: `fit_distribution`, `estimate_moments` and
//!   the `FitOutcome` class.
//!
//! Invariants & assumptions
//! ------------------------
//! - No randomness, no global state and no I/O in the core; identical
//!   inputs give bit-identical results.
//! - Numerical degeneracy is always an error, never a silent `NaN`.
//! - Non-convergence is a soft outcome reported in the fit diagnostics.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   (`TransformError`, `OptError`) and converted to `ValueError` at the
//!   PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code calls [`fit_distribution`] or [`fit`] and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_sqrt_transform_fitter` and may
//!   wrap it in a thin pure-Python facade.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_fit_pipeline.rs`.

pub mod fitting;
pub mod optimization;
pub mod transform;
pub mod utils;

pub use crate::fitting::{FitOptions, FitResult, MIN_PARAM_VALUE, fit, fit_distribution};
pub use crate::transform::{DistributionParams, TargetSpec, estimate, estimate_moments};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::utils::{extract_fit_options, extract_grid_options};

/// FitOutcome — Python-facing result of a moment-matching fit.
///
/// Purpose
/// -------
/// Give Python callers read-only access to a [`FitResult`]: the fitted
/// parameters, the objective at the optimum and the optimizer diagnostics.
///
/// Fields
/// ------
/// - `inner`: [`FitResult`]
///   Rust-side fit result backing every getter.
///
/// Notes
/// -----
/// - Instances are created by `fit_distribution`; they are not constructed
///   directly from Python.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "sqrt_transform_fitter", frozen)]
pub struct FitOutcome {
    pub inner: FitResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl FitOutcome {
    #[getter]
    pub fn mean(&self) -> f64 {
        self.inner.mean
    }

    #[getter]
    pub fn sd(&self) -> f64 {
        self.inner.sd
    }

    #[getter]
    pub fn objective(&self) -> f64 {
        self.inner.objective
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.diagnostics.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.diagnostics.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.diagnostics.iterations
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.diagnostics.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[getter]
    pub fn final_simplex(&self) -> Vec<Vec<f64>> {
        self.inner.diagnostics.final_simplex.iter().map(|v| v.to_vec()).collect()
    }

    #[getter]
    pub fn final_simplex_costs(&self) -> Vec<f64> {
        self.inner.diagnostics.final_simplex_costs.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "FitOutcome(mean={:.6}, sd={:.6}, objective={:.6}, converged={})",
            self.inner.mean, self.inner.sd, self.inner.objective, self.inner.diagnostics.converged
        )
    }
}

/// Fit `(mean, sd)` of the underlying normal to the target moments.
///
/// Python signature:
/// `fit_distribution(target_mean, target_sd, upper, bounds_residue=1e-5,
/// xtol=1e-4, ftol=1e-4, max_iter=None, max_fev=None, display=False,
/// init_step=5e-5, step_size=1e-4) -> FitOutcome`.
///
/// Raises `ValueError` for invalid options and for numerical degeneracy
/// (e.g. `upper <= 0`).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "fit_distribution",
    signature = (
        target_mean, target_sd, upper, bounds_residue = None, xtol = None, ftol = None,
        max_iter = None, max_fev = None, display = None, init_step = None, step_size = None
    )
)]
#[allow(clippy::too_many_arguments)]
fn py_fit_distribution(
    target_mean: f64, target_sd: f64, upper: f64, bounds_residue: Option<f64>,
    xtol: Option<f64>, ftol: Option<f64>, max_iter: Option<usize>, max_fev: Option<usize>,
    display: Option<bool>, init_step: Option<f64>, step_size: Option<f64>,
) -> PyResult<FitOutcome> {
    let opts = extract_fit_options(
        bounds_residue,
        xtol,
        ftol,
        max_iter,
        max_fev,
        display,
        init_step,
        step_size,
    )?;
    let result = fit(&TargetSpec::new(target_mean, target_sd, upper), &opts)?;
    Ok(FitOutcome { inner: result })
}

/// Estimated `(mean, sd)` of the squared normal truncated to `[0, upper]`.
///
/// Python signature:
/// `estimate_moments(mean, sd, upper, init_step=5e-5, step_size=1e-4)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "estimate_moments",
    signature = (mean, sd, upper, init_step = None, step_size = None)
)]
fn py_estimate_moments(
    mean: f64, sd: f64, upper: f64, init_step: Option<f64>, step_size: Option<f64>,
) -> PyResult<(f64, f64)> {
    let grid = extract_grid_options(init_step, step_size)?;
    let est = estimate(&DistributionParams::new(mean, sd), upper, &grid)?;
    Ok((est.mean, est.sd))
}

/// _sqrt_transform_fitter — PyO3 module initializer for the Python extension.
///
/// Registers the `FitOutcome` class and the `fit_distribution` /
/// `estimate_moments` functions. Invoked by Python on import; not called
/// directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _sqrt_transform_fitter<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<FitOutcome>()?;
    m.add_function(wrap_pyfunction!(py_fit_distribution, m)?)?;
    m.add_function(wrap_pyfunction!(py_estimate_moments, m)?)?;
    Ok(())
}
