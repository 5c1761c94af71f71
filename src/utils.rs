//! Python-argument helpers shared by the PyO3 bindings in `lib.rs`.
//!
//! Each helper turns loose keyword arguments into the validated Rust option
//! structs, mapping construction errors into `ValueError`.
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    fitting::FitOptions,
    optimization::simplex_optimizer::{SimplexOptions, Tolerances},
    transform::GridOptions,
};

#[cfg(feature = "python-bindings")]
pub fn extract_grid_options(init_step: Option<f64>, step_size: Option<f64>) -> PyResult<GridOptions> {
    let defaults = GridOptions::default();
    let grid = GridOptions::new(
        init_step.unwrap_or(defaults.init_step),
        step_size.unwrap_or(defaults.step_size),
    )?;
    Ok(grid)
}

#[cfg(feature = "python-bindings")]
pub fn extract_fit_options(
    bounds_residue: Option<f64>, xtol: Option<f64>, ftol: Option<f64>, max_iter: Option<usize>,
    max_fev: Option<usize>, display: Option<bool>, init_step: Option<f64>,
    step_size: Option<f64>,
) -> PyResult<FitOptions> {
    let defaults = FitOptions::default();

    // Tolerances::new -> OptResult<Tolerances> -> PyErr
    let tols = Tolerances::new(
        xtol.unwrap_or(defaults.simplex.tols.xtol),
        ftol.unwrap_or(defaults.simplex.tols.ftol),
        max_iter,
        max_fev,
    )?;
    let simplex = SimplexOptions::new(tols, display.unwrap_or(false));
    let grid = extract_grid_options(init_step, step_size)?;

    // FitOptions::new -> OptResult<FitOptions> -> PyErr
    let opts = FitOptions::new(bounds_residue.unwrap_or(defaults.bounds_residue), simplex, grid)?;
    Ok(opts)
}
