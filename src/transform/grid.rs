//! transform::grid — deterministic probability grid over the truncated mass.
//!
//! Purpose
//! -------
//! Replace Monte Carlo sampling with a fixed, evenly spaced grid of
//! cumulative probabilities. Pushing the grid through a quantile function
//! gives a quadrature-style "sample" whose moments are exactly reproducible,
//! which keeps the optimizer's cost surface fixed between evaluations.
//!
//! Key behaviors
//! -------------
//! - [`GridOptions`] holds the two resolution knobs (`init_step`,
//!   `step_size`) and validates them on construction.
//! - [`grid_start`] places the first probability a fraction `init_step` of
//!   the way into the truncated mass `[p_lower, p_upper]`.
//! - [`sample_grid`] steps from that start towards 1.0, exclusive, with
//!   `arange` semantics (`start + i · step_size`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every returned probability lies strictly inside `(0, 1)` whenever the
//!   start does, so the normal quantile of each point is finite.
//! - The grid length is `ceil((1 − start) / step_size)` up to the removal of
//!   a final point that rounds onto 1.0.
//!
//! Conventions
//! -----------
//! - Defaults mirror the estimator's reference resolution:
//!   [`DEFAULT_INIT_STEP`] = 5e-5 and [`DEFAULT_STEP_SIZE`] = 1e-4. With a
//!   full unit of mass this is the midpoint rule on 10 000 cells.
use ndarray::Array1;

use crate::transform::errors::{TransformError, TransformResult};

/// Fraction of the truncated mass skipped before the first grid point.
pub const DEFAULT_INIT_STEP: f64 = 5e-5;

/// Absolute probability increment between consecutive grid points.
pub const DEFAULT_STEP_SIZE: f64 = 1e-4;

/// Smallest accepted `step_size`; caps the grid at 10⁷ points.
pub const MIN_STEP_SIZE: f64 = 1e-7;

/// Resolution of the probability grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    pub init_step: f64,
    pub step_size: f64,
}

impl GridOptions {
    /// Construct validated grid options.
    ///
    /// # Errors
    /// - [`TransformError::InvalidInitStep`] unless `0 < init_step < 1` and finite.
    /// - [`TransformError::InvalidStepSize`] unless `MIN_STEP_SIZE <= step_size < 1`
    ///   and finite.
    pub fn new(init_step: f64, step_size: f64) -> TransformResult<Self> {
        if !init_step.is_finite() {
            return Err(TransformError::InvalidInitStep {
                value: init_step,
                reason: "Initial step must be finite.",
            });
        }
        if init_step <= 0.0 || init_step >= 1.0 {
            return Err(TransformError::InvalidInitStep {
                value: init_step,
                reason: "Initial step must lie strictly between 0 and 1.",
            });
        }
        if !step_size.is_finite() {
            return Err(TransformError::InvalidStepSize {
                value: step_size,
                reason: "Step size must be finite.",
            });
        }
        if step_size <= 0.0 || step_size >= 1.0 {
            return Err(TransformError::InvalidStepSize {
                value: step_size,
                reason: "Step size must lie strictly between 0 and 1.",
            });
        }
        if step_size < MIN_STEP_SIZE {
            return Err(TransformError::InvalidStepSize {
                value: step_size,
                reason: "Step size is below the minimum of 1e-7.",
            });
        }
        Ok(Self { init_step, step_size })
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { init_step: DEFAULT_INIT_STEP, step_size: DEFAULT_STEP_SIZE }
    }
}

/// First cumulative probability of the grid.
pub fn grid_start(p_lower: f64, p_upper: f64, opts: &GridOptions) -> f64 {
    p_lower + opts.init_step * (p_upper - p_lower)
}

/// Build the probability grid `start, start + step, …` strictly below 1.0.
///
/// # Errors
/// Returns [`TransformError::EmptyGrid`] when no point lies in
/// `(0, 1)`, e.g. because `start >= 1`.
pub fn sample_grid(start: f64, opts: &GridOptions) -> TransformResult<Array1<f64>> {
    let raw = Array1::range(start, 1.0, opts.step_size);
    let grid: Array1<f64> = raw.iter().copied().filter(|&p| p > 0.0 && p < 1.0).collect();
    if grid.is_empty() {
        return Err(TransformError::EmptyGrid { start, step_size: opts.step_size });
    }
    Ok(grid)
}
