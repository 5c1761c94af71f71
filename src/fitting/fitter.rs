//! fitting::fitter — fit normal parameters to target transformed moments.
//!
//! Purpose
//! -------
//! Find `(mean, sd)` of an underlying normal such that, after squaring
//! (the inverse of the square-root transform) and truncation to
//! `[0, upper]`, the estimated mean and sd match a [`TargetSpec`] under the
//! L1 loss of [`MomentObjective`].
//!
//! Key behaviors
//! -------------
//! - Start from `(sqrt(target.mean), sqrt(target.sd))`.
//! - Minimize over the box `[bounds_residue, +∞)²` with the bounded
//!   Nelder–Mead search, so neither parameter can reach zero.
//! - Return the best vertex, its loss and the full optimizer diagnostics.
//!
//! Invariants & assumptions
//! ------------------------
//! - A returned [`FitResult`] always has `mean >= bounds_residue > 0` and
//!   `sd >= bounds_residue > 0`.
//! - Running out of budget is **not** an error: check
//!   `diagnostics.converged`.
//! - Numerical degeneracy anywhere in the estimator aborts the fit with the
//!   corresponding [`OptError`].
//!
//! Downstream usage
//! ----------------
//! - [`fit_distribution`] is the one-call entry point with default options.
//! - [`fit`] takes explicit [`FitOptions`] (tolerances, budgets, grid,
//!   positivity offset).
use crate::{
    fitting::{
        objective::{MomentObjective, N_PARAMS, params_from_theta, to_theta},
        options::{FitOptions, verify_bounds_residue},
    },
    optimization::{
        errors::OptResult,
        simplex_optimizer::{Bounds, OptimOutcome, Theta, minimize},
    },
    transform::TargetSpec,
};

/// Fitted normal parameters and how they were obtained.
///
/// - `mean`, `sd`: best parameters found (both strictly positive).
/// - `objective`: L1 moment error at `(mean, sd)`.
/// - `diagnostics`: optimizer outcome (convergence flag, status, counts,
///   final simplex).
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub mean: f64,
    pub sd: f64,
    pub objective: f64,
    pub diagnostics: OptimOutcome,
}

/// Fit `(mean, sd)` so the transformed, truncated moments match `target`.
///
/// # Errors
/// - [`OptError::InvalidBoundsResidue`](crate::optimization::errors::OptError::InvalidBoundsResidue)
///   for a non-positive offset in hand-built options.
/// - [`OptError::InvalidThetaInput`](crate::optimization::errors::OptError::InvalidThetaInput)
///   if the starting point is not finite (negative target moments).
/// - Any estimator failure hit during the search, e.g.
///   `DegenerateTruncation` when `target.upper <= 0`.
pub fn fit(target: &TargetSpec, opts: &FitOptions) -> OptResult<FitResult> {
    verify_bounds_residue(opts.bounds_residue)?;
    let theta0 = to_theta(&target.initial_guess());
    let bounds = Bounds::lower(Theta::from_elem(N_PARAMS, opts.bounds_residue))?;
    let f = MomentObjective::new(opts.grid);

    let diagnostics = minimize(&f, theta0, target, &bounds, &opts.simplex)?;
    let params = params_from_theta(&diagnostics.theta_hat)?;
    Ok(FitResult { mean: params.mean, sd: params.sd, objective: diagnostics.value, diagnostics })
}

/// [`fit`] with default [`FitOptions`].
pub fn fit_distribution(target_mean: f64, target_sd: f64, upper: f64) -> OptResult<FitResult> {
    fit(&TargetSpec::new(target_mean, target_sd, upper), &FitOptions::default())
}
