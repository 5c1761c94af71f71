//! fitting::objective — L1 moment-matching loss.
//!
//! Purpose
//! -------
//! Score a candidate `(mean, sd)` by how far the estimated moments of the
//! truncated, square-root-transformed distribution fall from the target:
//!
//! `c(mean, sd) = |target.mean − est.mean| + |target.sd − est.sd|`.
//!
//! Key behaviors
//! -------------
//! - [`objective`] evaluates the loss for plain value objects.
//! - [`MomentObjective`] exposes the same loss to the simplex optimizer as
//!   an [`Objective`] over `θ = [mean, sd]` with `Data = TargetSpec`.
//! - Estimator failures are never caught here; they surface as
//!   [`TransformError`] (free function) or the equivalent [`OptError`]
//!   variant (optimizer path) and abort the fit.
//!
//! Invariants & assumptions
//! ------------------------
//! - `θ` always has exactly two finite entries, in the order `[mean, sd]`.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        simplex_optimizer::{Cost, Objective, Theta},
    },
    transform::{DistributionParams, GridOptions, TargetSpec, TransformResult, estimate},
};
use ndarray::array;

/// Number of optimizer coordinates: `[mean, sd]`.
pub const N_PARAMS: usize = 2;

/// `|target.mean − est.mean| + |target.sd − est.sd|` for `params`.
///
/// # Errors
/// Any [`TransformError`](crate::transform::TransformError) raised by the
/// estimator.
pub fn objective(
    params: &DistributionParams, target: &TargetSpec, grid: &GridOptions,
) -> TransformResult<f64> {
    let est = estimate(params, target.upper, grid)?;
    Ok((target.mean - est.mean).abs() + (target.sd - est.sd).abs())
}

/// Optimizer vector for `params`.
pub fn to_theta(params: &DistributionParams) -> Theta {
    array![params.mean, params.sd]
}

/// Candidate parameters from an optimizer vector.
///
/// # Errors
/// - [`OptError::ThetaLengthMismatch`] unless `theta.len() == 2`.
/// - [`OptError::InvalidThetaInput`] for a non-finite entry.
pub fn params_from_theta(theta: &Theta) -> OptResult<DistributionParams> {
    if theta.len() != N_PARAMS {
        return Err(OptError::ThetaLengthMismatch { expected: N_PARAMS, actual: theta.len() });
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaInput { index, value });
        }
    }
    Ok(DistributionParams::new(theta[0], theta[1]))
}

/// Moment-matching loss on a fixed estimator grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MomentObjective {
    pub grid: GridOptions,
}

impl MomentObjective {
    pub fn new(grid: GridOptions) -> Self {
        Self { grid }
    }
}

impl Objective for MomentObjective {
    type Data = TargetSpec;

    fn value(&self, theta: &Theta, target: &TargetSpec) -> OptResult<Cost> {
        let params = params_from_theta(theta)?;
        Ok(objective(&params, target, &self.grid)?)
    }

    fn check(&self, theta: &Theta, _target: &TargetSpec) -> OptResult<()> {
        params_from_theta(theta).map(|_| ())
    }
}
