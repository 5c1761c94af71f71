//! Validation helpers for simplex optimization.
//!
//! This module centralizes common consistency checks used across the
//! optimizer interface:
//!
//! - **Tolerance checks**: [`verify_xtol`], [`verify_ftol`] ensure numeric
//!   tolerances are finite and strictly positive.
//! - **Budget checks**: [`verify_max_iter`], [`verify_max_fev`] reject zero
//!   budgets when provided.
//! - **Initial guess**: [`validate_theta_input`] enforces finite entries.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks objective outputs for
//!   finiteness.
use crate::optimization::{
    errors::{OptError, OptResult},
    simplex_optimizer::types::Theta,
};

/// Validate the parameter-space convergence tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidXTol`] if the value is non-finite or ≤ 0.0.
pub fn verify_xtol(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidXTol { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidXTol { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the objective-value convergence tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidFTol`] if the value is non-finite or ≤ 0.0.
pub fn verify_ftol(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidFTol { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidFTol { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate an optional iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] for `Some(0)`.
pub fn verify_max_iter(max_iter: Option<usize>) -> OptResult<()> {
    if let Some(max_iter) = max_iter {
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
    }
    Ok(())
}

/// Validate an optional function-evaluation cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxFev`] for `Some(0)`.
pub fn verify_max_fev(max_fev: Option<usize>) -> OptResult<()> {
    if let Some(max_fev) = max_fev {
        if max_fev == 0 {
            return Err(OptError::InvalidMaxFev {
                max_fev,
                reason: "Maximum function evaluations must be greater than zero.",
            });
        }
    }
    Ok(())
}

/// Validate an initial guess: every entry must be finite.
///
/// # Errors
/// [`OptError::InvalidThetaInput`] with the first offending index.
pub fn validate_theta_input(theta: &Theta) -> OptResult<()> {
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
