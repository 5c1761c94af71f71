//! fitting — moment-matching fit of a truncated, square-root-transformed normal.
//!
//! Purpose
//! -------
//! Tie the estimator in [`crate::transform`] to the simplex optimizer in
//! [`crate::optimization`]: given target moments and an upper truncation
//! bound, find the normal parameters whose transformed moments match.
//!
//! Key behaviors
//! -------------
//! - [`objective`]: the L1 moment loss, as a plain function and as an
//!   optimizer [`Objective`](crate::optimization::simplex_optimizer::Objective).
//! - [`options`]: [`FitOptions`] and the [`MIN_PARAM_VALUE`] lower bound.
//! - [`fitter`]: [`fit`] / [`fit_distribution`] and the [`FitResult`] record.
//!
//! Conventions
//! -----------
//! - Errors are [`OptError`](crate::optimization::errors::OptError); estimator
//!   failures are converted on the way up.
//! - Non-convergence is reported in `FitResult::diagnostics`, never as an
//!   error.

pub mod fitter;
pub mod objective;
pub mod options;

pub use self::fitter::{FitResult, fit, fit_distribution};
pub use self::objective::{MomentObjective, objective};
pub use self::options::{FitOptions, MIN_PARAM_VALUE};
