//! simplex_optimizer — argmin-powered, box-constrained Nelder–Mead.
//!
//! Purpose
//! -------
//! Provide a derivative-free minimizer for small, possibly non-smooth cost
//! surfaces. Callers implement a single trait, [`Objective`], and invoke
//! [`minimize`] with an initial guess, a [`Bounds`] box and
//! [`SimplexOptions`].
//!
//! Key behaviors
//! -------------
//! - Convert user objectives into Argmin cost functions via
//!   [`adapter::ArgMinAdapter`], rejecting non-finite costs.
//! - Run the bounded simplex search in [`nelder_mead::BoundedNelderMead`],
//!   which clips every trial point into the box.
//! - Stop when both the vertex spread (`xtol`) and the cost spread (`ftol`)
//!   are within tolerance, or when the iteration or evaluation budget is
//!   spent. Budget exhaustion is reported in [`OptimOutcome`], not raised.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Objective::value`] treats invalid inputs as recoverable
//!   [`OptError`](crate::optimization::errors::OptError) values, never panics.
//! - The optimizer **minimizes** `c(θ)` directly; there is no sign flip.
//! - Budgets default to `200 × dim` iterations and evaluations.
//!
//! Conventions
//! -----------
//! - Parameters are [`Theta`] (`Array1<f64>`); costs are [`Cost`] (`f64`).
//! - Errors bubble up as `OptResult<T>`; this module and its children never
//!   intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - The fitting layer implements [`Objective`] for the moment-matching
//!   loss and calls [`minimize`] with a lower-bounded box.
//! - Internal code uses [`builders`] to construct the solver and delegates
//!   execution to [`run::run_nelder_mead`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover bounds handling, initial simplex
//!   construction, the convergence test, budget exhaustion and error
//!   propagation on toy objectives.
//! - Integration tests exercise [`minimize`] through the moment-matching fit.
pub mod adapter;
pub mod api;
pub mod bounds;
pub mod builders;
pub mod nelder_mead;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::bounds::Bounds;
pub use self::traits::{Objective, OptimOutcome, SimplexOptions, Tolerances};
pub use self::types::{Cost, FnEvalMap, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sqrt_transform_fitter::optimization::simplex_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::bounds::Bounds;
    pub use super::traits::{Objective, OptimOutcome, SimplexOptions, Tolerances};
    pub use super::types::{Cost, Theta};
}
