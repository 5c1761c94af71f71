//! optimization — bounded simplex minimizer and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer used by the fitting driver: an
//! Argmin-backed, box-constrained Nelder–Mead minimizer and a single
//! error/result surface. Callers implement an objective, choose bounds and
//! tolerances, and obtain the best parameters plus diagnostics without
//! touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing** a cost `c(θ)` inside a box
//!   (`simplex_optimizer`), including tolerances and budgets.
//! - Normalize configuration issues, estimator failures and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Objectives treat domain violations (e.g. a degenerate truncation) as
//!   recoverable errors surfaced through this layer unchanged.
//!
//! Conventions
//! -----------
//! - Parameters are `ndarray`-based (`Theta`); any mapping to structured
//!   model parameters happens in the caller.
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw Argmin errors.
//! - Nothing here logs unless the caller asks for verbose output.
//!
//! Downstream usage
//! ----------------
//! - The fitting layer implements `Objective` for its loss and calls
//!   `minimize` with a lower-bounded box.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover solver wiring, bounds, tolerance
//!   handling and error conversions.
//! - Integration tests exercise the optimizer end to end through the fit.
pub mod errors;
pub mod simplex_optimizer;

// ---- Convenience prelude -------------------------------------------------
//
// `use sqrt_transform_fitter::optimization::prelude::*;` pulls in the error
// types and the simplex optimizer's main surface.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::simplex_optimizer::prelude::*;
}
