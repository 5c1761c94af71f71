//! simplex_optimizer::types — shared numeric aliases and simplex constants.
//!
//! Purpose
//! -------
//! Centralize the numeric types and fixed coefficients used by the bounded
//! Nelder–Mead optimizer, so the rest of the optimization code stays
//! agnostic to `ndarray` and Argmin generics.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors and scalar costs
//!   (`Theta`, `Cost`) plus the Argmin state type (`SimplexState`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Fix the standard (non-adaptive) Nelder–Mead coefficients and the
//!   initial-simplex perturbations.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray::Array1<f64>`.
//! - The simplex is derivative-free, so the gradient, Jacobian, Hessian and
//!   residual slots of the Argmin state are unit types.
//!
//! Testing notes
//! -------------
//! - This module only defines aliases and constants; they are exercised by
//!   the solver tests in [`super::nelder_mead`].
use argmin::core::IterState;
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for minimization.
pub type Theta = Array1<f64>;

/// Scalar objective value used by the optimizer.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Argmin iteration state for a derivative-free solver over [`Theta`].
pub type SimplexState = IterState<Theta, (), (), (), (), Cost>;

/// Reflection coefficient ρ.
pub const REFLECTION: f64 = 1.0;

/// Expansion coefficient χ.
pub const EXPANSION: f64 = 2.0;

/// Contraction coefficient ψ.
pub const CONTRACTION: f64 = 0.5;

/// Shrink coefficient σ.
pub const SHRINK: f64 = 0.5;

/// Relative perturbation of a non-zero coordinate in the initial simplex.
pub const NONZERO_DELTA: f64 = 0.05;

/// Absolute value used for a zero coordinate in the initial simplex.
pub const ZERO_DELTA: f64 = 0.00025;

/// Per-dimension default budget for iterations and function evaluations.
pub const DEFAULT_BUDGET_PER_DIM: usize = 200;
