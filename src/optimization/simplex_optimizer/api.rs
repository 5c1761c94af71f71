//! High-level entry point for minimizing a user-provided `Objective` inside a box.
//!
//! This validates the inputs, builds a [`BoundedNelderMead`] solver, wraps the
//! objective in an `ArgMinAdapter` and delegates the run to `run_nelder_mead`.
//!
//! [`BoundedNelderMead`]: crate::optimization::simplex_optimizer::nelder_mead::BoundedNelderMead
use crate::optimization::{
    errors::OptResult,
    simplex_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        bounds::Bounds,
        builders::build_nelder_mead,
        run::run_nelder_mead,
        traits::{Objective, SimplexOptions},
        validation::validate_theta_input,
    },
};

/// Minimize `c(θ)` over `bounds` with the bounded Nelder–Mead simplex.
///
/// # Behavior
/// - Validates `theta0` (finite entries, same dimension as `bounds`).
/// - Calls `f.check(theta0, data)` once.
/// - Builds the solver from `opts.tols` and runs it from `theta0`, which is
///   clipped into `bounds` before the initial simplex is formed.
///
/// # Parameters
/// - `f`: Your objective implementing [`Objective`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Problem data passed through to `value`/`check`.
/// - `bounds`: Per-coordinate box; use [`Bounds::unbounded`] for none.
/// - `opts`: Tolerances, budgets and verbosity.
///
/// # Errors
/// - `InvalidThetaInput` / `BoundsDimMismatch` for a bad initial guess.
/// - Any error from `f.check`.
/// - Builder errors for invalid tolerances.
/// - Errors raised by `f.value` during the run, unchanged.
///
/// # Returns
/// An [`OptimOutcome`]. Running out of iterations or evaluations is **not**
/// an error: the best vertex is returned with `converged == false` and a
/// status message naming the exhausted budget.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use sqrt_transform_fitter::optimization::errors::OptResult;
/// use sqrt_transform_fitter::optimization::simplex_optimizer::{
///     minimize, Bounds, Objective, SimplexOptions, Theta,
/// };
///
/// struct Bowl;
/// impl Objective for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok((theta[0] - 1.0).powi(2) + (theta[1] - 2.0).powi(2))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = minimize(&Bowl, array![0.5, 0.5], &(), &Bounds::unbounded(2), &SimplexOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), sqrt_transform_fitter::optimization::errors::OptError>(())
/// ```
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, bounds: &Bounds, opts: &SimplexOptions,
) -> OptResult<OptimOutcome> {
    validate_theta_input(&theta0)?;
    bounds.check_dim(&theta0)?;
    f.check(&theta0, data)?;
    let solver = build_nelder_mead(bounds, opts)?;
    let problem = ArgMinAdapter::new(f, data);
    run_nelder_mead(theta0, opts, problem, solver)
}
