//! Execution helper that runs the bounded simplex solver on an objective and
//! returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    simplex_optimizer::{
        Objective, OptimOutcome, SimplexOptions, Theta, adapter::ArgMinAdapter,
        nelder_mead::BoundedNelderMead,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, State};

/// Run [`BoundedNelderMead`] on an objective wrapped in an [`ArgMinAdapter`].
///
/// This wires up:
/// - the user objective via [`ArgMinAdapter`],
/// - the configured solver (see
///   [`build_nelder_mead`](crate::optimization::simplex_optimizer::builders::build_nelder_mead)),
/// - the initial parameter `theta0`,
/// - the iteration cap (`tols.max_iter`, or `200 × dim` when unset),
/// - an optional observer (behind the `obs_slog` feature),
///
/// then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Arguments
/// - `theta0`: Initial parameter vector. It is **consumed** and set on the
///   optimizer state via `state.param(theta0)`; the solver clips it into the
///   bounds before building the initial simplex.
/// - `opts`: Optimizer options (tolerances, budgets, verbosity).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user's objective and data.
/// - `solver`: A solver built for the same bounds.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs c(θ₀).
///
/// With `opts.verbose == true` a short convergence report (status, final
/// cost, iterations and evaluations) is printed to stderr after the run,
/// whatever the feature set.
///
/// # Errors
/// - Propagates any `argmin` runtime error, including errors raised by the
///   objective, via `From<argmin::core::Error>`.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`].
pub fn run_nelder_mead<'a, F>(
    theta0: Theta, opts: &SimplexOptions, problem: ArgMinAdapter<'a, F>, solver: BoundedNelderMead,
) -> OptResult<OptimOutcome>
where
    F: Objective,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem);
    }
    let max_iter = opts.tols.resolved_max_iter(theta0.len());
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0).max_iters(max_iter as u64));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = optimizer.run()?;
    let state = result.state();
    let iterations = state.get_iter();
    let function_counts = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();

    let simplex = result.solver().simplex().to_vec();
    let (best, best_cost) = match simplex.first() {
        Some((theta, cost)) => (Some(theta.clone()), *cost),
        None => (state.get_best_param().cloned(), state.get_best_cost()),
    };
    let outcome =
        OptimOutcome::new(best, best_cost, &termination, iterations, function_counts, simplex)?;
    if opts.verbose {
        report(&outcome);
    }
    Ok(outcome)
}

// ---- Helper Methods ----

fn report(outcome: &OptimOutcome) {
    eprintln!("{}", outcome.status);
    eprintln!("         Current function value: {:.6}", outcome.value);
    eprintln!("         Iterations: {}", outcome.iterations);
    eprintln!("         Function evaluations: {}", outcome.cost_evals());
}

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>)
where
    F: Objective,
{
    // theta0 may sit outside the bounds until the solver clips it.
    match problem.cost(theta0) {
        Ok(c0) => eprintln!("init: c(theta0) = {:.6}", c0),
        Err(err) => eprintln!("init: c(theta0) unavailable ({err})"),
    }
}
