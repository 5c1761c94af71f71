//! Public API surface for derivative-free minimization.
//!
//! - [`Objective`]: trait users implement for their cost surface.
//! - [`SimplexOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `minimize` API.
//!
//! Convention: the optimizer *minimizes* `c(θ)` directly. No gradient is ever
//! requested, so objectives with kinks (absolute values, clipping) are fine.
use crate::optimization::{
    errors::OptResult,
    simplex_optimizer::{
        Cost, FnEvalMap, Theta,
        types::DEFAULT_BUDGET_PER_DIM,
        validation::{
            validate_theta_hat, validate_value, verify_ftol, verify_max_fev, verify_max_iter,
            verify_xtol,
        },
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented objective interface.
///
/// - `type Data`: per-problem data carried into `value`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `c(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or numerical
///     failures; the error aborts the run and reaches the caller unchanged.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
pub trait Objective {
    type Data: 'static;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances`: convergence tolerances and budgets.
/// - `verbose: bool`: if `true`, prints a convergence report after the run;
///   with the `obs_slog` feature it also attaches an observer and prints the
///   initial cost.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplexOptions {
    pub tols: Tolerances,
    pub verbose: bool,
}

impl SimplexOptions {
    pub fn new(tols: Tolerances, verbose: bool) -> Self {
        Self { tols, verbose }
    }
}

/// Numerical tolerances and budgets used by the simplex search.
///
/// - `xtol`: absolute spread of the vertices around the best one.
/// - `ftol`: absolute spread of the vertex costs around the best one.
/// - `max_iter`: cap on iterations; `None` means `200 × dim`.
/// - `max_fev`: cap on objective evaluations; `None` means `200 × dim`.
///
/// Convergence requires **both** spreads to be within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub xtol: f64,
    pub ftol: f64,
    pub max_iter: Option<usize>,
    pub max_fev: Option<usize>,
}

/// Default parameter-space tolerance.
pub const DEFAULT_XTOL: f64 = 1e-4;

/// Default objective-value tolerance.
pub const DEFAULT_FTOL: f64 = 1e-4;

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`crate::optimization::errors::OptError::InvalidXTol`] /
    ///   [`crate::optimization::errors::OptError::InvalidFTol`] for non-finite or
    ///   non-positive tolerances.
    /// - `InvalidMaxIter` / `InvalidMaxFev` for a zero budget.
    pub fn new(
        xtol: f64, ftol: f64, max_iter: Option<usize>, max_fev: Option<usize>,
    ) -> OptResult<Self> {
        verify_xtol(xtol)?;
        verify_ftol(ftol)?;
        verify_max_iter(max_iter)?;
        verify_max_fev(max_fev)?;
        Ok(Self { xtol, ftol, max_iter, max_fev })
    }

    /// Iteration cap for a problem of dimension `dim`.
    pub fn resolved_max_iter(&self, dim: usize) -> usize {
        self.max_iter.unwrap_or(DEFAULT_BUDGET_PER_DIM * dim.max(1))
    }

    /// Evaluation cap for a problem of dimension `dim`.
    pub fn resolved_max_fev(&self, dim: usize) -> usize {
        self.max_fev.unwrap_or(DEFAULT_BUDGET_PER_DIM * dim.max(1))
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { xtol: DEFAULT_XTOL, ftol: DEFAULT_FTOL, max_iter: None, max_fev: None }
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: best vertex found.
/// - `value`: its cost `c(θ̂)`.
/// - `converged`: `true` only if the tolerance test ended the run; exhausting
///   a budget still returns the best vertex, with `converged == false`.
/// - `status`: human-readable termination message.
/// - `iterations`: number of simplex iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`
///   (e.g. `cost_count`).
/// - `final_simplex` / `final_simplex_costs`: vertices and costs at exit,
///   sorted from best to worst.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub final_simplex: Vec<Theta>,
    pub final_simplex_costs: Vec<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: &TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap, final_simplex: Vec<(Theta, f64)>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = describe_termination(termination);
        let (final_simplex, final_simplex_costs): (Vec<Theta>, Vec<f64>) =
            final_simplex.into_iter().unzip();
        Ok(Self {
            theta_hat,
            value,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            final_simplex,
            final_simplex_costs,
        })
    }

    /// Number of objective evaluations, or 0 if argmin reported none.
    pub fn cost_evals(&self) -> u64 {
        self.fn_evals.get("cost_count").copied().unwrap_or(0)
    }
}

fn describe_termination(termination: &TerminationStatus) -> (bool, String) {
    match termination {
        TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
        TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
            (true, "Optimization terminated successfully.".to_string())
        }
        TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
            (false, "Maximum number of iterations has been exceeded.".to_string())
        }
        TerminationStatus::Terminated(TerminationReason::SolverExit(msg)) => (false, msg.clone()),
        TerminationStatus::Terminated(reason) => (false, format!("{reason:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Default tolerances match the fitting defaults and resolve budgets
    // from the problem dimension.
    //
    // Given
    // -----
    // - `Tolerances::default()` and dim = 2.
    //
    // Expect
    // ------
    // - xtol = ftol = 1e-4; both budgets resolve to 400.
    fn default_tolerances_scale_budget_with_dimension() {
        // Arrange
        let tols = Tolerances::default();

        // Act & Assert
        assert_eq!(tols.xtol, 1e-4);
        assert_eq!(tols.ftol, 1e-4);
        assert_eq!(tols.resolved_max_iter(2), 400);
        assert_eq!(tols.resolved_max_fev(2), 400);
    }

    #[test]
    // Purpose
    // -------
    // `Tolerances::new` forwards validation failures.
    //
    // Given
    // -----
    // - xtol = 0 and, separately, max_fev = Some(0).
    //
    // Expect
    // ------
    // - `InvalidXTol` and `InvalidMaxFev`.
    fn tolerances_new_rejects_invalid_values() {
        // Act & Assert
        assert!(matches!(
            Tolerances::new(0.0, 1e-4, None, None),
            Err(OptError::InvalidXTol { .. })
        ));
        assert!(matches!(
            Tolerances::new(1e-4, 1e-4, None, Some(0)),
            Err(OptError::InvalidMaxFev { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Only a tolerance-driven stop counts as convergence; budget exhaustion
    // is a soft outcome.
    //
    // Given
    // -----
    // - SolverConverged, MaxItersReached and a SolverExit message.
    //
    // Expect
    // ------
    // - converged is true only for SolverConverged; the exit message is
    //   passed through verbatim.
    fn outcome_marks_only_solver_convergence_as_converged() {
        // Arrange
        let simplex = vec![(array![1.0], 0.5), (array![1.1], 0.6)];
        let converged = TerminationStatus::Terminated(TerminationReason::SolverConverged);
        let max_iters = TerminationStatus::Terminated(TerminationReason::MaxItersReached);
        let exit = TerminationStatus::Terminated(TerminationReason::SolverExit(
            "budget spent".to_string(),
        ));

        // Act
        let build = |status: &TerminationStatus| {
            OptimOutcome::new(
                Some(array![1.0]),
                0.5,
                status,
                3,
                FnEvalMap::new(),
                simplex.clone(),
            )
            .expect("valid outcome")
        };
        let a = build(&converged);
        let b = build(&max_iters);
        let c = build(&exit);

        // Assert
        assert!(a.converged);
        assert!(!b.converged);
        assert!(!c.converged);
        assert_eq!(c.status, "budget spent");
        assert_eq!(a.final_simplex_costs, vec![0.5, 0.6]);
    }

    #[test]
    // Purpose
    // -------
    // A non-finite best cost is rejected when building the outcome.
    //
    // Given
    // -----
    // - value = NaN.
    //
    // Expect
    // ------
    // - `OptError::NonFiniteCost`.
    fn outcome_rejects_non_finite_value() {
        // Arrange
        let status = TerminationStatus::Terminated(TerminationReason::SolverConverged);

        // Act
        let result =
            OptimOutcome::new(Some(array![1.0]), f64::NAN, &status, 1, FnEvalMap::new(), vec![]);

        // Assert
        assert!(matches!(result, Err(OptError::NonFiniteCost { .. })));
    }
}
