//! simplex_optimizer::nelder_mead — bounded Nelder–Mead as an argmin solver.
//!
//! Purpose
//! -------
//! Provide a derivative-free simplex search that honours box constraints
//! and stops on *absolute* spreads in both parameter space and cost, which
//! argmin's stock `NelderMead` (standard-deviation-of-costs stopping rule,
//! no bounds) does not offer.
//!
//! Key behaviors
//! -------------
//! - Build the initial simplex around the (clipped) starting point: vertex
//!   `k + 1` scales coordinate `k` by `1 + NONZERO_DELTA`, or sets it to
//!   `ZERO_DELTA` when it is exactly zero. Vertices above a finite upper
//!   bound are mirrored back before clipping.
//! - Each iteration tries reflection, then expansion, outside or inside
//!   contraction, and finally shrinks towards the best vertex. Every trial
//!   point is clipped into the box before it is evaluated.
//! - Terminate with `SolverConverged` once
//!   `max_i ‖x_i − x_best‖_∞ ≤ xtol` and `max_i |f_i − f_best| ≤ ftol`, or
//!   with `SolverExit` once the evaluation budget is spent. The iteration
//!   budget is enforced by the argmin executor (`max_iters`).
//!
//! Invariants & assumptions
//! ------------------------
//! - After `init`, the simplex holds `dim + 1` vertices sorted by cost, each
//!   inside the bounds and with a finite cost (the adapter rejects the rest).
//! - The state's `param`/`cost` always mirror the current best vertex, so
//!   argmin's best-so-far tracking agrees with the simplex.
//! - No randomness: the vertex order is decided by a stable sort on cost.
use argmin::core::{
    CostFunction, Error, KV, Problem, Solver, State, TerminationReason, TerminationStatus,
};

use crate::optimization::{
    errors::OptError,
    simplex_optimizer::{
        bounds::Bounds,
        traits::Tolerances,
        types::{
            CONTRACTION, Cost, EXPANSION, NONZERO_DELTA, REFLECTION, SHRINK, SimplexState, Theta,
            ZERO_DELTA,
        },
    },
};

/// Message reported when the evaluation budget stops the run.
pub const MAX_FEV_MESSAGE: &str = "Maximum number of function evaluations has been exceeded.";

/// Nelder–Mead simplex search confined to a box.
#[derive(Debug, Clone)]
pub struct BoundedNelderMead {
    bounds: Bounds,
    xtol: f64,
    ftol: f64,
    max_fev: u64,
    fev: u64,
    simplex: Vec<(Theta, Cost)>,
}

impl BoundedNelderMead {
    /// Create a solver for `bounds` using the tolerances in `tols`.
    ///
    /// The evaluation budget is resolved from `tols.max_fev` and the box
    /// dimension; the iteration budget is left to the executor.
    pub fn new(bounds: Bounds, tols: &Tolerances) -> Self {
        let max_fev = tols.resolved_max_fev(bounds.dim()) as u64;
        Self { bounds, xtol: tols.xtol, ftol: tols.ftol, max_fev, fev: 0, simplex: Vec::new() }
    }

    /// Vertices and costs, best first.
    pub fn simplex(&self) -> &[(Theta, Cost)] {
        &self.simplex
    }

    /// Best vertex and its cost, if the simplex has been built.
    pub fn best(&self) -> Option<&(Theta, Cost)> {
        self.simplex.first()
    }

    /// Objective evaluations performed by this solver.
    pub fn evaluations(&self) -> u64 {
        self.fev
    }

    /// Starting vertices around `x0`, already inside the bounds.
    pub fn initial_vertices(&self, x0: &Theta) -> Vec<Theta> {
        let x0 = self.bounds.clip(x0);
        let mut vertices = Vec::with_capacity(x0.len() + 1);
        vertices.push(x0.clone());
        for k in 0..x0.len() {
            let mut y = x0.clone();
            y[k] = if y[k] != 0.0 { (1.0 + NONZERO_DELTA) * y[k] } else { ZERO_DELTA };
            vertices.push(y);
        }
        vertices.iter().map(|v| self.bounds.reflect_upper(v)).collect()
    }

    /// Both spreads within tolerance.
    pub fn has_converged(&self) -> bool {
        let Some((best, f_best)) = self.simplex.first() else {
            return false;
        };
        let x_spread = self
            .simplex
            .iter()
            .skip(1)
            .map(|(v, _)| (v - best).fold(0.0_f64, |m, d| m.max(d.abs())))
            .fold(0.0_f64, f64::max);
        let f_spread =
            self.simplex.iter().skip(1).map(|(_, f)| (f - f_best).abs()).fold(0.0_f64, f64::max);
        x_spread <= self.xtol && f_spread <= self.ftol
    }

    fn evaluate<O>(&mut self, problem: &mut Problem<O>, theta: &Theta) -> Result<(Theta, Cost), Error>
    where
        O: CostFunction<Param = Theta, Output = Cost>,
    {
        let theta = self.bounds.clip(theta);
        self.fev += 1;
        let cost = problem.cost(&theta)?;
        Ok((theta, cost))
    }

    fn sort(&mut self) {
        self.simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    }

    fn centroid(&self) -> Theta {
        let n = self.simplex.len() - 1;
        let mut xbar = Theta::zeros(self.simplex[0].0.len());
        for (v, _) in &self.simplex[..n] {
            xbar += v;
        }
        xbar / n as f64
    }

    fn best_state(&self, state: SimplexState) -> Result<SimplexState, Error> {
        let (best, cost) = self.best().cloned().ok_or(OptError::EmptySimplex)?;
        Ok(state.param(best).cost(cost))
    }
}

/// `a·wa + b·wb` for two vertices.
fn combine(a: &Theta, wa: f64, b: &Theta, wb: f64) -> Theta {
    a * wa + b * wb
}

impl<O> Solver<O, SimplexState> for BoundedNelderMead
where
    O: CostFunction<Param = Theta, Output = Cost>,
{
    const NAME: &'static str = "Bounded Nelder-Mead";

    fn init(
        &mut self, problem: &mut Problem<O>, state: SimplexState,
    ) -> Result<(SimplexState, Option<KV>), Error> {
        let x0 = state.get_param().cloned().ok_or(OptError::MissingThetaHat)?;
        if x0.is_empty() {
            return Err(OptError::ThetaLengthMismatch { expected: 1, actual: 0 }.into());
        }
        self.bounds.check_dim(&x0)?;

        self.fev = 0;
        self.simplex.clear();
        for vertex in self.initial_vertices(&x0) {
            let evaluated = self.evaluate(problem, &vertex)?;
            self.simplex.push(evaluated);
        }
        self.sort();
        Ok((self.best_state(state)?, None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, state: SimplexState,
    ) -> Result<(SimplexState, Option<KV>), Error> {
        if self.simplex.len() < 2 {
            return Err(OptError::EmptySimplex.into());
        }
        let n = self.simplex.len() - 1;
        let f_best = self.simplex[0].1;
        let f_second_worst = self.simplex[n - 1].1;
        let (worst, f_worst) = self.simplex[n].clone();
        let xbar = self.centroid();

        let (xr, fxr) =
            self.evaluate(problem, &combine(&xbar, 1.0 + REFLECTION, &worst, -REFLECTION))?;

        let mut shrink = false;
        if fxr < f_best {
            let chi = REFLECTION * EXPANSION;
            let (xe, fxe) = self.evaluate(problem, &combine(&xbar, 1.0 + chi, &worst, -chi))?;
            self.simplex[n] = if fxe < fxr { (xe, fxe) } else { (xr, fxr) };
        } else if fxr < f_second_worst {
            self.simplex[n] = (xr, fxr);
        } else if fxr < f_worst {
            let psi = CONTRACTION * REFLECTION;
            let (xc, fxc) = self.evaluate(problem, &combine(&xbar, 1.0 + psi, &worst, -psi))?;
            if fxc <= fxr {
                self.simplex[n] = (xc, fxc);
            } else {
                shrink = true;
            }
        } else {
            let (xcc, fxcc) =
                self.evaluate(problem, &combine(&xbar, 1.0 - CONTRACTION, &worst, CONTRACTION))?;
            if fxcc < f_worst {
                self.simplex[n] = (xcc, fxcc);
            } else {
                shrink = true;
            }
        }

        if shrink {
            let best = self.simplex[0].0.clone();
            for j in 1..=n {
                let towards = combine(&best, 1.0 - SHRINK, &self.simplex[j].0, SHRINK);
                self.simplex[j] = self.evaluate(problem, &towards)?;
            }
        }

        self.sort();
        Ok((self.best_state(state)?, None))
    }

    fn terminate(&mut self, _state: &SimplexState) -> TerminationStatus {
        if self.fev >= self.max_fev {
            return TerminationStatus::Terminated(TerminationReason::SolverExit(
                MAX_FEV_MESSAGE.to_string(),
            ));
        }
        if self.has_converged() {
            return TerminationStatus::Terminated(TerminationReason::SolverConverged);
        }
        TerminationStatus::NotTerminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Initial simplex construction, including zero coordinates and the
    //   lower bound clip.
    // - The convergence test on hand-built simplices.
    //
    // They intentionally DO NOT cover:
    // - Full executor runs, which are exercised through `minimize` in `api`.
    // -------------------------------------------------------------------------

    fn solver(bounds: Bounds) -> BoundedNelderMead {
        BoundedNelderMead::new(bounds, &Tolerances::default())
    }

    #[test]
    // Purpose
    // -------
    // Check the standard initial simplex: 5% scaling of non-zero
    // coordinates, a fixed step for zero ones.
    //
    // Given
    // -----
    // - Unbounded box in 2-D and x0 = [20, 0].
    //
    // Expect
    // ------
    // - Vertices [20, 0], [21, 0], [20, 0.00025].
    fn initial_vertices_scale_nonzero_and_step_zero_coordinates() {
        // Arrange
        let nm = solver(Bounds::unbounded(2));

        // Act
        let vertices = nm.initial_vertices(&array![20.0, 0.0]);

        // Assert
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], array![20.0, 0.0]);
        assert_eq!(vertices[1], array![21.0, 0.0]);
        assert_eq!(vertices[2], array![20.0, ZERO_DELTA]);
    }

    #[test]
    // Purpose
    // -------
    // A starting point below the lower bound is clipped before the simplex
    // is built, so every vertex is feasible.
    //
    // Given
    // -----
    // - Bounds::lower([1e-5, 1e-5]) and x0 = [0, -2].
    //
    // Expect
    // ------
    // - First vertex [1e-5, 1e-5]; all vertices inside the box.
    fn initial_vertices_are_clipped_into_bounds() {
        // Arrange
        let bounds = Bounds::lower(array![1e-5, 1e-5]).expect("valid bounds");
        let nm = solver(bounds.clone());

        // Act
        let vertices = nm.initial_vertices(&array![0.0, -2.0]);

        // Assert
        assert_eq!(vertices[0], array![1e-5, 1e-5]);
        assert!(vertices.iter().all(|v| bounds.contains(v)));
    }

    #[test]
    // Purpose
    // -------
    // Convergence needs both the vertex spread and the cost spread within
    // tolerance.
    //
    // Given
    // -----
    // - A tight simplex with tight costs (converged).
    // - The same vertices with a cost spread of 1e-2 (not converged).
    // - An empty simplex (not converged).
    //
    // Expect
    // ------
    // - true, false, false.
    fn has_converged_requires_both_spreads() {
        // Arrange
        let mut nm = solver(Bounds::unbounded(2));
        let tight = vec![
            (array![1.0, 1.0], 0.0),
            (array![1.00005, 1.0], 0.00005),
            (array![1.0, 0.99995], 0.00008),
        ];
        let loose_costs = vec![
            (array![1.0, 1.0], 0.0),
            (array![1.00005, 1.0], 0.01),
            (array![1.0, 0.99995], 0.00008),
        ];

        // Act & Assert
        assert!(!nm.has_converged());
        nm.simplex = tight;
        assert!(nm.has_converged());
        nm.simplex = loose_costs;
        assert!(!nm.has_converged());
    }
}
