//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! The simplex search only ever asks for costs, so the adapter implements
//! `CostFunction` and nothing else. Non-finite costs are turned into
//! [`OptError::NonFiniteCost`] here, which stops the run instead of letting
//! `NaN` comparisons silently reorder the simplex.
use crate::optimization::{
    errors::OptError,
    simplex_optimizer::{
        traits::Objective,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `Objective` to `argmin`'s `CostFunction`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ)`.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `value` via `?`.
    /// - Returns `NonFiniteCost` if the value is `NaN` or infinite.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `Objective` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    struct Shifted;

    impl Objective for Shifted {
        type Data = f64;

        fn value(&self, theta: &Theta, shift: &f64) -> OptResult<Cost> {
            Ok(theta.sum() + shift)
        }

        fn check(&self, _theta: &Theta, _shift: &f64) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // The adapter forwards finite costs unchanged (no sign flip).
    //
    // Given
    // -----
    // - c(θ) = Σθ + 1 at θ = [1, 2].
    //
    // Expect
    // ------
    // - cost = 4.
    fn adapter_forwards_finite_cost() {
        // Arrange
        let shift = 1.0;
        let adapter = ArgMinAdapter::new(&Shifted, &shift);

        // Act
        let cost = adapter.cost(&array![1.0, 2.0]).expect("finite cost");

        // Assert
        assert_eq!(cost, 4.0);
    }

    #[test]
    // Purpose
    // -------
    // Infinite costs become `OptError::NonFiniteCost` inside argmin's error.
    //
    // Given
    // -----
    // - shift = +∞.
    //
    // Expect
    // ------
    // - `cost` errors and converts back into `NonFiniteCost`.
    fn adapter_rejects_non_finite_cost() {
        // Arrange
        let shift = f64::INFINITY;
        let adapter = ArgMinAdapter::new(&Shifted, &shift);

        // Act
        let err = adapter.cost(&array![0.0]).expect_err("non-finite cost");

        // Assert
        assert!(matches!(OptError::from(err), OptError::NonFiniteCost { .. }));
    }
}
