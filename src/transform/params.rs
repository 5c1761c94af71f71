//! transform::params — value objects for candidate and target distributions.
//!
//! Two small `Copy` records flow through every fitting call:
//! [`DistributionParams`] describes a candidate normal distribution in the
//! untransformed domain, and [`TargetSpec`] describes what the caller wants
//! the transformed, truncated distribution to look like. Neither type
//! enforces invariants; positivity of the candidate is the optimizer's job
//! (via its lower bounds) and the target is taken as given.

/// Parameters of the untransformed normal distribution `N(mean, sd²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParams {
    pub mean: f64,
    pub sd: f64,
}

impl DistributionParams {
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }
}

/// Desired moments and truncation ceiling of the transformed distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSpec {
    pub mean: f64,
    pub sd: f64,
    pub upper: f64,
}

impl TargetSpec {
    pub fn new(mean: f64, sd: f64, upper: f64) -> Self {
        Self { mean, sd, upper }
    }

    /// Heuristic starting point `(sqrt(mean), sqrt(sd))` for the optimizer.
    ///
    /// Negative targets produce `NaN` components; the fitting driver rejects
    /// those before any solver work starts.
    pub fn initial_guess(&self) -> DistributionParams {
        DistributionParams::new(self.mean.sqrt(), self.sd.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Check the square-root starting heuristic on a realistic target.
    //
    // Given
    // -----
    // - TargetSpec(400, 225, 1200).
    //
    // Expect
    // ------
    // - initial_guess() == (20, 15).
    fn initial_guess_takes_square_roots_of_target_moments() {
        // Arrange
        let target = TargetSpec::new(400.0, 225.0, 1200.0);

        // Act
        let guess = target.initial_guess();

        // Assert
        assert_eq!(guess, DistributionParams::new(20.0, 15.0));
    }

    #[test]
    // Purpose
    // -------
    // Negative target moments have no real square root; the guess must
    // expose that as NaN rather than silently clamping.
    //
    // Given
    // -----
    // - TargetSpec(-1, 4, 10).
    //
    // Expect
    // ------
    // - mean component is NaN and sd component is 2.
    fn initial_guess_of_negative_target_is_not_positive() {
        // Arrange
        let target = TargetSpec::new(-1.0, 4.0, 10.0);

        // Act
        let guess = target.initial_guess();

        // Assert
        assert!(guess.mean.is_nan());
        assert_eq!(guess.sd, 2.0);
    }
}
