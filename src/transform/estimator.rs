//! transform::estimator — moments of a truncated, squared normal sample.
//!
//! Purpose
//! -------
//! Estimate the mean and standard deviation that a practitioner would
//! measure on the square-root scale, given candidate normal parameters in
//! the untransformed domain. The transform is modelled in reverse: normal
//! quantiles over the truncated probability mass are squared, and sample
//! moments of the squared grid are reported.
//!
//! Key behaviors
//! -------------
//! - Compute `p_lower = Φ(0)` and `p_upper = Φ(upper)` under `N(mean, sd²)`
//!   and reject a non-positive or non-finite truncated mass.
//! - Build the deterministic probability grid from [`crate::transform::grid`],
//!   invert each point with `statrs`' normal quantile, and square it.
//! - Return population moments (`ddof = 0`) as a [`MomentEstimate`].
//!
//! Invariants & assumptions
//! ------------------------
//! - No random numbers are drawn; identical inputs give bit-identical output.
//! - A successful estimate always has finite `mean` and `sd`; any `NaN` is
//!   turned into a [`TransformError`] before leaving this module.
//! - The grid runs from inside the truncated mass up to (but excluding)
//!   probability 1, so `upper` only moves the starting point.
//!
//! Testing notes
//! -------------
//! - The untruncated limit is checked against [`squared_normal_moments`].
//! - Truncation at zero of a centred normal is checked against the χ²(1)
//!   moments `(1, √2)`.
//! - Determinism, resolution monotonicity and the degenerate regions are
//!   covered here and again end-to-end in the integration tests.
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::transform::{
    errors::{TransformError, TransformResult},
    grid::{GridOptions, grid_start, sample_grid},
    params::DistributionParams,
};

/// Moments of the squared grid plus the bookkeeping that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentEstimate {
    pub mean: f64,
    pub sd: f64,
    pub n_samples: usize,
    pub truncated_mass: f64,
}

/// Estimate transformed moments for `params` truncated at `upper`.
///
/// # Errors
/// - [`TransformError::InvalidUpper`] if `upper` is NaN.
/// - [`TransformError::InvalidNormal`] if `statrs` rejects `(mean, sd)`,
///   e.g. `sd <= 0`.
/// - [`TransformError::DegenerateTruncation`] if `Φ(upper) − Φ(0)` is not a
///   finite positive number (this covers `upper <= 0`).
/// - [`TransformError::EmptyGrid`] if the grid has no interior point.
/// - [`TransformError::NonFiniteMoments`] if the squared sample overflows.
pub fn estimate(
    params: &DistributionParams, upper: f64, grid: &GridOptions,
) -> TransformResult<MomentEstimate> {
    if upper.is_nan() {
        return Err(TransformError::InvalidUpper { value: upper });
    }
    let normal = Normal::new(params.mean, params.sd)
        .map_err(|_| TransformError::InvalidNormal { mean: params.mean, sd: params.sd })?;

    let p_lower = normal.cdf(0.0);
    let p_upper = normal.cdf(upper);
    let truncated_mass = p_upper - p_lower;
    if !truncated_mass.is_finite() || truncated_mass <= 0.0 {
        return Err(TransformError::DegenerateTruncation { p_lower, p_upper });
    }

    let probs = sample_grid(grid_start(p_lower, p_upper, grid), grid)?;
    let squared = squared_quantiles(&normal, &probs);
    let mean = squared.mean().unwrap_or(f64::NAN);
    let sd = squared.std(0.0);
    if !mean.is_finite() || !sd.is_finite() {
        return Err(TransformError::NonFiniteMoments { mean, sd });
    }
    Ok(MomentEstimate { mean, sd, n_samples: squared.len(), truncated_mass })
}

/// [`estimate`] on the default grid, returning just `(mean, sd)`.
pub fn estimate_moments(mean: f64, sd: f64, upper: f64) -> TransformResult<(f64, f64)> {
    let est = estimate(&DistributionParams::new(mean, sd), upper, &GridOptions::default())?;
    Ok((est.mean, est.sd))
}

/// Closed-form `(mean, sd)` of `X²` for untruncated `X ~ N(mean, sd²)`.
///
/// `E[X²] = μ² + σ²` and `Var[X²] = 4μ²σ² + 2σ⁴`.
pub fn squared_normal_moments(mean: f64, sd: f64) -> (f64, f64) {
    let (mu2, s2) = (mean * mean, sd * sd);
    (mu2 + s2, (4.0 * mu2 * s2 + 2.0 * s2 * s2).sqrt())
}

fn squared_quantiles(normal: &Normal, probs: &Array1<f64>) -> Array1<f64> {
    probs.mapv(|p| normal.inverse_cdf(p).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement with closed-form moments in the untruncated limit and for
    //   truncation at zero.
    // - Determinism and resolution monotonicity.
    // - Explicit errors for degenerate truncation and invalid parameters.
    //
    // They intentionally DO NOT cover:
    // - Grid construction details (see `grid`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // With negligible mass below zero and an effectively infinite upper
    // bound, the estimator must reduce to the squared-normal moments.
    //
    // Given
    // -----
    // - N(10, 1), upper = 1e6, default grid.
    //
    // Expect
    // ------
    // - mean ≈ 101 within 0.1%, sd ≈ √402 within 1%.
    fn untruncated_limit_matches_squared_normal_moments() {
        // Arrange
        let params = DistributionParams::new(10.0, 1.0);
        let (ref_mean, ref_sd) = squared_normal_moments(10.0, 1.0);

        // Act
        let est = estimate(&params, 1e6, &GridOptions::default()).expect("estimate succeeds");

        // Assert
        assert_relative_eq!(est.mean, ref_mean, max_relative = 1e-3);
        assert_relative_eq!(est.sd, ref_sd, max_relative = 1e-2);
        assert_eq!(est.n_samples, 10_000);
    }

    #[test]
    // Purpose
    // -------
    // Truncating a centred normal at zero leaves the half-normal, whose
    // square is χ²(1).
    //
    // Given
    // -----
    // - N(0, 1), upper = +∞.
    //
    // Expect
    // ------
    // - truncated mass 0.5, mean ≈ 1, sd ≈ √2.
    fn truncation_at_zero_of_centred_normal_gives_chi_square_moments() {
        // Arrange
        let params = DistributionParams::new(0.0, 1.0);

        // Act
        let est = estimate(&params, f64::INFINITY, &GridOptions::default())
            .expect("estimate succeeds");

        // Assert
        assert_relative_eq!(est.truncated_mass, 0.5, epsilon = 1e-12);
        assert_relative_eq!(est.mean, 1.0, max_relative = 1e-2);
        assert_relative_eq!(est.sd, 2f64.sqrt(), max_relative = 2e-2);
    }

    #[test]
    // Purpose
    // -------
    // The estimator is a pure function of its inputs.
    //
    // Given
    // -----
    // - The same parameters evaluated twice.
    //
    // Expect
    // ------
    // - Bit-identical `MomentEstimate`s.
    fn estimate_is_deterministic() {
        // Arrange
        let params = DistributionParams::new(22.0, 7.0);

        // Act
        let first = estimate(&params, 1200.0, &GridOptions::default()).expect("first");
        let second = estimate(&params, 1200.0, &GridOptions::default()).expect("second");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Refining the grid must not move the estimate further from the
    // closed-form reference.
    //
    // Given
    // -----
    // - N(10, 1), upper = 1e6.
    // - A coarse grid (5e-4, 1e-3) and the default grid (5e-5, 1e-4).
    //
    // Expect
    // ------
    // - Total absolute moment error of the fine grid ≤ that of the coarse.
    fn finer_grid_does_not_increase_error() {
        // Arrange
        let params = DistributionParams::new(10.0, 1.0);
        let (ref_mean, ref_sd) = squared_normal_moments(10.0, 1.0);
        let coarse = GridOptions::new(5e-4, 1e-3).expect("valid");
        let fine = GridOptions::default();

        // Act
        let est_coarse = estimate(&params, 1e6, &coarse).expect("coarse");
        let est_fine = estimate(&params, 1e6, &fine).expect("fine");

        // Assert
        let err_coarse = (est_coarse.mean - ref_mean).abs() + (est_coarse.sd - ref_sd).abs();
        let err_fine = (est_fine.mean - ref_mean).abs() + (est_fine.sd - ref_sd).abs();
        assert!(
            err_fine <= err_coarse + 1e-12,
            "fine error {err_fine} should not exceed coarse error {err_coarse}"
        );
    }

    #[test]
    // Purpose
    // -------
    // A near-zero distribution is still a valid input and must give finite,
    // near-zero moments.
    //
    // Given
    // -----
    // - N(1e-4, 1e-4), upper = 1200.
    //
    // Expect
    // ------
    // - Finite moments, both below 1e-6.
    fn near_zero_distribution_gives_finite_small_moments() {
        // Act
        let (mean, sd) = estimate_moments(1e-4, 1e-4, 1200.0).expect("finite moments");

        // Assert
        assert!(mean.is_finite() && sd.is_finite());
        assert!(mean >= 0.0 && mean < 1e-6, "mean = {mean}");
        assert!(sd >= 0.0 && sd < 1e-6, "sd = {sd}");
    }

    #[test]
    // Purpose
    // -------
    // Upper bounds at or below zero leave no truncated mass and must be
    // reported, not sampled.
    //
    // Given
    // -----
    // - N(1, 1) with upper = 0 and upper = -5.
    //
    // Expect
    // ------
    // - `TransformError::DegenerateTruncation` for both.
    fn non_positive_upper_is_degenerate() {
        // Arrange
        let params = DistributionParams::new(1.0, 1.0);

        // Act & Assert
        for upper in [0.0, -5.0] {
            let result = estimate(&params, upper, &GridOptions::default());
            assert!(
                matches!(result, Err(TransformError::DegenerateTruncation { .. })),
                "upper = {upper}: got {result:?}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Parameters that `statrs` cannot turn into a normal distribution, and a
    // NaN bound, are surfaced as errors.
    //
    // Given
    // -----
    // - sd = 0, sd = -1, and upper = NaN.
    //
    // Expect
    // ------
    // - `InvalidNormal` for the bad sds, `InvalidUpper` for the NaN bound.
    fn invalid_inputs_are_reported() {
        // Arrange
        let grid = GridOptions::default();

        // Act & Assert
        for sd in [0.0, -1.0] {
            let result = estimate(&DistributionParams::new(1.0, sd), 10.0, &grid);
            assert!(matches!(result, Err(TransformError::InvalidNormal { .. })));
        }
        let result = estimate(&DistributionParams::new(1.0, 1.0), f64::NAN, &grid);
        assert!(matches!(result, Err(TransformError::InvalidUpper { .. })));
    }
}
