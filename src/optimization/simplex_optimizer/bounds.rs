//! simplex_optimizer::bounds — box constraints for the simplex search.
//!
//! Purpose
//! -------
//! Keep every trial point of the Nelder–Mead search inside a per-coordinate
//! box `[lower_i, upper_i]`. The simplex itself is unconstrained, so the
//! box is imposed by projecting (clipping) each candidate before it is
//! evaluated, and by folding initial vertices that overshoot a finite upper
//! bound back into the box.
//!
//! Key behaviors
//! -------------
//! - [`Bounds::new`] validates shape and ordering; infinities express
//!   one-sided or absent limits.
//! - [`Bounds::lower`] is the common case: finite lower limits, no upper.
//! - [`Bounds::clip`] projects a point into the box.
//! - [`Bounds::reflect_upper`] mirrors coordinates above a finite upper
//!   bound (`2·upper − x`) before clipping.
//!
//! Invariants & assumptions
//! ------------------------
//! - No bound is NaN and `lower_i <= upper_i` for every coordinate.
//! - Only closed boxes are representable; an open constraint such as
//!   `x > 0` is approximated by a small positive lower bound chosen by the
//!   caller.
use ndarray::Zip;

use crate::optimization::{
    errors::{OptError, OptResult},
    simplex_optimizer::types::Theta,
};

/// Per-coordinate closed box `[lower, upper]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Theta,
    upper: Theta,
}

impl Bounds {
    /// Construct validated bounds.
    ///
    /// # Errors
    /// - [`OptError::BoundsDimMismatch`] if `lower` and `upper` differ in length.
    /// - [`OptError::InvalidBounds`] if a limit is NaN or `lower > upper`.
    pub fn new(lower: Theta, upper: Theta) -> OptResult<Self> {
        if lower.len() != upper.len() {
            return Err(OptError::BoundsDimMismatch { expected: lower.len(), found: upper.len() });
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if lo.is_nan() || hi.is_nan() {
                return Err(OptError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                    reason: "Bounds must not be NaN.",
                });
            }
            if lo > hi {
                return Err(OptError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                    reason: "Lower bound must not exceed upper bound.",
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Lower limits only; every upper limit is `+∞`.
    pub fn lower(lower: Theta) -> OptResult<Self> {
        let upper = Theta::from_elem(lower.len(), f64::INFINITY);
        Self::new(lower, upper)
    }

    /// No constraint at all in `dim` coordinates.
    pub fn unbounded(dim: usize) -> Self {
        Self {
            lower: Theta::from_elem(dim, f64::NEG_INFINITY),
            upper: Theta::from_elem(dim, f64::INFINITY),
        }
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Check that `theta` has the same dimension as the box.
    ///
    /// # Errors
    /// [`OptError::BoundsDimMismatch`] on a length mismatch.
    pub fn check_dim(&self, theta: &Theta) -> OptResult<()> {
        if theta.len() != self.dim() {
            return Err(OptError::BoundsDimMismatch { expected: theta.len(), found: self.dim() });
        }
        Ok(())
    }

    /// Project `theta` into the box coordinate-wise.
    pub fn clip(&self, theta: &Theta) -> Theta {
        let mut out = theta.clone();
        Zip::from(&mut out).and(&self.lower).and(&self.upper).for_each(|x, &lo, &hi| {
            *x = (*x).max(lo).min(hi);
        });
        out
    }

    /// Mirror coordinates above a finite upper bound, then clip.
    pub fn reflect_upper(&self, theta: &Theta) -> Theta {
        let mut out = theta.clone();
        Zip::from(&mut out).and(&self.upper).for_each(|x, &hi| {
            if hi.is_finite() && *x > hi {
                *x = 2.0 * hi - *x;
            }
        });
        self.clip(&out)
    }

    /// True when every coordinate of `theta` lies inside the box.
    pub fn contains(&self, theta: &Theta) -> bool {
        theta.len() == self.dim()
            && theta
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&x, (&lo, &hi))| x >= lo && x <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Construction rejects mismatched lengths, NaN limits and inverted
    // intervals.
    //
    // Given
    // -----
    // - lower of length 2 vs upper of length 1.
    // - a NaN lower limit.
    // - lower = 2 > upper = 1.
    //
    // Expect
    // ------
    // - `BoundsDimMismatch`, then `InvalidBounds` twice.
    fn bounds_new_rejects_malformed_boxes() {
        // Act & Assert
        assert!(matches!(
            Bounds::new(array![0.0, 0.0], array![1.0]),
            Err(OptError::BoundsDimMismatch { .. })
        ));
        assert!(matches!(
            Bounds::new(array![f64::NAN], array![1.0]),
            Err(OptError::InvalidBounds { index: 0, .. })
        ));
        assert!(matches!(
            Bounds::new(array![0.0, 2.0], array![1.0, 1.0]),
            Err(OptError::InvalidBounds { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Clipping a point below a lower-only box lifts exactly the offending
    // coordinates to the limit.
    //
    // Given
    // -----
    // - Bounds::lower([1e-5, 1e-5]) and θ = [-3, 4].
    //
    // Expect
    // ------
    // - clip(θ) = [1e-5, 4] and the result is contained in the box.
    fn clip_lifts_coordinates_to_lower_limit() {
        // Arrange
        let bounds = Bounds::lower(array![1e-5, 1e-5]).expect("valid bounds");

        // Act
        let clipped = bounds.clip(&array![-3.0, 4.0]);

        // Assert
        assert_eq!(clipped, array![1e-5, 4.0]);
        assert!(bounds.contains(&clipped));
    }

    #[test]
    // Purpose
    // -------
    // Vertices above a finite upper limit are mirrored back inside before
    // clipping, so they keep some distance from the bound.
    //
    // Given
    // -----
    // - Box [0, 10] in one coordinate and θ = [10.5].
    //
    // Expect
    // ------
    // - reflect_upper(θ) = [9.5].
    fn reflect_upper_mirrors_overshoot() {
        // Arrange
        let bounds = Bounds::new(array![0.0], array![10.0]).expect("valid bounds");

        // Act
        let reflected = bounds.reflect_upper(&array![10.5]);

        // Assert
        assert_eq!(reflected, array![9.5]);
    }

    #[test]
    // Purpose
    // -------
    // An unbounded box never moves a point.
    //
    // Given
    // -----
    // - Bounds::unbounded(2) and θ = [-1e300, 1e300].
    //
    // Expect
    // ------
    // - clip(θ) == θ.
    fn unbounded_clip_is_identity() {
        // Arrange
        let bounds = Bounds::unbounded(2);
        let theta = array![-1e300, 1e300];

        // Act & Assert
        assert_eq!(bounds.clip(&theta), theta);
    }
}
