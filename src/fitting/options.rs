//! fitting::options — configuration for a single moment-matching fit.
//!
//! [`FitOptions`] bundles the three knobs a fit depends on: the positivity
//! offset used as the lower bound of both parameters, the simplex tolerances
//! and budgets, and the estimator grid resolution. `Default` carries the
//! standard values (`1e-5`, `xtol = ftol = 1e-4`, `5e-5`/`1e-4` grid).
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        simplex_optimizer::SimplexOptions,
    },
    transform::GridOptions,
};

/// Smallest admissible value for the candidate mean and sd.
///
/// Both parameters must be strictly positive, an open bound `> 0` that a
/// closed box cannot express. The optimizer's box is therefore
/// `[MIN_PARAM_VALUE, +∞)` in both coordinates, with this offset standing
/// in for the excluded zero.
pub const MIN_PARAM_VALUE: f64 = 1e-5;

/// Options for [`fit`](crate::fitting::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub bounds_residue: f64,
    pub simplex: SimplexOptions,
    pub grid: GridOptions,
}

impl FitOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// [`OptError::InvalidBoundsResidue`] if `bounds_residue` is non-finite
    /// or not strictly positive.
    pub fn new(bounds_residue: f64, simplex: SimplexOptions, grid: GridOptions) -> OptResult<Self> {
        verify_bounds_residue(bounds_residue)?;
        Ok(Self { bounds_residue, simplex, grid })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            bounds_residue: MIN_PARAM_VALUE,
            simplex: SimplexOptions::default(),
            grid: GridOptions::default(),
        }
    }
}

pub(crate) fn verify_bounds_residue(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidBoundsResidue {
            value,
            reason: "Bounds residue must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidBoundsResidue {
            value,
            reason: "Bounds residue must be positive.",
        });
    }
    Ok(())
}
