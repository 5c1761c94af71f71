//! transform — truncated square-root transform estimator.
//!
//! Purpose
//! -------
//! Map candidate normal parameters `(mean, sd)` to the mean and standard
//! deviation observed after the square-root transform and truncation to
//! `[0, upper]`. No closed form exists for these moments, so the estimator
//! discretizes the truncated probability mass on a fixed grid and takes
//! sample moments of the squared normal quantiles.
//!
//! Key behaviors
//! -------------
//! - [`params`]: the [`DistributionParams`] and [`TargetSpec`] value objects.
//! - [`grid`]: validated grid resolution ([`GridOptions`]) and the
//!   deterministic probability grid itself.
//! - [`estimator`]: the moment estimator and a closed-form reference for the
//!   untruncated limit.
//! - [`errors`]: [`TransformError`], raised for every numerically degenerate
//!   configuration instead of returning `NaN`.
//!
//! Conventions
//! -----------
//! - Pure functions only; nothing here logs, allocates beyond the grid, or
//!   touches shared state.
//! - Callers in the fitting layer convert [`TransformError`] into the
//!   optimizer's error surface.

pub mod errors;
pub mod estimator;
pub mod grid;
pub mod params;

pub use self::errors::{TransformError, TransformResult};
pub use self::estimator::{MomentEstimate, estimate, estimate_moments, squared_normal_moments};
pub use self::grid::{DEFAULT_INIT_STEP, DEFAULT_STEP_SIZE, GridOptions, MIN_STEP_SIZE};
pub use self::params::{DistributionParams, TargetSpec};
