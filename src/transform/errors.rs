//! transform::errors — failures of the truncated square-root estimator.
//!
//! Purpose
//! -------
//! Name every way the moment estimator can fail to produce usable numbers,
//! so that numerical degeneracy surfaces as an explicit error instead of a
//! silent `NaN` leaking into the optimizer.
//!
//! Conventions
//! -----------
//! - Payloads carry the offending values only; no grids or sample buffers.
//! - Conversion into the optimizer error surface lives in
//!   `optimization::errors` (`From<TransformError> for OptError`).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for estimator and grid operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error conditions raised while estimating transformed moments.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Grid configuration ----
    /// Initial probability increment must be finite and in (0, 1).
    InvalidInitStep { value: f64, reason: &'static str },

    /// Grid step size must be finite and in (0, 1).
    InvalidStepSize { value: f64, reason: &'static str },

    // ---- Distribution ----
    /// `statrs` rejected the normal parameters.
    InvalidNormal { mean: f64, sd: f64 },

    /// Upper truncation bound is NaN.
    InvalidUpper { value: f64 },

    /// Probability mass between 0 and `upper` is non-positive or non-finite.
    DegenerateTruncation { p_lower: f64, p_upper: f64 },

    /// No grid point fell inside `[start, 1)`.
    EmptyGrid { start: f64, step_size: f64 },

    // ---- Moments ----
    /// Sample mean or standard deviation of the squared grid is not finite.
    NonFiniteMoments { mean: f64, sd: f64 },
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::InvalidInitStep { value, reason } => {
                write!(f, "Invalid initial probability step {value}: {reason}")
            }
            TransformError::InvalidStepSize { value, reason } => {
                write!(f, "Invalid probability step size {value}: {reason}")
            }
            TransformError::InvalidNormal { mean, sd } => {
                write!(f, "Invalid normal parameters: mean = {mean}, sd = {sd}")
            }
            TransformError::InvalidUpper { value } => {
                write!(f, "Invalid upper truncation bound: {value}")
            }
            TransformError::DegenerateTruncation { p_lower, p_upper } => {
                write!(
                    f,
                    "Degenerate truncation region: P(X < 0) = {p_lower}, P(X < upper) = {p_upper}"
                )
            }
            TransformError::EmptyGrid { start, step_size } => {
                write!(f, "Empty probability grid starting at {start} with step {step_size}")
            }
            TransformError::NonFiniteMoments { mean, sd } => {
                write!(f, "Non-finite transformed moments: mean = {mean}, sd = {sd}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(format!("TransformError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that `DegenerateTruncation` reports both cumulative
    // probabilities so a caller can see why the region collapsed.
    //
    // Given
    // -----
    // - p_lower = 0.5, p_upper = 0.5 (upper bound at zero).
    //
    // Expect
    // ------
    // - The `Display` message contains "0.5" twice.
    fn degenerate_truncation_display_embeds_both_probabilities() {
        // Arrange
        let err = TransformError::DegenerateTruncation { p_lower: 0.5, p_upper: 0.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg.matches("0.5").count(), 2, "unexpected message: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure grid configuration errors carry the offending value and the
    // reason string.
    //
    // Given
    // -----
    // - An `InvalidStepSize` with value -1 and a fixed reason.
    //
    // Expect
    // ------
    // - Message contains "-1" and the reason.
    fn invalid_step_size_display_includes_value_and_reason() {
        // Arrange
        let err = TransformError::InvalidStepSize { value: -1.0, reason: "must be positive" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-1"), "missing payload in: {msg}");
        assert!(msg.contains("must be positive"), "missing reason in: {msg}");
    }
}
