use argmin::core::{ArgminError, Error};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::transform::errors::TransformError;

/// Crate-wide result alias for optimizer and fitting operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Tolerances ----
    /// Parameter-space tolerance needs to be positive and finite.
    InvalidXTol {
        tol: f64,
        reason: &'static str,
    },
    /// Objective-value tolerance needs to be positive and finite.
    InvalidFTol {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// Maximum function evaluations needs to be positive.
    InvalidMaxFev {
        max_fev: usize,
        reason: &'static str,
    },

    // ---- Bounds ----
    /// Bound vectors must match the parameter dimension.
    BoundsDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Each coordinate needs `lower <= upper` and no NaN.
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
        reason: &'static str,
    },
    /// Positivity offset must be finite and > 0.
    InvalidBoundsResidue {
        value: f64,
        reason: &'static str,
    },

    // ---- Initial guess ----
    /// Theta length mismatch for the objective.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },
    /// Initial guess must have finite values.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },
    /// Theta hat is missing
    MissingThetaHat,
    /// Simplex was used before it was built.
    EmptySimplex,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Transform errors ----
    /// Invalid grid start offset (`init_step`).
    InvalidInitStep {
        value: f64,
        reason: &'static str,
    },
    /// Invalid grid increment (`step_size`).
    InvalidStepSize {
        value: f64,
        reason: &'static str,
    },
    /// Candidate normal rejected by statrs.
    InvalidNormal {
        mean: f64,
        sd: f64,
    },
    /// Upper truncation bound is NaN.
    InvalidUpper {
        value: f64,
    },
    /// Truncated probability mass collapsed.
    DegenerateTruncation {
        p_lower: f64,
        p_upper: f64,
    },
    /// Probability grid had no interior point.
    EmptyGrid {
        start: f64,
        step_size: f64,
    },
    /// Squared sample produced non-finite moments.
    NonFiniteMoments {
        mean: f64,
        sd: f64,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Tolerances ----
            OptError::InvalidXTol { tol, reason } => {
                write!(f, "Invalid parameter tolerance {tol}: {reason}")
            }
            OptError::InvalidFTol { tol, reason } => {
                write!(f, "Invalid objective tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidMaxFev { max_fev, reason } => {
                write!(f, "Invalid maximum function evaluations {max_fev}: {reason}")
            }

            // ---- Bounds ----
            OptError::BoundsDimMismatch { expected, found } => {
                write!(f, "Bounds dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidBounds { index, lower, upper, reason } => {
                write!(f, "Invalid bounds at index {index}: [{lower}, {upper}]: {reason}")
            }
            OptError::InvalidBoundsResidue { value, reason } => {
                write!(f, "Invalid bounds residue {value}: {reason}")
            }

            // ---- Initial guess ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }
            OptError::EmptySimplex => {
                write!(f, "Simplex has not been initialized")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Transform errors ----
            OptError::InvalidInitStep { value, reason } => {
                write!(f, "Invalid grid init_step {value}: {reason}")
            }
            OptError::InvalidStepSize { value, reason } => {
                write!(f, "Invalid grid step_size {value}: {reason}")
            }
            OptError::InvalidNormal { mean, sd } => {
                write!(f, "Invalid normal parameters: mean = {mean}, sd = {sd}")
            }
            OptError::InvalidUpper { value } => {
                write!(f, "Invalid upper truncation bound: {value}")
            }
            OptError::DegenerateTruncation { p_lower, p_upper } => {
                write!(
                    f,
                    "Degenerate truncation region: P(X < 0) = {p_lower}, P(X < upper) = {p_upper}"
                )
            }
            OptError::EmptyGrid { start, step_size } => {
                write!(f, "Empty probability grid starting at {start} with step {step_size}")
            }
            OptError::NonFiniteMoments { mean, sd } => {
                write!(f, "Non-finite transformed moments: mean = {mean}, sd = {sd}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Errors raised by our own cost function travel through argmin boxed.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<TransformError> for OptError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::InvalidInitStep { value, reason } => {
                OptError::InvalidInitStep { value, reason }
            }
            TransformError::InvalidStepSize { value, reason } => {
                OptError::InvalidStepSize { value, reason }
            }
            TransformError::InvalidNormal { mean, sd } => OptError::InvalidNormal { mean, sd },
            TransformError::InvalidUpper { value } => OptError::InvalidUpper { value },
            TransformError::DegenerateTruncation { p_lower, p_upper } => {
                OptError::DegenerateTruncation { p_lower, p_upper }
            }
            TransformError::EmptyGrid { start, step_size } => {
                OptError::EmptyGrid { start, step_size }
            }
            TransformError::NonFiniteMoments { mean, sd } => {
                OptError::NonFiniteMoments { mean, sd }
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(format!("OptError: {err}"))
    }
}
