//! Errors raised while generating test matrices or configuring sweeps.
//!
//! [`ExperimentError`] covers parameter problems detected before any run
//! starts: impossible dimensions or condition numbers, empty sweeps and
//! start points that do not fit the generated problem. Once a sweep is
//! running, per-trial trouble is recorded in the trial's status instead.

use statrs::distribution::NormalError;

use crate::objective::errors::ObjectiveError;

/// Result alias for generator and harness operations.
pub type ExperimentResult<T> = Result<T, ExperimentError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    // ---- Generator ----
    /// Matrix dimension must be at least one.
    InvalidDimension { n: usize, reason: &'static str },

    /// Condition number must be finite and at least one.
    InvalidConditionNumber { kappa: f64, reason: &'static str },

    /// Generated matrix could not be turned into an objective.
    Objective(ObjectiveError),

    /// Wrapper for statrs::distribution::NormalError::MeanInvalid
    MeanInvalid,

    /// Wrapper for statrs::distribution::NormalError::StandardDeviationInvalid
    StandardDeviationInvalid,

    // ---- Sweep ----
    /// A sweep needs at least one condition number.
    EmptySweep,

    /// A sweep needs at least one trial per condition number.
    InvalidTrials { trials: usize, reason: &'static str },

    /// A fixed start point must match the sweep dimension.
    StartPointDimMismatch { expected: usize, found: usize },

    /// Start-point scale or constant must be finite (and positive for scales).
    InvalidStartPoint { value: f64, reason: &'static str },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for ExperimentError {}

impl std::fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Generator ----
            ExperimentError::InvalidDimension { n, reason } => {
                write!(f, "Invalid matrix dimension {n}: {reason}")
            }
            ExperimentError::InvalidConditionNumber { kappa, reason } => {
                write!(f, "Invalid condition number {kappa}: {reason}")
            }
            ExperimentError::Objective(err) => {
                write!(f, "Generated objective rejected: {err}")
            }
            ExperimentError::MeanInvalid => {
                write!(f, "Normal sampler mean is invalid (non-finite)")
            }
            ExperimentError::StandardDeviationInvalid => {
                write!(f, "Normal sampler standard deviation is invalid (<= 0 or non-finite)")
            }

            // ---- Sweep ----
            ExperimentError::EmptySweep => {
                write!(f, "Sweep has no condition numbers")
            }
            ExperimentError::InvalidTrials { trials, reason } => {
                write!(f, "Invalid trial count {trials}: {reason}")
            }
            ExperimentError::StartPointDimMismatch { expected, found } => {
                write!(f, "Start point has length {found}, expected {expected}")
            }
            ExperimentError::InvalidStartPoint { value, reason } => {
                write!(f, "Invalid start point parameter {value}: {reason}")
            }

            // ---- Fallback ----
            ExperimentError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<ObjectiveError> for ExperimentError {
    fn from(err: ObjectiveError) -> Self {
        ExperimentError::Objective(err)
    }
}

impl From<NormalError> for ExperimentError {
    fn from(err: NormalError) -> Self {
        match err {
            NormalError::MeanInvalid => ExperimentError::MeanInvalid,
            NormalError::StandardDeviationInvalid => ExperimentError::StandardDeviationInvalid,
            #[allow(unreachable_patterns)]
            _ => ExperimentError::UnknownError,
        }
    }
}
