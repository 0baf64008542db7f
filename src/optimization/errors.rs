//! Unified error surface for optimizer construction and execution.
//!
//! Every fallible public entry point of the crate (`GradientDescent::new`,
//! `GradientDescent::minimize`, `ExperimentHarness::run`,
//! `reference_minimize`) returns [`OptResult`]. Module-level errors
//! ([`ObjectiveError`], [`LineSearchError`], [`ExperimentError`]) and
//! `argmin` errors convert into [`OptError`] through `From`, so `?` works
//! across layers.
//!
//! Runtime numeric failures inside a run (NaN iterates, a line search that
//! cannot find a step) are NOT errors at this level: they end the run with
//! a `Diverged` status.
use argmin::core::{ArgminError, Error};

use crate::{
    experiments::errors::ExperimentError, objective::errors::ObjectiveError,
    optimization::line_search::errors::LineSearchError,
};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- GdOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad { tol: f64, reason: &'static str },

    /// Maximum iterations needs to be positive.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    /// Wall-clock cap needs to be non-zero.
    InvalidMaxWallTime { reason: &'static str },

    // ---- Step-size strategy ----
    /// A step-size policy parameter is out of range.
    InvalidStepParameter { name: &'static str, value: f64, reason: &'static str },

    /// Invalid step-size strategy name.
    InvalidLineSearch { name: String, reason: &'static str },

    /// Line-search failure surfaced outside a run (direct strategy calls).
    LineSearch(LineSearchError),

    // ---- Start point ----
    /// Start point length does not match the objective dimension.
    StartPointDimMismatch { expected: usize, found: usize },

    /// Start point entries need to be finite.
    NonFiniteStartPoint { index: usize, value: f64 },

    // ---- Cost function ----
    /// Objective returned a non-finite value inside the reference backend.
    NonFiniteCost { value: f64 },

    // ---- Wrapped module errors ----
    /// Wrapper for objective construction/analysis errors.
    Objective(ObjectiveError),

    /// Wrapper for generator and sweep configuration errors.
    Experiment(ExperimentError),

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter { text: String },
    /// Wrapper for argmin::NotImplemented
    NotImplemented { text: String },
    /// Wrapper for argmin::NotInitialized
    NotInitialized { text: String },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated { text: String },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound { text: String },
    /// Wrapper for argmin::PotentialBug
    PotentialBug { text: String },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError { text: String },
    /// Wrapper for other argmin::Error types
    BackendError { text: String },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- GdOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidMaxWallTime { reason } => {
                write!(f, "Invalid wall-clock cap: {reason}")
            }

            // ---- Step-size strategy ----
            OptError::InvalidStepParameter { name, value, reason } => {
                write!(f, "Invalid step-size parameter '{name}' = {value}: {reason}")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::LineSearch(err) => {
                write!(f, "Line search failed: {err}")
            }

            // ---- Start point ----
            OptError::StartPointDimMismatch { expected, found } => {
                write!(f, "Start point dimension mismatch: expected {expected}, found {found}")
            }
            OptError::NonFiniteStartPoint { index, value } => {
                write!(f, "Start point entry at index {index} is {value}, must be finite")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Wrapped module errors ----
            OptError::Objective(err) => write!(f, "{err}"),
            OptError::Experiment(err) => write!(f, "{err}"),

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

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Errors raised by our own adapter come back boxed; unwrap them first.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(err) => return err,
            Err(err) => err,
        };
        let original_err = match original_err.downcast::<ObjectiveError>() {
            Ok(err) => return OptError::Objective(err),
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

impl From<LineSearchError> for OptError {
    fn from(err: LineSearchError) -> Self {
        match err {
            LineSearchError::InvalidParameter { name, value, reason } => {
                OptError::InvalidStepParameter { name, value, reason }
            }
            LineSearchError::UnknownStrategy { name, reason } => {
                OptError::InvalidLineSearch { name, reason }
            }
            other => OptError::LineSearch(other),
        }
    }
}

impl From<ObjectiveError> for OptError {
    fn from(err: ObjectiveError) -> Self {
        OptError::Objective(err)
    }
}

impl From<ExperimentError> for OptError {
    fn from(err: ExperimentError) -> Self {
        match err {
            ExperimentError::Objective(inner) => OptError::Objective(inner),
            other => OptError::Experiment(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure line-search configuration errors map onto the dedicated
    // construction variants while runtime failures are wrapped verbatim.
    //
    // Given
    // -----
    // - An `InvalidParameter`, an `UnknownStrategy` and a `StepBelowFloor`.
    //
    // Expect
    // ------
    // - `InvalidStepParameter`, `InvalidLineSearch` and `LineSearch(..)`.
    fn line_search_errors_map_by_class() {
        // Arrange
        let invalid = LineSearchError::InvalidParameter {
            name: "c1",
            value: 2.0,
            reason: "Must lie strictly between 0 and 1.",
        };
        let unknown = LineSearchError::UnknownStrategy { name: "newton".to_string(), reason: "" };
        let floor = LineSearchError::StepBelowFloor { alpha: 1e-17, floor: 1e-16 };

        // Act
        let mapped_invalid = OptError::from(invalid);
        let mapped_unknown = OptError::from(unknown);
        let mapped_floor = OptError::from(floor.clone());

        // Assert
        assert!(matches!(
            mapped_invalid,
            OptError::InvalidStepParameter { name: "c1", value, .. } if value == 2.0
        ));
        assert!(matches!(
            mapped_unknown,
            OptError::InvalidLineSearch { ref name, .. } if name == "newton"
        ));
        assert_eq!(mapped_floor, OptError::LineSearch(floor));
    }

    #[test]
    // Purpose
    // -------
    // Check that objective errors nested inside experiment errors surface
    // as plain objective errors.
    fn nested_objective_errors_are_flattened() {
        // Arrange
        let nested = ExperimentError::Objective(ObjectiveError::EmptyMatrix);

        // Act
        let mapped = OptError::from(nested);

        // Assert
        assert_eq!(mapped, OptError::Objective(ObjectiveError::EmptyMatrix));
    }
}
