//! Errors for step-size selection.
//!
//! [`LineSearchError`] has two families:
//! - **Runtime failures** (`NotDescentDirection`, `StepBelowFloor`,
//!   `CurvatureNotSatisfied`, `Unbounded`, `ExpansionExhausted`): a strategy
//!   could not find an acceptable step within its bounded search. The
//!   gradient-descent driver absorbs these into a diverged run status.
//! - **Configuration errors** (`InvalidParameter`, `UnknownStrategy`):
//!   malformed strategy parameters, surfaced before any run starts.
use serde::Serialize;

/// Result alias for step-size selection.
pub type LineSearchResult<T> = Result<T, LineSearchError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineSearchError {
    // ---- Runtime failures ----
    /// `∇f(x)ᵀd ≥ 0`: the direction does not descend.
    NotDescentDirection { slope: f64 },

    /// Backtracking shrank the step below its floor without sufficient decrease.
    StepBelowFloor { alpha: f64, floor: f64 },

    /// Zoom exhausted its refinement budget (or collapsed its bracket)
    /// without satisfying the curvature condition.
    CurvatureNotSatisfied { refinements: usize, lo: f64, hi: f64 },

    /// Expansion reached `alpha_max` while the objective kept decreasing.
    Unbounded { alpha: f64 },

    /// Expansion budget exhausted before a bracket was found.
    ExpansionExhausted { expansions: usize, alpha: f64 },

    // ---- Configuration ----
    /// A strategy parameter is out of range.
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    /// Strategy name could not be parsed.
    UnknownStrategy { name: String, reason: &'static str },
}

impl LineSearchError {
    /// `true` for configuration errors that must be reported before a run.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LineSearchError::InvalidParameter { .. } | LineSearchError::UnknownStrategy { .. }
        )
    }
}

impl std::error::Error for LineSearchError {}

impl std::fmt::Display for LineSearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Runtime failures ----
            LineSearchError::NotDescentDirection { slope } => {
                write!(f, "Search direction is not a descent direction: slope {slope} >= 0")
            }
            LineSearchError::StepBelowFloor { alpha, floor } => {
                write!(
                    f,
                    "Backtracking step {alpha} fell below floor {floor} without sufficient decrease"
                )
            }
            LineSearchError::CurvatureNotSatisfied { refinements, lo, hi } => {
                write!(
                    f,
                    "Curvature condition not satisfied after {refinements} refinements \
                     (bracket [{lo}, {hi}])"
                )
            }
            LineSearchError::Unbounded { alpha } => {
                write!(f, "Objective appears unbounded along direction: step reached {alpha}")
            }
            LineSearchError::ExpansionExhausted { expansions, alpha } => {
                write!(f, "No bracket found after {expansions} expansions (last step {alpha})")
            }

            // ---- Configuration ----
            LineSearchError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid line-search parameter {name} = {value}: {reason}")
            }
            LineSearchError::UnknownStrategy { name, reason } => {
                write!(f, "Unknown step-size strategy '{name}': {reason}")
            }
        }
    }
}
