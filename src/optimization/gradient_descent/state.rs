//! gradient_descent::state — the run's termination state machine.
//!
//! Purpose
//! -------
//! Keep every termination decision of a run in one pure transition function
//! so it can be read and tested in isolation from the numeric loop.
//!
//! Key behaviors
//! -------------
//! - The driver reports what it just observed as an [`Observation`] and
//!   asks [`next_state`] whether the run continues.
//! - Three observations occur per loop turn, in order: the gradient at the
//!   current iterate, the strategy's step, and the updated iterate.
//! - Any state other than [`RunState::Running`] is terminal.
//!
//! Invariants & assumptions
//! ------------------------
//! - Convergence is tested before the iteration cap, so a run whose last
//!   allowed update lands inside the tolerance reports `Converged`.
//! - Non-finite quantities always win: a NaN gradient norm never compares
//!   below the threshold and is mapped to `Diverged` first.
//! - `next_state` has no side effects and depends only on its arguments.
use std::time::Duration;

use crate::optimization::{
    gradient_descent::{
        options::GdOptions,
        types::{DivergenceCause, RunStatus},
    },
    line_search::errors::LineSearchError,
};

/// Explicit run state. `Running` is the only non-terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    Running,
    Converged,
    MaxIters,
    Diverged(DivergenceCause),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }

    /// Terminal status, `None` while running.
    pub fn status(&self) -> Option<RunStatus> {
        match self {
            RunState::Running => None,
            RunState::Converged => Some(RunStatus::Converged),
            RunState::MaxIters => Some(RunStatus::MaxIters),
            RunState::Diverged(_) => Some(RunStatus::Diverged),
        }
    }

    /// Split a terminal state into its status and divergence cause.
    pub fn into_outcome(self) -> Option<(RunStatus, Option<DivergenceCause>)> {
        match self {
            RunState::Running => None,
            RunState::Converged => Some((RunStatus::Converged, None)),
            RunState::MaxIters => Some((RunStatus::MaxIters, None)),
            RunState::Diverged(cause) => Some((RunStatus::Diverged, Some(cause))),
        }
    }
}

/// What the driver saw since the previous transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Gradient evaluated at iterate `iteration`.
    Gradient { iteration: usize, grad_norm: f64, initial_grad_norm: f64, elapsed: Duration },
    /// The strategy returned a step.
    StepAccepted { alpha: f64 },
    /// The strategy failed to find a step.
    StepRejected(LineSearchError),
    /// `x ← x + α·d` was applied; `finite` covers the new point, its value
    /// and its gradient norm.
    Moved { finite: bool },
}

/// Transition function of the run state machine.
///
/// Gradient observations:
/// 1. non-finite `grad_norm` → `Diverged(NonFiniteGradient)`;
/// 2. `grad_norm ≤ options.threshold(initial_grad_norm)` → `Converged`;
/// 3. `iteration ≥ max_iter` or `elapsed ≥ max_wall_time` → `MaxIters`.
///
/// Step observations: a rejection → `Diverged(LineSearch(err))`; a
/// non-finite or non-positive `alpha` → `Diverged(NonFiniteStep)`.
///
/// Move observations: a non-finite point → `Diverged(NonFiniteIterate)`.
///
/// Everything else keeps the run `Running`.
pub fn next_state(observation: &Observation, options: &GdOptions) -> RunState {
    match observation {
        Observation::Gradient { iteration, grad_norm, initial_grad_norm, elapsed } => {
            if !grad_norm.is_finite() {
                return RunState::Diverged(DivergenceCause::NonFiniteGradient);
            }
            if *grad_norm <= options.threshold(*initial_grad_norm) {
                return RunState::Converged;
            }
            if *iteration >= options.max_iter {
                return RunState::MaxIters;
            }
            match options.max_wall_time {
                Some(limit) if *elapsed >= limit => RunState::MaxIters,
                _ => RunState::Running,
            }
        }
        Observation::StepAccepted { alpha } => {
            if alpha.is_finite() && *alpha > 0.0 {
                RunState::Running
            } else {
                RunState::Diverged(DivergenceCause::NonFiniteStep)
            }
        }
        Observation::StepRejected(err) => {
            RunState::Diverged(DivergenceCause::LineSearch(err.clone()))
        }
        Observation::Moved { finite } => {
            if *finite {
                RunState::Running
            } else {
                RunState::Diverged(DivergenceCause::NonFiniteIterate)
            }
        }
    }
}
