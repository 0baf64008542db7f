//! gradient_descent::types — iterates, trajectories and run outcomes.
//!
//! Purpose
//! -------
//! Define the values a run hands back to its caller: the per-iteration
//! [`Iterate`] record, the append-only [`Trajectory`], the terminal
//! [`RunStatus`] with an optional [`DivergenceCause`], and the
//! [`RunResult`] bundling all of them.
//!
//! Invariants & assumptions
//! ------------------------
//! - A trajectory always starts with the start point (`index == 0`,
//!   `step == None`) and indices increase by one.
//! - Only the driver appends to a trajectory; callers receive it by value
//!   and can only read it.
//! - `RunResult.cause` is `Some` exactly when `status == Diverged`.
//!
//! Conventions
//! -----------
//! - All types derive `Serialize` so external plotting or reporting tools
//!   can consume them directly.
use std::time::Duration;

use serde::Serialize;

use crate::{objective::Vector, optimization::line_search::errors::LineSearchError};

/// One point of a run.
///
/// - `index`: iteration number `k` (0 for the start point).
/// - `x`: the iterate `x_k`.
/// - `value`: `f(x_k)`.
/// - `grad_norm`: `‖∇f(x_k)‖₂`.
/// - `step`: the step `α` that produced `x_k`, `None` for the start point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iterate {
    pub index: usize,
    pub x: Vector,
    pub value: f64,
    pub grad_norm: f64,
    pub step: Option<f64>,
}

impl Iterate {
    /// `true` when the point, value and gradient norm are all finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.grad_norm.is_finite() && self.x.iter().all(|v| v.is_finite())
    }
}

/// Ordered, append-only sequence of iterates owned by one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory {
    iterates: Vec<Iterate>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { iterates: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, iterate: Iterate) {
        self.iterates.push(iterate);
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Iterate> {
        self.iterates.iter()
    }

    pub fn as_slice(&self) -> &[Iterate] {
        &self.iterates
    }

    pub fn first(&self) -> Option<&Iterate> {
        self.iterates.first()
    }

    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }

    /// Points `x_0, x_1, …` in order.
    pub fn points(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.iterates.iter().map(|it| &it.x)
    }

    /// Objective values `f(x_0), f(x_1), …` in order.
    pub fn values(&self) -> Vec<f64> {
        self.iterates.iter().map(|it| it.value).collect()
    }

    /// Accepted steps `α_1, α_2, …` in order.
    pub fn steps(&self) -> Vec<f64> {
        self.iterates.iter().filter_map(|it| it.step).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Iterate;
    type IntoIter = std::slice::Iter<'a, Iterate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.iter()
    }
}

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunStatus {
    Converged,
    MaxIters,
    Diverged,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Converged => write!(f, "CONVERGED"),
            RunStatus::MaxIters => write!(f, "MAX_ITERS"),
            RunStatus::Diverged => write!(f, "DIVERGED"),
        }
    }
}

/// Why a run ended in [`RunStatus::Diverged`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DivergenceCause {
    /// The step-size strategy could not produce an acceptable step.
    LineSearch(LineSearchError),
    /// The updated iterate, its value or its gradient norm is NaN/±inf.
    NonFiniteIterate,
    /// The gradient norm at the start point is NaN/±inf.
    NonFiniteGradient,
    /// The strategy returned a NaN/±inf or non-positive step.
    NonFiniteStep,
}

impl std::fmt::Display for DivergenceCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivergenceCause::LineSearch(err) => write!(f, "line search failed: {err}"),
            DivergenceCause::NonFiniteIterate => write!(f, "iterate became non-finite"),
            DivergenceCause::NonFiniteGradient => write!(f, "gradient became non-finite"),
            DivergenceCause::NonFiniteStep => write!(f, "strategy returned an unusable step"),
        }
    }
}

/// Outcome of one gradient-descent run, produced exactly once.
///
/// - `status` / `cause`: terminal status and, for divergence, its cause.
/// - `x`: final iterate (possibly non-finite when diverged).
/// - `iterations`: number of updates performed.
/// - `trajectory`: every iterate including the start point.
/// - `final_value` / `final_grad_norm`: `f` and `‖∇f‖` at `x`.
/// - `elapsed`: wall-clock duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub cause: Option<DivergenceCause>,
    pub x: Vector,
    pub iterations: usize,
    pub trajectory: Trajectory,
    pub final_value: f64,
    pub final_grad_norm: f64,
    pub elapsed: Duration,
}

impl RunResult {
    pub fn converged(&self) -> bool {
        self.status == RunStatus::Converged
    }

    pub fn diverged(&self) -> bool {
        self.status == RunStatus::Diverged
    }
}
