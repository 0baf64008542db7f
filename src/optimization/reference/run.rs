//! Execution helper that runs argmin's steepest descent on a quadratic and
//! returns a crate-friendly [`ReferenceOutcome`].
use argmin::{
    core::{Executor, State, TerminationStatus},
    solver::{gradientdescent::SteepestDescent, linesearch::MoreThuenteLineSearch},
};
use serde::Serialize;

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::{
        errors::{OptError, OptResult},
        reference::adapter::ArgminQuadratic,
    },
};

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Vector, Vector, f64>;

/// Steepest descent wired to the More–Thuente line search.
pub type ReferenceSolver = SteepestDescent<MoreThuenteLS>;

/// Result of a reference run.
///
/// - `x`: best point found by argmin.
/// - `value`: `f(x)`.
/// - `iterations`: solver iterations performed.
/// - `grad_norm`: `‖∇f(x)‖₂` recomputed at `x`.
/// - `status`: argmin's termination status, formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceOutcome {
    pub x: Vector,
    pub value: f64,
    pub iterations: u64,
    pub grad_norm: f64,
    pub status: String,
}

/// Run argmin's `SteepestDescent` + More–Thuente from `x0` for at most
/// `max_iter` iterations.
///
/// Used to cross-check the hand-written strategies: both should approach
/// the same minimizer on a positive-definite quadratic.
///
/// # Errors
/// - [`OptError::StartPointDimMismatch`] / [`OptError::NonFiniteStartPoint`]
///   for an unusable `x0`; [`OptError::InvalidMaxIter`] for `max_iter == 0`.
/// - Any argmin runtime error (line-search failure, non-finite cost) via
///   `From<argmin::core::Error>`.
pub fn reference_minimize(
    objective: &QuadraticObjective, x0: &Vector, max_iter: u64,
) -> OptResult<ReferenceOutcome> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter: 0,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    if x0.len() != objective.dim() {
        return Err(OptError::StartPointDimMismatch { expected: objective.dim(), found: x0.len() });
    }
    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(OptError::NonFiniteStartPoint { index, value });
    }

    let problem = ArgminQuadratic::new(objective);
    let solver: ReferenceSolver = SteepestDescent::new(MoreThuenteLineSearch::new());
    let param = x0.clone();
    let mut result = Executor::new(problem, solver)
        .configure(|state| state.param(param).max_iters(max_iter))
        .run()?
        .state()
        .clone();

    let iterations = result.get_iter();
    let status = match result.get_termination_status() {
        TerminationStatus::NotTerminated => "Not terminated".to_string(),
        other => format!("{other:?}"),
    };
    let x = result.take_best_param().ok_or(OptError::NotInitialized {
        text: "argmin returned no best parameter.".to_string(),
    })?;
    let grad = objective.gradient(&x);
    Ok(ReferenceOutcome {
        value: objective.value(&x),
        grad_norm: grad.dot(&grad).sqrt(),
        x,
        iterations,
        status,
    })
}
