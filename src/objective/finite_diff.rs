//! objective::finite_diff — numerical gradient checks.
//!
//! Purpose
//! -------
//! Compare the analytic gradient `Ax − b` with a central finite-difference
//! approximation of `f`. The quadratic oracle is exact, so this is a
//! diagnostic for hand-assembled `(A, b)` pairs and a regression guard for
//! the gradient code path itself.
//!
//! Conventions
//! -----------
//! - Differences are taken by the `finitediff` crate on `ndarray` vectors.
//! - Deviations are reported as the maximum absolute component-wise
//!   difference, scaled by `max(1, ‖∇f(x)‖∞)`.
use finitediff::FiniteDiff;

use crate::objective::{
    errors::ObjectiveResult, quadratic::QuadraticObjective, types::Vector,
    validation::validate_point,
};

/// Default acceptance threshold for [`gradient_matches`].
pub const DEFAULT_GRADIENT_CHECK_TOL: f64 = 1e-5;

/// Central finite-difference gradient of the objective value at `x`.
///
/// # Errors
/// [`ObjectiveError::PointDimMismatch`](crate::objective::ObjectiveError::PointDimMismatch)
/// if `x.len()` differs from the objective dimension.
pub fn numerical_gradient(objective: &QuadraticObjective, x: &Vector) -> ObjectiveResult<Vector> {
    validate_point(x, objective.dim())?;
    let value = |p: &Vector| objective.value(p);
    Ok(x.central_diff(&value))
}

/// check_gradient — relative deviation between analytic and FD gradients.
///
/// Returns
/// -------
/// `ObjectiveResult<f64>`
///   `max_i |g_i − ĝ_i| / max(1, ‖g‖∞)` where `g` is the analytic gradient
///   and `ĝ` the central-difference one.
///
/// Errors
/// ------
/// - `ObjectiveError::PointDimMismatch` for a wrong-length point.
pub fn check_gradient(objective: &QuadraticObjective, x: &Vector) -> ObjectiveResult<f64> {
    let fd = numerical_gradient(objective, x)?;
    let analytic = objective.gradient(x);
    let scale = analytic.iter().fold(1.0_f64, |acc, g| acc.max(g.abs()));
    let deviation =
        analytic.iter().zip(fd.iter()).fold(0.0_f64, |acc, (g, h)| acc.max((g - h).abs()));
    Ok(deviation / scale)
}

/// `true` when [`check_gradient`] stays within `tol`.
pub fn gradient_matches(
    objective: &QuadraticObjective, x: &Vector, tol: f64,
) -> ObjectiveResult<bool> {
    Ok(check_gradient(objective, x)? <= tol)
}
