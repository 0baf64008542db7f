//! line_search::conditions — acceptance tests for a candidate step.
//!
//! Purpose
//! -------
//! Express the Armijo (sufficient-decrease) and strong-Wolfe (curvature)
//! conditions once, so the strategies and any external audit of a
//! trajectory use the same arithmetic.
//!
//! Conventions
//! -----------
//! - `phi0 = f(x)`, `dphi0 = ∇f(x)ᵀd` (negative for a descent direction).
//! - A non-finite trial value never satisfies sufficient decrease.
use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::line::LineFunction,
};

/// Sufficient decrease: `φ(α) ≤ φ(0) + c1·α·φ'(0)`.
pub fn armijo_condition(phi0: f64, dphi0: f64, alpha: f64, phi_alpha: f64, c1: f64) -> bool {
    let rhs = phi0 + c1 * alpha * dphi0;
    phi_alpha.is_finite() && rhs.is_finite() && phi_alpha <= rhs
}

/// Strong curvature: `|φ'(α)| ≤ c2·|φ'(0)|`.
pub fn curvature_condition(dphi0: f64, dphi_alpha: f64, c2: f64) -> bool {
    dphi_alpha.is_finite() && dphi_alpha.abs() <= c2 * dphi0.abs()
}

/// Check the Armijo condition for step `alpha` from `x` along `direction`.
pub fn satisfies_armijo(
    objective: &QuadraticObjective, x: &Vector, direction: &Vector, alpha: f64, c1: f64,
) -> bool {
    let line = LineFunction::new(objective, x, direction);
    let origin = line.origin();
    armijo_condition(origin.phi, origin.dphi, alpha, line.phi(alpha), c1)
}

/// Check both strong Wolfe conditions for step `alpha`.
pub fn satisfies_strong_wolfe(
    objective: &QuadraticObjective, x: &Vector, direction: &Vector, alpha: f64, c1: f64, c2: f64,
) -> bool {
    let line = LineFunction::new(objective, x, direction);
    let origin = line.origin();
    let trial = line.sample(alpha);
    armijo_condition(origin.phi, origin.dphi, alpha, trial.phi, c1)
        && curvature_condition(origin.dphi, trial.dphi, c2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The scalar Armijo and curvature predicates on a 1-D quadratic whose
    //   line function is known in closed form.
    //
    // They intentionally DO NOT cover:
    // - Step search itself (see the strategy modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the acceptance window of both conditions on f(x) = x².
    //
    // Given
    // -----
    // - A = [2], b = [0], x = 1, d = −∇f(1) = −2.
    // - φ(α) = (1 − 2α)², φ'(α) = −4(1 − 2α); exact step α* = 0.5.
    //
    // Expect
    // ------
    // - α = 0.5 satisfies both conditions.
    // - α = 1.0 returns to φ = 1 and fails sufficient decrease.
    // - α = 0.01 passes Armijo but fails curvature for c2 = 0.9.
    fn conditions_match_closed_form_window() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[2.0]]).unwrap();
        let x = array![1.0];
        let d = array![-2.0];

        // Act
        let exact = satisfies_strong_wolfe(&objective, &x, &d, 0.5, 1e-4, 0.9);
        let overshoot = satisfies_armijo(&objective, &x, &d, 1.0, 1e-4);
        let short_armijo = satisfies_armijo(&objective, &x, &d, 0.01, 1e-4);
        let short_wolfe = satisfies_strong_wolfe(&objective, &x, &d, 0.01, 1e-4, 0.9);

        // Assert
        assert!(exact);
        assert!(!overshoot);
        assert!(short_armijo);
        assert!(!short_wolfe);
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite trial values never count as a decrease.
    //
    // Given
    // -----
    // - φ(α) = NaN and φ(α) = −∞.
    //
    // Expect
    // ------
    // - `armijo_condition` is false for NaN; −∞ is rejected as well because
    //   the comparison requires a finite value.
    fn armijo_condition_rejects_non_finite_trial_values() {
        // Act
        let nan = armijo_condition(1.0, -1.0, 0.5, f64::NAN, 1e-4);
        let neg_inf = armijo_condition(1.0, -1.0, 0.5, f64::NEG_INFINITY, 1e-4);

        // Assert
        assert!(!nan);
        assert!(!neg_inf);
    }
}
