//! line_search::wolfe — strong Wolfe line search by bracketing and zoom.
//!
//! Purpose
//! -------
//! Find a step `α` satisfying both
//! - sufficient decrease: `φ(α) ≤ φ(0) + c1·α·φ'(0)`, and
//! - strong curvature: `|φ'(α)| ≤ c2·|φ'(0)|`,
//!
//! with `0 < c1 < c2 < 1`. On a strictly convex quadratic `φ` is itself a
//! parabola, so any step found by the zoom phase is the exact line
//! minimizer.
//!
//! Key behaviors
//! -------------
//! - **Bracketing.** Starting at `alpha0`, the trial is doubled while it
//!   keeps sufficient decrease and `φ'(α) < 0`. A trial that satisfies both
//!   conditions is returned immediately. A bracket `[lo, hi]` is formed as
//!   soon as sufficient decrease fails, the value stops decreasing relative
//!   to the previous trial, or the slope turns non-negative.
//! - **Zoom.** Each trial minimizes the parabola fitted to `φ(lo)`,
//!   `φ'(lo)` and `φ(hi)`, and falls back to the midpoint when that
//!   minimizer sits too close to an end of the bracket. `lo` always keeps
//!   sufficient decrease and the lowest value seen; `hi` is moved so that
//!   the bracket always contains a step satisfying both conditions. The
//!   loop stops when curvature holds, when the bracket can no longer be
//!   split, or after `max_refinements` trials.
//! - **Fallback.** With `fallback_to_armijo`, any runtime failure is retried
//!   once with Armijo backtracking from `alpha0` using the same `c1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - A returned step satisfies both strong Wolfe conditions unless it came
//!   from the Armijo fallback.
//! - Expansion stops at `alpha_max`; reaching it while still descending
//!   reports `Unbounded`, which is what an indefinite `A` produces.
//! - Both phases are bounded (`max_expansions`, `max_refinements`).
use serde::Serialize;

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::{
        armijo::{ArmijoBacktracking, DEFAULT_ALPHA0, DEFAULT_C1, DEFAULT_MIN_STEP, DEFAULT_RHO},
        conditions::{armijo_condition, curvature_condition},
        errors::{LineSearchError, LineSearchResult},
        line::{LineFunction, LineSample},
        traits::StepSizeStrategy,
        validation::{verify_budget, verify_positive, verify_wolfe_constants},
    },
};

/// Default curvature constant.
pub const DEFAULT_C2: f64 = 0.9;
/// Default upper bound on any trial step.
pub const DEFAULT_ALPHA_MAX: f64 = 1e10;
/// Default number of doublings allowed while bracketing.
pub const DEFAULT_MAX_EXPANSIONS: usize = 60;
/// Default number of trials allowed while zooming.
pub const DEFAULT_MAX_REFINEMENTS: usize = 100;
/// Fraction of the bracket width an interpolated trial must keep from
/// either end.
const INTERPOLATION_MARGIN: f64 = 0.1;

/// Strong Wolfe parameters `(c1, c2, α_max)` plus search limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrongWolfe {
    pub c1: f64,
    pub c2: f64,
    pub alpha0: f64,
    pub alpha_max: f64,
    pub max_expansions: usize,
    pub max_refinements: usize,
    pub fallback_to_armijo: bool,
}

impl StrongWolfe {
    /// Build a validated policy with default search limits.
    ///
    /// # Errors
    /// `LineSearchError::InvalidParameter` unless `0 < c1 < c2 < 1` and
    /// `0 < alpha0 ≤ alpha_max`.
    pub fn new(c1: f64, c2: f64, alpha_max: f64) -> LineSearchResult<Self> {
        let policy = Self { c1, c2, alpha_max, ..Self::default() };
        policy.validate()?;
        Ok(policy)
    }

    /// Replace the bracketing and zoom budgets.
    pub fn with_budgets(
        mut self, max_expansions: usize, max_refinements: usize,
    ) -> LineSearchResult<Self> {
        verify_budget("max_expansions", max_expansions)?;
        verify_budget("max_refinements", max_refinements)?;
        self.max_expansions = max_expansions;
        self.max_refinements = max_refinements;
        Ok(self)
    }

    /// Retry failed searches with Armijo backtracking.
    pub fn with_armijo_fallback(mut self, fallback: bool) -> Self {
        self.fallback_to_armijo = fallback;
        self
    }

    /// search — bracketing phase followed by zoom.
    ///
    /// Parameters
    /// ----------
    /// - `line`: `&LineFunction`
    ///   Restriction of the objective to the search ray.
    ///
    /// Returns
    /// -------
    /// `LineSearchResult<f64>`
    ///   A step satisfying both strong Wolfe conditions.
    ///
    /// Errors
    /// ------
    /// - `NotDescentDirection` if `φ'(0) ≥ 0`.
    /// - `Unbounded` if expansion hits `alpha_max` while still descending.
    /// - `ExpansionExhausted` if no bracket forms within `max_expansions`.
    /// - `CurvatureNotSatisfied` from the zoom phase.
    pub fn search(&self, line: &LineFunction<'_>) -> LineSearchResult<f64> {
        let origin = line.origin();
        if !(origin.dphi < 0.0) {
            return Err(LineSearchError::NotDescentDirection { slope: origin.dphi });
        }

        let mut prev = origin;
        let mut alpha = self.alpha0.min(self.alpha_max);
        for expansion in 0..self.max_expansions {
            let trial = line.sample(alpha);
            let decreased = armijo_condition(origin.phi, origin.dphi, alpha, trial.phi, self.c1);
            if !decreased || (expansion > 0 && trial.phi >= prev.phi) {
                return self.zoom(line, &origin, prev, trial);
            }
            if curvature_condition(origin.dphi, trial.dphi, self.c2) {
                return Ok(alpha);
            }
            if trial.dphi >= 0.0 {
                return self.zoom(line, &origin, trial, prev);
            }
            if alpha >= self.alpha_max {
                return Err(LineSearchError::Unbounded { alpha });
            }
            prev = trial;
            alpha = (2.0 * alpha).min(self.alpha_max);
        }
        Err(LineSearchError::ExpansionExhausted { expansions: self.max_expansions, alpha })
    }

    /// zoom — shrink `[lo, hi]` until the curvature condition holds.
    ///
    /// `lo` satisfies sufficient decrease and has the lowest value seen so
    /// far; `hi` need not be the larger step. Each trial comes from
    /// [`interpolate`], so on a quadratic the first interior trial is the
    /// exact line minimizer.
    fn zoom(
        &self, line: &LineFunction<'_>, origin: &LineSample, mut lo: LineSample,
        mut hi: LineSample,
    ) -> LineSearchResult<f64> {
        let mut refinements = 0;
        while refinements < self.max_refinements {
            let trial_alpha = interpolate(&lo, &hi);
            if trial_alpha == lo.alpha || trial_alpha == hi.alpha {
                break;
            }
            refinements += 1;
            let trial = line.sample(trial_alpha);
            let decreased =
                armijo_condition(origin.phi, origin.dphi, trial_alpha, trial.phi, self.c1);
            if !decreased || trial.phi >= lo.phi {
                hi = trial;
                continue;
            }
            if curvature_condition(origin.dphi, trial.dphi, self.c2) {
                return Ok(trial_alpha);
            }
            if trial.dphi * (hi.alpha - lo.alpha) >= 0.0 {
                hi = lo;
            }
            lo = trial;
        }
        Err(LineSearchError::CurvatureNotSatisfied { refinements, lo: lo.alpha, hi: hi.alpha })
    }

    fn fallback(&self) -> ArmijoBacktracking {
        ArmijoBacktracking {
            c1: self.c1,
            rho: DEFAULT_RHO,
            alpha0: self.alpha0,
            min_step: DEFAULT_MIN_STEP,
            warm_start: false,
        }
    }
}

/// Minimizer of the parabola through `φ(lo)`, `φ'(lo)` and `φ(hi)`.
///
/// Falls back to the midpoint when the parabola is not convex or its
/// minimizer lies within `INTERPOLATION_MARGIN·|hi − lo|` of either end.
fn interpolate(lo: &LineSample, hi: &LineSample) -> f64 {
    let midpoint = 0.5 * (lo.alpha + hi.alpha);
    let width = hi.alpha - lo.alpha;
    let curvature = 2.0 * (hi.phi - lo.phi - lo.dphi * width);
    if !(curvature > 0.0) {
        return midpoint;
    }
    let candidate = lo.alpha - lo.dphi * width * width / curvature;
    let margin = INTERPOLATION_MARGIN * width.abs();
    let (left, right) = (lo.alpha.min(hi.alpha), lo.alpha.max(hi.alpha));
    if candidate.is_finite() && candidate >= left + margin && candidate <= right - margin {
        candidate
    } else {
        midpoint
    }
}

impl Default for StrongWolfe {
    fn default() -> Self {
        Self {
            c1: DEFAULT_C1,
            c2: DEFAULT_C2,
            alpha0: DEFAULT_ALPHA0,
            alpha_max: DEFAULT_ALPHA_MAX,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_refinements: DEFAULT_MAX_REFINEMENTS,
            fallback_to_armijo: false,
        }
    }
}

impl StepSizeStrategy for StrongWolfe {
    fn name(&self) -> &'static str {
        "wolfe"
    }

    fn validate(&self) -> LineSearchResult<()> {
        verify_wolfe_constants(self.c1, self.c2)?;
        verify_positive("alpha0", self.alpha0)?;
        verify_positive("alpha_max", self.alpha_max)?;
        if self.alpha0 > self.alpha_max {
            return Err(LineSearchError::InvalidParameter {
                name: "alpha0",
                value: self.alpha0,
                reason: "Initial step must not exceed alpha_max.",
            });
        }
        verify_budget("max_expansions", self.max_expansions)?;
        verify_budget("max_refinements", self.max_refinements)
    }

    fn select_step(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
    ) -> LineSearchResult<f64> {
        let line = LineFunction::new(objective, x, direction);
        match self.search(&line) {
            Ok(alpha) => Ok(alpha),
            Err(LineSearchError::NotDescentDirection { slope }) => {
                Err(LineSearchError::NotDescentDirection { slope })
            }
            Err(err) if self.fallback_to_armijo => {
                tracing::debug!(error = %err, "strong Wolfe search failed; falling back to Armijo");
                self.fallback().select_step(objective, x, direction)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::line_search::conditions::satisfies_strong_wolfe;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Immediate acceptance, expansion, and zoom paths on 1-D quadratics
    //   whose line functions are known in closed form.
    // - Failure paths: ascent direction, unbounded objective, starved zoom.
    // - The Armijo fallback.
    //
    // They intentionally DO NOT cover:
    // - Whole-run convergence (see `gradient_descent` and the integration
    //   tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the first trial is returned when it already satisfies both
    // conditions.
    //
    // Given
    // -----
    // - f(x) = ½x² (A = [1]), x = 2, d = −2: the exact step is α* = 1.
    //
    // Expect
    // ------
    // - α = 1 is returned without expansion or zoom.
    fn wolfe_accepts_exact_first_trial() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[1.0]]).unwrap();
        let policy = StrongWolfe::default();

        // Act
        let alpha = policy.select_step(&objective, &array![2.0], &array![-2.0]).unwrap();

        // Assert
        assert_relative_eq!(alpha, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the expansion phase grows a too-short first trial.
    //
    // Given
    // -----
    // - f(x) = ½·0.01·x² (A = [0.01]), x = 1, d = −0.01: α* = 100.
    //
    // Expect
    // ------
    // - The returned step satisfies both conditions and lies within the
    //   curvature window [0.1·α*, 1.9·α*].
    fn wolfe_expands_short_initial_step() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[0.01]]).unwrap();
        let x = array![1.0];
        let d = array![-0.01];
        let policy = StrongWolfe::default();

        // Act
        let alpha = policy.select_step(&objective, &x, &d).unwrap();

        // Assert
        assert!((10.0..=190.0).contains(&alpha), "alpha = {alpha}");
        assert!(satisfies_strong_wolfe(&objective, &x, &d, alpha, policy.c1, policy.c2));
    }

    #[test]
    // Purpose
    // -------
    // Verify the zoom phase recovers from an overshooting first trial.
    //
    // Given
    // -----
    // - f(x) = 50x² (A = [100]), x = 1, d = −100: α* = 0.01, so α0 = 1
    //   violates sufficient decrease.
    // - A tight curvature constant c2 = 0.1.
    //
    // Expect
    // ------
    // - The returned step satisfies both conditions with c2 = 0.1.
    fn wolfe_zooms_into_overshooting_bracket() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[100.0]]).unwrap();
        let x = array![1.0];
        let d = array![-100.0];
        let policy = StrongWolfe::new(1e-4, 0.1, DEFAULT_ALPHA_MAX).unwrap();

        // Act
        let alpha = policy.select_step(&objective, &x, &d).unwrap();

        // Assert
        assert!(satisfies_strong_wolfe(&objective, &x, &d, alpha, 1e-4, 0.1));
        assert_relative_eq!(alpha, 0.01, max_relative = 0.1);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a direction of negative curvature is reported as unbounded.
    //
    // Given
    // -----
    // - f(x) = −½x² (A = [−1]), x = 1, d = −∇f(1) = 1: φ(α) = −½(1 + α)²
    //   decreases without bound.
    // - A small `alpha_max` so the expansion reaches it quickly.
    //
    // Expect
    // ------
    // - `Unbounded { alpha: alpha_max }`.
    fn wolfe_reports_unbounded_objective() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[-1.0]]).unwrap();
        let policy = StrongWolfe::new(1e-4, 0.9, 64.0).unwrap();

        // Act
        let result = policy.select_step(&objective, &array![1.0], &array![1.0]);

        // Assert
        assert_eq!(result, Err(LineSearchError::Unbounded { alpha: 64.0 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a starved zoom fails, and that the Armijo fallback rescues it.
    //
    // Given
    // -----
    // - f(x) = 50x², x = 1, d = −100 with c2 = 1e-3 and a single
    //   refinement, so the zoom cannot land in the narrow curvature window.
    //
    // Expect
    // ------
    // - Without fallback: `CurvatureNotSatisfied`.
    // - With fallback: an Armijo step (0.015625) is returned.
    fn wolfe_starved_zoom_fails_unless_fallback_enabled() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[100.0]]).unwrap();
        let x = array![1.0];
        let d = array![-100.0];
        let strict = StrongWolfe::new(1e-4, 1e-3, DEFAULT_ALPHA_MAX)
            .unwrap()
            .with_budgets(DEFAULT_MAX_EXPANSIONS, 1)
            .unwrap();
        let rescued = strict.with_armijo_fallback(true);

        // Act
        let strict_res = strict.select_step(&objective, &x, &d);
        let rescued_res = rescued.select_step(&objective, &x, &d);

        // Assert
        assert!(matches!(
            strict_res,
            Err(LineSearchError::CurvatureNotSatisfied { refinements: 1, .. })
        ));
        assert_relative_eq!(rescued_res.unwrap(), 0.015625);
    }

    #[test]
    // Purpose
    // -------
    // Verify the zoom phase lands on the exact line minimizer rather than
    // the first acceptable midpoint.
    //
    // Given
    // -----
    // - f(x) = 1.25x² (A = [2.5]), x = 1, d = −2.5: φ(α) = 1.25(1 − 2.5α)²
    //   with α* = 0.4. α0 = 1 overshoots; the midpoint 0.5 would already
    //   satisfy both conditions with c2 = 0.9.
    //
    // Expect
    // ------
    // - α = 0.4 to rounding, and the gradient along d vanishes there.
    fn wolfe_zoom_interpolates_exact_line_minimizer() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[2.5]]).unwrap();
        let x = array![1.0];
        let d = array![-2.5];
        let policy = StrongWolfe::default();

        // Act
        let alpha = policy.select_step(&objective, &x, &d).unwrap();

        // Assert
        assert_relative_eq!(alpha, 0.4, max_relative = 1e-12);
        let moved = &x + &(alpha * &d);
        assert!(objective.directional_derivative(&moved, &d).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a bracket that cannot be split reports the refinements it
    // actually performed, not the budget.
    //
    // Given
    // -----
    // - f(x) = ½x², x = 1, d = −1, and a bracket [0.5, 0.5 + ulp] whose
    //   interpolant and midpoint both round onto an endpoint.
    //
    // Expect
    // ------
    // - `CurvatureNotSatisfied { refinements: 0 }` with the bracket intact.
    fn wolfe_collapsed_bracket_reports_zero_refinements() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[1.0]]).unwrap();
        let (x, d) = (array![1.0], array![-1.0]);
        let line = LineFunction::new(&objective, &x, &d);
        let next = f64::from_bits(0.5f64.to_bits() + 1);
        let policy = StrongWolfe::default();

        // Act
        let result = policy.zoom(&line, &line.origin(), line.sample(0.5), line.sample(next));

        // Assert
        assert_eq!(
            result,
            Err(LineSearchError::CurvatureNotSatisfied { refinements: 0, lo: 0.5, hi: next })
        );
    }

    #[test]
    // Purpose
    // -------
    // Check the interpolation safeguard on hand-built brackets.
    //
    // Given
    // -----
    // - φ(α) = (α − 0.3)² sampled at 0 and 1: minimizer 0.3 is interior.
    // - φ(α) = (α − 0.05)² sampled at 0 and 1: minimizer 0.05 is inside the
    //   10% margin.
    // - A concave fit (φ(hi) below the tangent line at lo).
    //
    // Expect
    // ------
    // - 0.3, then the midpoint 0.5 for both fallback cases.
    fn interpolate_respects_margin_and_convexity() {
        // Arrange
        let sample = |alpha: f64, center: f64| LineSample {
            alpha,
            phi: (alpha - center).powi(2),
            dphi: 2.0 * (alpha - center),
        };
        let concave_hi = LineSample { alpha: 1.0, phi: -10.0, dphi: -20.0 };

        // Act
        let interior = interpolate(&sample(0.0, 0.3), &sample(1.0, 0.3));
        let near_end = interpolate(&sample(0.0, 0.05), &sample(1.0, 0.05));
        let concave = interpolate(&sample(0.0, 0.3), &concave_hi);

        // Assert
        assert_relative_eq!(interior, 0.3, max_relative = 1e-12);
        assert_eq!(near_end, 0.5);
        assert_eq!(concave, 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Ensure misordered constants are rejected at construction.
    //
    // Given
    // -----
    // - c1 = 0.9, c2 = 0.1.
    //
    // Expect
    // ------
    // - `InvalidParameter` naming `c2`.
    fn wolfe_new_rejects_misordered_constants() {
        // Act
        let result = StrongWolfe::new(0.9, 0.1, DEFAULT_ALPHA_MAX);

        // Assert
        assert!(matches!(result, Err(LineSearchError::InvalidParameter { name: "c2", .. })));
    }
}
