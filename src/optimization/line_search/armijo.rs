//! line_search::armijo — backtracking under the sufficient-decrease rule.
//!
//! Purpose
//! -------
//! Start from a trial step and shrink it geometrically until
//! `f(x + α·d) ≤ f(x) + c1·α·∇f(x)ᵀd` holds.
//!
//! Key behaviors
//! -------------
//! - The first trial is `alpha0`, or `2·previous` when `warm_start` is set
//!   and the driver passes the previous accepted step.
//! - Each rejected trial is multiplied by `rho ∈ (0, 1)`.
//! - Trials whose objective value is non-finite are treated as rejected, so
//!   an overflowing first guess simply backtracks.
//! - The search fails with `StepBelowFloor` once `α < min_step`, and with
//!   `NotDescentDirection` up front if `∇f(x)ᵀd ≥ 0`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Any returned step satisfies the sufficient-decrease condition with the
//!   configured `c1`; no step below `min_step` is ever returned.
//! - The loop is bounded: at most `⌈log(min_step/α_start)/log(rho)⌉ + 1`
//!   trials.
use serde::Serialize;

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::{
        conditions::armijo_condition,
        errors::{LineSearchError, LineSearchResult},
        line::LineFunction,
        traits::StepSizeStrategy,
        validation::{verify_open_unit, verify_positive},
    },
};

/// Default sufficient-decrease constant.
pub const DEFAULT_C1: f64 = 1e-4;
/// Default shrink factor.
pub const DEFAULT_RHO: f64 = 0.5;
/// Default first trial step.
pub const DEFAULT_ALPHA0: f64 = 1.0;
/// Default floor below which backtracking gives up.
pub const DEFAULT_MIN_STEP: f64 = 1e-16;

/// Armijo backtracking parameters `(c1, ρ, α0)` plus search limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArmijoBacktracking {
    pub c1: f64,
    pub rho: f64,
    pub alpha0: f64,
    pub min_step: f64,
    pub warm_start: bool,
}

impl ArmijoBacktracking {
    /// Build a validated policy with the default floor and no warm start.
    ///
    /// # Errors
    /// `LineSearchError::InvalidParameter` unless `c1, rho ∈ (0, 1)` and
    /// `alpha0` is finite and positive.
    pub fn new(c1: f64, rho: f64, alpha0: f64) -> LineSearchResult<Self> {
        let policy = Self { c1, rho, alpha0, min_step: DEFAULT_MIN_STEP, warm_start: false };
        policy.validate()?;
        Ok(policy)
    }

    /// Replace the backtracking floor.
    pub fn with_min_step(mut self, min_step: f64) -> LineSearchResult<Self> {
        verify_positive("min_step", min_step)?;
        self.min_step = min_step;
        Ok(self)
    }

    /// Start each search at twice the previous accepted step when known.
    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }

    fn initial_step(&self, previous_step: Option<f64>) -> f64 {
        match previous_step {
            Some(prev) if self.warm_start && prev.is_finite() && prev > 0.0 => 2.0 * prev,
            _ => self.alpha0,
        }
    }

    /// backtrack — core search from an explicit starting step.
    ///
    /// Errors
    /// ------
    /// - `NotDescentDirection` if `φ'(0) ≥ 0` (or is non-finite).
    /// - `StepBelowFloor` if the step shrinks below `min_step`.
    pub fn backtrack(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector, start: f64,
    ) -> LineSearchResult<f64> {
        let line = LineFunction::new(objective, x, direction);
        let origin = line.origin();
        if !(origin.dphi < 0.0) {
            return Err(LineSearchError::NotDescentDirection { slope: origin.dphi });
        }

        let mut alpha = start;
        while alpha >= self.min_step {
            let phi_alpha = line.phi(alpha);
            if armijo_condition(origin.phi, origin.dphi, alpha, phi_alpha, self.c1) {
                return Ok(alpha);
            }
            alpha *= self.rho;
        }
        Err(LineSearchError::StepBelowFloor { alpha, floor: self.min_step })
    }
}

impl Default for ArmijoBacktracking {
    fn default() -> Self {
        Self {
            c1: DEFAULT_C1,
            rho: DEFAULT_RHO,
            alpha0: DEFAULT_ALPHA0,
            min_step: DEFAULT_MIN_STEP,
            warm_start: false,
        }
    }
}

impl StepSizeStrategy for ArmijoBacktracking {
    fn name(&self) -> &'static str {
        "armijo"
    }

    fn validate(&self) -> LineSearchResult<()> {
        verify_open_unit("c1", self.c1)?;
        verify_open_unit("rho", self.rho)?;
        verify_positive("alpha0", self.alpha0)?;
        verify_positive("min_step", self.min_step)
    }

    fn select_step(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
    ) -> LineSearchResult<f64> {
        self.backtrack(objective, x, direction, self.alpha0)
    }

    fn select_step_with_hint(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
        previous_step: Option<f64>,
    ) -> LineSearchResult<f64> {
        self.backtrack(objective, x, direction, self.initial_step(previous_step))
    }
}
