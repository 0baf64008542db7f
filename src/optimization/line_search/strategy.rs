//! Tagged-variant dispatch over the three step-size policies.
//!
//! [`StepStrategy`] is what configuration hands to the optimizer and the
//! experiment harness. It implements [`StepSizeStrategy`] by delegating to
//! the wrapped policy, so callers choose a policy at run construction
//! without generics.
//!
//! Parsing:
//! `StepStrategy` implements `FromStr` and accepts case-insensitive names
//! (`"constant"`, `"armijo"`, `"wolfe"`, plus the alias `"strongwolfe"`),
//! each mapped to the policy's default parameters. Unknown names return
//! [`LineSearchError::UnknownStrategy`].
use std::str::FromStr;

use serde::Serialize;

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::{
        armijo::ArmijoBacktracking,
        constant::ConstantStep,
        errors::{LineSearchError, LineSearchResult},
        traits::StepSizeStrategy,
        wolfe::StrongWolfe,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StepStrategy {
    Constant(ConstantStep),
    Armijo(ArmijoBacktracking),
    Wolfe(StrongWolfe),
}

impl StepStrategy {
    /// Fixed step `alpha`, validated.
    pub fn constant(alpha: f64) -> LineSearchResult<Self> {
        Ok(StepStrategy::Constant(ConstantStep::new(alpha)?))
    }

    /// Armijo backtracking with textbook defaults.
    pub fn armijo() -> Self {
        StepStrategy::Armijo(ArmijoBacktracking::default())
    }

    /// Strong Wolfe with textbook defaults.
    pub fn wolfe() -> Self {
        StepStrategy::Wolfe(StrongWolfe::default())
    }
}

impl Default for StepStrategy {
    fn default() -> Self {
        StepStrategy::wolfe()
    }
}

impl From<ConstantStep> for StepStrategy {
    fn from(step: ConstantStep) -> Self {
        StepStrategy::Constant(step)
    }
}

impl From<ArmijoBacktracking> for StepStrategy {
    fn from(policy: ArmijoBacktracking) -> Self {
        StepStrategy::Armijo(policy)
    }
}

impl From<StrongWolfe> for StepStrategy {
    fn from(policy: StrongWolfe) -> Self {
        StepStrategy::Wolfe(policy)
    }
}

impl FromStr for StepStrategy {
    type Err = LineSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "constant" => Ok(StepStrategy::Constant(ConstantStep::default())),
            "armijo" => Ok(StepStrategy::armijo()),
            "wolfe" | "strongwolfe" => Ok(StepStrategy::wolfe()),
            _ => Err(LineSearchError::UnknownStrategy {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Constant', 'Armijo' or 'Wolfe'.",
            }),
        }
    }
}

impl StepSizeStrategy for StepStrategy {
    fn name(&self) -> &'static str {
        match self {
            StepStrategy::Constant(s) => s.name(),
            StepStrategy::Armijo(s) => s.name(),
            StepStrategy::Wolfe(s) => s.name(),
        }
    }

    fn validate(&self) -> LineSearchResult<()> {
        match self {
            StepStrategy::Constant(s) => s.validate(),
            StepStrategy::Armijo(s) => s.validate(),
            StepStrategy::Wolfe(s) => s.validate(),
        }
    }

    fn select_step(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
    ) -> LineSearchResult<f64> {
        match self {
            StepStrategy::Constant(s) => s.select_step(objective, x, direction),
            StepStrategy::Armijo(s) => s.select_step(objective, x, direction),
            StepStrategy::Wolfe(s) => s.select_step(objective, x, direction),
        }
    }

    fn select_step_with_hint(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
        previous_step: Option<f64>,
    ) -> LineSearchResult<f64> {
        match self {
            StepStrategy::Constant(s) => {
                s.select_step_with_hint(objective, x, direction, previous_step)
            }
            StepStrategy::Armijo(s) => {
                s.select_step_with_hint(objective, x, direction, previous_step)
            }
            StepStrategy::Wolfe(s) => {
                s.select_step_with_hint(objective, x, direction, previous_step)
            }
        }
    }
}
