//! The step-size capability interface.
//!
//! - [`StepSizeStrategy`]: one required operation, `select_step`, mapping
//!   `(objective, x, direction)` to a scalar step or a
//!   [`LineSearchError`].
//!
//! Strategies hold only their policy parameters. They never reference the
//! optimizer they serve, and the same instance can serve any number of
//! independent runs.
use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::errors::LineSearchResult,
};

/// Capability interface for choosing a step length along a direction.
///
/// Required:
/// - `name() -> &'static str`: short label used in logs and records.
/// - `validate() -> LineSearchResult<()>`: reject malformed parameters with
///   `LineSearchError::InvalidParameter`. Called when an optimizer is
///   built, before any run.
/// - `select_step(objective, x, direction)`: return `α > 0` satisfying the
///   strategy's acceptance rule, or a runtime `LineSearchError`.
///
/// Optional:
/// - `select_step_with_hint(.., previous_step)`: same contract, but may use
///   the previous accepted step as a starting guess. The default ignores
///   the hint.
pub trait StepSizeStrategy {
    fn name(&self) -> &'static str;

    fn validate(&self) -> LineSearchResult<()>;

    fn select_step(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
    ) -> LineSearchResult<f64>;

    fn select_step_with_hint(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
        _previous_step: Option<f64>,
    ) -> LineSearchResult<f64> {
        self.select_step(objective, x, direction)
    }
}

impl<T: StepSizeStrategy + ?Sized> StepSizeStrategy for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self) -> LineSearchResult<()> {
        (**self).validate()
    }

    fn select_step(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
    ) -> LineSearchResult<f64> {
        (**self).select_step(objective, x, direction)
    }

    fn select_step_with_hint(
        &self, objective: &QuadraticObjective, x: &Vector, direction: &Vector,
        previous_step: Option<f64>,
    ) -> LineSearchResult<f64> {
        (**self).select_step_with_hint(objective, x, direction, previous_step)
    }
}
