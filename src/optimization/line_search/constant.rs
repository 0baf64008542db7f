//! Fixed step length: the baseline policy with no search at all.
use serde::Serialize;

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::line_search::{
        errors::LineSearchResult, traits::StepSizeStrategy, validation::verify_positive,
    },
};

/// Default fixed step.
pub const DEFAULT_CONSTANT_STEP: f64 = 1.0;

/// Always returns the configured `alpha`.
///
/// Fixed-step descent on a quadratic is stable only for `α < 2 / λ_max(A)`;
/// larger steps make the iterates grow geometrically until they overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstantStep {
    pub alpha: f64,
}

impl ConstantStep {
    /// # Errors
    /// `LineSearchError::InvalidParameter` unless `alpha` is finite and positive.
    pub fn new(alpha: f64) -> LineSearchResult<Self> {
        let step = Self { alpha };
        step.validate()?;
        Ok(step)
    }
}

impl Default for ConstantStep {
    fn default() -> Self {
        Self { alpha: DEFAULT_CONSTANT_STEP }
    }
}

impl StepSizeStrategy for ConstantStep {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn validate(&self) -> LineSearchResult<()> {
        verify_positive("alpha", self.alpha)
    }

    fn select_step(
        &self, _objective: &QuadraticObjective, _x: &Vector, _direction: &Vector,
    ) -> LineSearchResult<f64> {
        Ok(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::line_search::errors::LineSearchError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Confirm the constant policy ignores the point and direction, and that
    // non-positive steps are rejected up front.
    //
    // Given
    // -----
    // - `ConstantStep::new(0.25)` queried at two unrelated rays.
    // - `ConstantStep::new(0.0)`.
    //
    // Expect
    // ------
    // - 0.25 both times; the zero step is `InvalidParameter`.
    fn constant_step_is_fixed_and_validated() {
        // Arrange
        let objective = QuadraticObjective::homogeneous(array![[3.0, 0.0], [0.0, 1.0]]).unwrap();
        let step = ConstantStep::new(0.25).unwrap();

        // Act
        let a = step.select_step(&objective, &array![1.0, 1.0], &array![-3.0, -1.0]).unwrap();
        let b = step.select_step(&objective, &array![-5.0, 2.0], &array![15.0, -2.0]).unwrap();
        let zero = ConstantStep::new(0.0);

        // Assert
        assert_eq!(a, 0.25);
        assert_eq!(b, 0.25);
        assert!(matches!(zero, Err(LineSearchError::InvalidParameter { name: "alpha", .. })));
    }
}
