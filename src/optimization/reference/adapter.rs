//! Adapter that exposes a [`QuadraticObjective`] as an `argmin` problem.
//!
//! The quadratic is already a minimization problem, so cost and gradient
//! are passed through unchanged. Evaluations are dimension-checked and a
//! non-finite cost is reported as an error, which stops the solver.
use argmin::core::{CostFunction, Error, Gradient};

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::errors::OptError,
};

/// Bridges a [`QuadraticObjective`] to `argmin`'s `CostFunction` and `Gradient`.
#[derive(Debug, Clone, Copy)]
pub struct ArgminQuadratic<'a> {
    pub objective: &'a QuadraticObjective,
}

impl<'a> ArgminQuadratic<'a> {
    pub fn new(objective: &'a QuadraticObjective) -> Self {
        Self { objective }
    }
}

impl CostFunction for ArgminQuadratic<'_> {
    type Param = Vector;
    type Output = f64;

    /// Evaluate `f(x) = ½xᵀAx − bᵀx`.
    ///
    /// # Errors
    /// - `ObjectiveError::PointDimMismatch` for a wrongly sized `x`.
    /// - `OptError::NonFiniteCost` if the value overflows.
    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let value = self.objective.checked_value(x)?;
        if !value.is_finite() {
            return Err((OptError::NonFiniteCost { value }).into());
        }
        Ok(value)
    }
}

impl Gradient for ArgminQuadratic<'_> {
    type Param = Vector;
    type Gradient = Vector;

    /// Evaluate `∇f(x) = Ax − b`.
    fn gradient(&self, x: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(self.objective.checked_gradient(x)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::errors::ObjectiveError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Confirm the adapter passes values through and reports bad points.
    //
    // Given
    // -----
    // - A = [[2,0],[0,4]], b = [2,0], x = [1,1].
    //
    // Expect
    // ------
    // - cost = ½(2 + 4) − 2 = 1, gradient = [0, 4].
    // - A length-3 point fails with `PointDimMismatch`.
    fn adapter_forwards_cost_and_gradient() {
        // Arrange
        let objective =
            QuadraticObjective::new(array![[2.0, 0.0], [0.0, 4.0]], array![2.0, 0.0]).unwrap();
        let problem = ArgminQuadratic::new(&objective);

        // Act
        let cost = problem.cost(&array![1.0, 1.0]).unwrap();
        let grad = problem.gradient(&array![1.0, 1.0]).unwrap();
        let bad = problem.cost(&array![1.0, 1.0, 1.0]).unwrap_err();

        // Assert
        assert_eq!(cost, 1.0);
        assert_eq!(grad, array![0.0, 4.0]);
        assert_eq!(
            OptError::from(bad),
            OptError::Objective(ObjectiveError::PointDimMismatch { expected: 2, found: 3 })
        );
    }
}
