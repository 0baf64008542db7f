//! objective::quadratic — the convex quadratic `f(x) = ½xᵀAx − bᵀx`.
//!
//! Purpose
//! -------
//! Hold a validated `(A, b)` pair and expose the value/gradient oracle
//! consumed by every step-size strategy and by the gradient-descent driver,
//! together with a handful of closed-form diagnostics (exact minimizer,
//! spectrum, condition number) used by tests and experiments.
//!
//! Invariants & assumptions
//! ------------------------
//! - `A` is square, finite, and symmetric within
//!   [`SYMMETRY_TOL`](crate::objective::types::SYMMETRY_TOL); `b` is finite
//!   with `b.len() == A.nrows()`.
//! - Positive-definiteness is **not** checked at construction. A run on an
//!   indefinite `A` is expected to diverge and is reported as such by the
//!   optimizer; only the closed-form helpers that need `A ≻ 0` fail.
//! - The objective is immutable once built and is shared by reference; it
//!   holds no interior mutability.
//!
//! Conventions
//! -----------
//! - `value` and `gradient` are pure and assume `x.len() == dim()`; callers
//!   that accept external points validate them first (the optimizer does so
//!   for the start point).
use nalgebra::SymmetricEigen;
use ndarray::linalg::general_mat_vec_mul;
use serde::Serialize;

use crate::objective::{
    errors::{ObjectiveError, ObjectiveResult},
    linalg::{from_dvector, to_dmatrix, to_dvector},
    types::{Matrix, Vector},
    validation::{
        validate_finite_matrix, validate_finite_vector, validate_point, validate_shape,
        validate_symmetric,
    },
};

/// Quadratic objective `f(x) = ½xᵀAx − bᵀx` with gradient `∇f(x) = Ax − b`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadraticObjective {
    a: Matrix,
    b: Vector,
}

impl QuadraticObjective {
    /// Construct a validated quadratic objective.
    ///
    /// # Rules
    /// - `a` must be non-empty, square, finite, and symmetric.
    /// - `b` must be finite with `b.len() == a.nrows()`.
    ///
    /// # Errors
    /// Any [`ObjectiveError`] raised by the shape, finiteness, or symmetry
    /// validators, in that order.
    pub fn new(a: Matrix, b: Vector) -> ObjectiveResult<Self> {
        validate_shape(&a, &b)?;
        validate_finite_matrix(&a)?;
        validate_finite_vector(&b)?;
        validate_symmetric(&a)?;
        Ok(Self { a, b })
    }

    /// Homogeneous objective `½xᵀAx` (`b = 0`), minimized at the origin
    /// when `A ≻ 0`.
    pub fn homogeneous(a: Matrix) -> ObjectiveResult<Self> {
        let b = Vector::zeros(a.nrows());
        Self::new(a, b)
    }

    /// Problem dimension `n`.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// The quadratic term `A`.
    pub fn matrix(&self) -> &Matrix {
        &self.a
    }

    /// The linear term `b`.
    pub fn rhs(&self) -> &Vector {
        &self.b
    }

    /// Objective value `½xᵀAx − bᵀx`.
    pub fn value(&self, x: &Vector) -> f64 {
        0.5 * x.dot(&self.a.dot(x)) - self.b.dot(x)
    }

    /// Gradient `Ax − b`.
    pub fn gradient(&self, x: &Vector) -> Vector {
        let mut grad = Vector::zeros(self.dim());
        self.gradient_into(x, &mut grad);
        grad
    }

    /// Write the gradient `Ax − b` into a preallocated buffer.
    ///
    /// `out` must have length `dim()`.
    pub fn gradient_into(&self, x: &Vector, out: &mut Vector) {
        out.assign(&self.b);
        general_mat_vec_mul(1.0, &self.a, x, -1.0, out);
    }

    /// Directional derivative `∇f(x)ᵀd`.
    pub fn directional_derivative(&self, x: &Vector, d: &Vector) -> f64 {
        self.gradient(x).dot(d)
    }

    /// Hessian-vector product `Av` (the Hessian of a quadratic is constant).
    pub fn hessian_vector(&self, v: &Vector) -> Vector {
        self.a.dot(v)
    }

    /// Evaluate `value` after checking the point's dimension.
    ///
    /// # Errors
    /// [`ObjectiveError::PointDimMismatch`] if `x.len() != dim()`.
    pub fn checked_value(&self, x: &Vector) -> ObjectiveResult<f64> {
        validate_point(x, self.dim())?;
        Ok(self.value(x))
    }

    /// Evaluate `gradient` after checking the point's dimension.
    ///
    /// # Errors
    /// [`ObjectiveError::PointDimMismatch`] if `x.len() != dim()`.
    pub fn checked_gradient(&self, x: &Vector) -> ObjectiveResult<Vector> {
        validate_point(x, self.dim())?;
        Ok(self.gradient(x))
    }

    /// exact_minimizer — closed-form solution `x* = A⁻¹b`.
    ///
    /// Purpose
    /// -------
    /// Solve `Ax = b` through a Cholesky factorisation. Used by tests and
    /// experiment tooling to measure the distance of a final iterate from the
    /// true optimum.
    ///
    /// Errors
    /// ------
    /// - [`ObjectiveError::NotPositiveDefinite`]
    ///   Returned when the Cholesky factorisation fails, i.e. `A` is not
    ///   numerically positive-definite and no unique minimizer exists.
    pub fn exact_minimizer(&self) -> ObjectiveResult<Vector> {
        let chol = to_dmatrix(&self.a).cholesky().ok_or(ObjectiveError::NotPositiveDefinite {
            reason: "Cholesky factorisation failed.",
        })?;
        Ok(from_dvector(&chol.solve(&to_dvector(&self.b))))
    }

    /// Eigenvalues of `A` in ascending order.
    pub fn eigenvalues(&self) -> Vector {
        let eigen = SymmetricEigen::new(to_dmatrix(&self.a));
        let mut values: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
        values.sort_by(f64::total_cmp);
        Vector::from(values)
    }

    /// Spectral condition number `λ_max / λ_min`.
    ///
    /// # Errors
    /// [`ObjectiveError::NotPositiveDefinite`] if the smallest eigenvalue is
    /// not strictly positive.
    pub fn condition_number(&self) -> ObjectiveResult<f64> {
        let eigenvalues = self.eigenvalues();
        let lambda_min = eigenvalues[0];
        let lambda_max = eigenvalues[eigenvalues.len() - 1];
        if lambda_min <= 0.0 {
            return Err(ObjectiveError::NotPositiveDefinite {
                reason: "Smallest eigenvalue is not strictly positive.",
            });
        }
        Ok(lambda_max / lambda_min)
    }

    /// Largest eigenvalue of `A`; fixed-step descent is stable only for
    /// `α < 2 / λ_max`.
    pub fn lipschitz_constant(&self) -> f64 {
        let eigenvalues = self.eigenvalues();
        eigenvalues[eigenvalues.len() - 1]
    }
}
