//! experiments::generator — seeded SPD matrices with a prescribed condition number.
//!
//! Purpose
//! -------
//! Build `A = QΛQᵀ` where `Q` is the orthogonal factor of a QR
//! decomposition of a standard-normal matrix and `Λ` holds eigenvalues
//! spread over `[1, κ]`, so `cond(A) = κ` up to rounding.
//!
//! Key behaviors
//! -------------
//! - The only source of randomness is the caller's RNG (or a `StdRng`
//!   seeded from the caller's seed); there is no global state.
//! - Eigenvalue endpoints are exactly `1` and `κ`; interior values follow
//!   [`EigenSpacing`].
//! - The result is symmetrised as `(A + Aᵀ)/2`, which is exactly
//!   symmetric in floating point.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 1` and `κ ≥ 1` finite; otherwise an [`ExperimentError`].
//! - For `n == 1` the single eigenvalue is `1`, so the matrix is `[1]`
//!   whatever `κ` is.
//! - Same `(n, κ, seed, spacing)` ⇒ bit-identical matrix.
use nalgebra::{DMatrix, DVector};
use rand::{Rng, distributions::Distribution};
use serde::Serialize;
use statrs::distribution::Normal;

use crate::{
    experiments::{
        errors::{ExperimentError, ExperimentResult},
        seeding::trial_rng,
    },
    objective::{Matrix, QuadraticObjective, Vector, linalg::from_dmatrix},
};

/// How eigenvalues are spread over `[1, κ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EigenSpacing {
    /// `λ_i = 1 + (κ − 1)·i/(n − 1)`.
    #[default]
    Linear,
    /// `λ_i = κ^{i/(n − 1)}`.
    Logarithmic,
}

impl EigenSpacing {
    /// Ascending eigenvalues for an `n × n` matrix with condition number `kappa`.
    pub fn eigenvalues(&self, n: usize, kappa: f64) -> Vec<f64> {
        if n == 1 {
            return vec![1.0];
        }
        let last = (n - 1) as f64;
        let mut values: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / last;
                match self {
                    EigenSpacing::Linear => 1.0 + (kappa - 1.0) * t,
                    EigenSpacing::Logarithmic => kappa.powf(t),
                }
            })
            .collect();
        values[0] = 1.0;
        values[n - 1] = kappa;
        values
    }
}

/// Linear term of a generated problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RhsPolicy {
    /// `b = 0`; the minimizer is the origin.
    #[default]
    Zero,
    /// `b = (1, …, 1)`.
    Ones,
    /// `b` with standard-normal entries drawn after the matrix.
    Random,
}

/// Seeded generator of symmetric positive-definite test matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatrixGenerator {
    pub spacing: EigenSpacing,
}

impl MatrixGenerator {
    pub fn new(spacing: EigenSpacing) -> Self {
        Self { spacing }
    }

    /// Generate an `n × n` SPD matrix with condition number `kappa`.
    ///
    /// # Errors
    /// - [`ExperimentError::InvalidDimension`] if `n == 0`.
    /// - [`ExperimentError::InvalidConditionNumber`] if `kappa < 1` or is
    ///   non-finite.
    pub fn generate(&self, n: usize, kappa: f64, seed: u64) -> ExperimentResult<Matrix> {
        self.generate_with_rng(n, kappa, &mut trial_rng(seed))
    }

    /// generate_with_rng — core construction from an explicit RNG.
    ///
    /// Draws `n²` standard normals, takes `Q` from their QR factorisation,
    /// and returns the symmetrised `QΛQᵀ`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self, n: usize, kappa: f64, rng: &mut R,
    ) -> ExperimentResult<Matrix> {
        verify_dimension(n)?;
        verify_condition_number(kappa)?;

        let normal = Normal::new(0.0, 1.0)?;
        let gaussian = DMatrix::from_fn(n, n, |_, _| normal.sample(rng));
        let q = gaussian.qr().q();
        let lambda = DVector::from_vec(self.spacing.eigenvalues(n, kappa));

        // QΛ scales column j of Q by λ_j.
        let mut q_lambda = q.clone();
        for (mut column, &l) in q_lambda.column_iter_mut().zip(lambda.iter()) {
            column *= l;
        }
        let a = q_lambda * q.transpose();
        let symmetric = (&a + a.transpose()) * 0.5;
        Ok(from_dmatrix(&symmetric))
    }

    /// Generate a full quadratic objective from a seed.
    ///
    /// The matrix is drawn first and, for [`RhsPolicy::Random`], `b` is drawn
    /// from the same stream afterwards.
    pub fn generate_problem(
        &self, n: usize, kappa: f64, seed: u64, rhs: RhsPolicy,
    ) -> ExperimentResult<QuadraticObjective> {
        self.generate_problem_with_rng(n, kappa, rhs, &mut trial_rng(seed))
    }

    pub fn generate_problem_with_rng<R: Rng + ?Sized>(
        &self, n: usize, kappa: f64, rhs: RhsPolicy, rng: &mut R,
    ) -> ExperimentResult<QuadraticObjective> {
        let a = self.generate_with_rng(n, kappa, rng)?;
        let b = match rhs {
            RhsPolicy::Zero => Vector::zeros(n),
            RhsPolicy::Ones => Vector::ones(n),
            RhsPolicy::Random => {
                let normal = Normal::new(0.0, 1.0)?;
                Vector::from_shape_fn(n, |_| normal.sample(rng))
            }
        };
        Ok(QuadraticObjective::new(a, b)?)
    }
}

// ---- Helper Methods ----

fn verify_dimension(n: usize) -> ExperimentResult<()> {
    if n == 0 {
        return Err(ExperimentError::InvalidDimension {
            n,
            reason: "Dimension must be at least one.",
        });
    }
    Ok(())
}

fn verify_condition_number(kappa: f64) -> ExperimentResult<()> {
    if !kappa.is_finite() {
        return Err(ExperimentError::InvalidConditionNumber {
            kappa,
            reason: "Condition number must be finite.",
        });
    }
    if kappa < 1.0 {
        return Err(ExperimentError::InvalidConditionNumber {
            kappa,
            reason: "Condition number must be at least one.",
        });
    }
    Ok(())
}
