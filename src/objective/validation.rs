//! Validation helpers for quadratic objectives.
//!
//! This module centralizes the checks run by
//! [`QuadraticObjective::new`](crate::objective::QuadraticObjective::new):
//!
//! - **Shape checks**: [`validate_shape`] enforces a non-empty square `A`
//!   and a matching `b`.
//! - **Finiteness**: [`validate_finite_matrix`], [`validate_finite_vector`]
//!   reject NaN/±inf entries.
//! - **Symmetry**: [`validate_symmetric`] compares mirrored entries using a
//!   relative tolerance.
//! - **Point checks**: [`validate_point`] guards evaluation helpers that
//!   accept caller-supplied vectors.
//!
//! Each helper reports the first offending entry only.
use crate::objective::{
    errors::{ObjectiveError, ObjectiveResult},
    types::{Matrix, SYMMETRY_TOL, Vector},
};

/// Validate that `a` is a non-empty square matrix and `b` matches it.
///
/// # Errors
/// - [`ObjectiveError::EmptyMatrix`] if `a` has zero rows or columns.
/// - [`ObjectiveError::NotSquare`] if `a` is rectangular.
/// - [`ObjectiveError::DimensionMismatch`] if `b.len() != a.nrows()`.
pub fn validate_shape(a: &Matrix, b: &Vector) -> ObjectiveResult<()> {
    let (rows, cols) = a.dim();
    if rows == 0 || cols == 0 {
        return Err(ObjectiveError::EmptyMatrix);
    }
    if rows != cols {
        return Err(ObjectiveError::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(ObjectiveError::DimensionMismatch { expected: rows, found: b.len() });
    }
    Ok(())
}

/// Validate that every entry of `a` is finite.
///
/// # Errors
/// Returns [`ObjectiveError::NonFiniteMatrixEntry`] for the first NaN/±inf entry.
pub fn validate_finite_matrix(a: &Matrix) -> ObjectiveResult<()> {
    for ((row, col), &value) in a.indexed_iter() {
        if !value.is_finite() {
            return Err(ObjectiveError::NonFiniteMatrixEntry { row, col, value });
        }
    }
    Ok(())
}

/// Validate that every entry of `b` is finite.
///
/// # Errors
/// Returns [`ObjectiveError::NonFiniteRhsEntry`] for the first NaN/±inf entry.
pub fn validate_finite_vector(b: &Vector) -> ObjectiveResult<()> {
    for (index, &value) in b.iter().enumerate() {
        if !value.is_finite() {
            return Err(ObjectiveError::NonFiniteRhsEntry { index, value });
        }
    }
    Ok(())
}

/// Validate that `a` is symmetric within [`SYMMETRY_TOL`].
///
/// Only the strict upper triangle is visited; each entry is compared with
/// its mirror using a tolerance scaled by `max(1, |a_ij|, |a_ji|)`, so large
/// entries are not rejected for rounding noise.
///
/// # Errors
/// Returns [`ObjectiveError::NotSymmetric`] for the first asymmetric pair.
pub fn validate_symmetric(a: &Matrix) -> ObjectiveResult<()> {
    let n = a.nrows();
    for row in 0..n {
        for col in (row + 1)..n {
            let upper = a[[row, col]];
            let lower = a[[col, row]];
            let scale = 1.0_f64.max(upper.abs()).max(lower.abs());
            if (upper - lower).abs() > SYMMETRY_TOL * scale {
                return Err(ObjectiveError::NotSymmetric { row, col, upper, lower });
            }
        }
    }
    Ok(())
}

/// Validate that a caller-supplied point has dimension `dim`.
///
/// # Errors
/// Returns [`ObjectiveError::PointDimMismatch`] on a length mismatch.
pub fn validate_point(x: &Vector, dim: usize) -> ObjectiveResult<()> {
    if x.len() != dim {
        return Err(ObjectiveError::PointDimMismatch { expected: dim, found: x.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Shape, finiteness, and symmetry checks on small hand-built inputs.
    //
    // They intentionally DO NOT cover:
    // - Construction of `QuadraticObjective`, which is tested next to the
    //   type itself.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure rectangular matrices are rejected with their shape.
    //
    // Given
    // -----
    // - A 2×3 matrix and a length-2 vector.
    //
    // Expect
    // ------
    // - `ObjectiveError::NotSquare { rows: 2, cols: 3 }`.
    fn validate_shape_rejects_rectangular_matrix() {
        // Arrange
        let a = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let b = array![0.0, 0.0];

        // Act
        let result = validate_shape(&a, &b);

        // Assert
        assert_eq!(result, Err(ObjectiveError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure symmetry is judged with a relative tolerance.
    //
    // Given
    // -----
    // - A large-magnitude matrix whose off-diagonal entries differ by
    //   rounding noise.
    // - A small matrix whose off-diagonal entries differ materially.
    //
    // Expect
    // ------
    // - The first passes, the second reports the offending pair.
    fn validate_symmetric_uses_relative_tolerance() {
        // Arrange
        let noisy = array![[1e6, 3e6], [3e6 * (1.0 + 1e-13), 2e6]];
        let skewed = array![[1.0, 2.0], [2.1, 5.0]];

        // Act
        let noisy_res = validate_symmetric(&noisy);
        let skewed_res = validate_symmetric(&skewed);

        // Assert
        assert!(noisy_res.is_ok());
        assert_eq!(
            skewed_res,
            Err(ObjectiveError::NotSymmetric { row: 0, col: 1, upper: 2.0, lower: 2.1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite entries are located by index.
    //
    // Given
    // -----
    // - A matrix with NaN at (1, 0) and a vector with +inf at index 1.
    //
    // Expect
    // ------
    // - Both validators report the first offending position.
    fn finiteness_validators_report_first_offending_entry() {
        // Arrange
        let a = array![[1.0, 0.0], [f64::NAN, 1.0]];
        let b = array![0.0, f64::INFINITY];

        // Act
        let a_res = validate_finite_matrix(&a);
        let b_res = validate_finite_vector(&b);

        // Assert
        assert!(matches!(
            a_res,
            Err(ObjectiveError::NonFiniteMatrixEntry { row: 1, col: 0, .. })
        ));
        assert!(matches!(b_res, Err(ObjectiveError::NonFiniteRhsEntry { index: 1, .. })));
    }
}
