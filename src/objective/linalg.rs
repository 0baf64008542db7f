//! Bridges between `ndarray` storage and `nalgebra` decompositions.
//!
//! The crate stores everything as `ndarray` containers, but QR, Cholesky,
//! and symmetric eigendecompositions come from `nalgebra`. These helpers
//! copy data across; none of them alter values or symmetry.
use nalgebra::{DMatrix, DVector};

use crate::objective::types::{Matrix, Vector};

/// Copy an `ndarray` matrix into a freshly allocated `DMatrix`.
pub fn to_dmatrix(a: &Matrix) -> DMatrix<f64> {
    let (rows, cols) = a.dim();
    DMatrix::from_fn(rows, cols, |i, j| a[[i, j]])
}

/// Copy a `DMatrix` back into an `ndarray` matrix.
pub fn from_dmatrix(m: &DMatrix<f64>) -> Matrix {
    Matrix::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Copy an `ndarray` vector into a `DVector`.
pub fn to_dvector(v: &Vector) -> DVector<f64> {
    DVector::from_iterator(v.len(), v.iter().copied())
}

/// Copy a `DVector` back into an `ndarray` vector.
pub fn from_dvector(v: &DVector<f64>) -> Vector {
    v.iter().copied().collect()
}
