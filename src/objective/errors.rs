//! Errors raised while constructing or analysing a quadratic objective.
//!
//! [`ObjectiveError`] covers malformed `(A, b)` pairs rejected at
//! construction time as well as the linear-algebra helpers that need a
//! positive-definite `A` (exact minimizer). Construction errors are fatal
//! to that construction and are never retried.
//!
//! ## Conventions
//! - **Indices are 0-based** `(row, col)` pairs.
//! - Shapes are reported as `(rows, cols)`.

/// Result alias for objective construction and analysis.
pub type ObjectiveResult<T> = Result<T, ObjectiveError>;

/// Error type for malformed quadratic objectives.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveError {
    // ---- Shape ----
    /// `A` has no rows or no columns.
    EmptyMatrix,

    /// `A` must be square.
    NotSquare { rows: usize, cols: usize },

    /// `b` must have as many entries as `A` has rows.
    DimensionMismatch { expected: usize, found: usize },

    // ---- Entries ----
    /// An entry of `A` is NaN/±inf.
    NonFiniteMatrixEntry { row: usize, col: usize, value: f64 },

    /// An entry of `b` is NaN/±inf.
    NonFiniteRhsEntry { index: usize, value: f64 },

    /// `A` is not symmetric within [`SYMMETRY_TOL`](crate::objective::types::SYMMETRY_TOL).
    NotSymmetric { row: usize, col: usize, upper: f64, lower: f64 },

    // ---- Evaluation ----
    /// A point handed to the objective has the wrong length.
    PointDimMismatch { expected: usize, found: usize },

    /// `A` is not positive-definite, so the requested quantity does not exist.
    NotPositiveDefinite { reason: &'static str },
}

impl std::error::Error for ObjectiveError {}

impl std::fmt::Display for ObjectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            ObjectiveError::EmptyMatrix => {
                write!(f, "Quadratic matrix A is empty")
            }
            ObjectiveError::NotSquare { rows, cols } => {
                write!(f, "Quadratic matrix A must be square, found shape ({rows}, {cols})")
            }
            ObjectiveError::DimensionMismatch { expected, found } => {
                write!(f, "Linear term b has length {found}, expected {expected}")
            }

            // ---- Entries ----
            ObjectiveError::NonFiniteMatrixEntry { row, col, value } => {
                write!(f, "Non-finite entry in A at ({row}, {col}): {value}")
            }
            ObjectiveError::NonFiniteRhsEntry { index, value } => {
                write!(f, "Non-finite entry in b at index {index}: {value}")
            }
            ObjectiveError::NotSymmetric { row, col, upper, lower } => {
                write!(
                    f,
                    "Quadratic matrix A is not symmetric: A[{row}, {col}] = {upper}, \
                     A[{col}, {row}] = {lower}"
                )
            }

            // ---- Evaluation ----
            ObjectiveError::PointDimMismatch { expected, found } => {
                write!(f, "Point dimension mismatch: expected {expected}, found {found}")
            }
            ObjectiveError::NotPositiveDefinite { reason } => {
                write!(f, "Quadratic matrix A is not positive-definite: {reason}")
            }
        }
    }
}
