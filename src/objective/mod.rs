//! objective — the quadratic model `f(x) = ½xᵀAx − bᵀx`.
//!
//! Purpose
//! -------
//! Provide the leaf component of the engine: a validated, immutable
//! quadratic objective with value and gradient oracles, plus diagnostics
//! (closed-form minimizer, spectrum, finite-difference gradient checks).
//!
//! Key behaviors
//! -------------
//! - [`QuadraticObjective::new`] rejects empty, rectangular, non-finite, or
//!   asymmetric `A`, and `b` of the wrong length, with [`ObjectiveError`].
//! - `value` and `gradient` are pure functions of the point.
//! - Closed-form helpers use `nalgebra` decompositions through the
//!   [`linalg`] bridge.
//!
//! Invariants & assumptions
//! ------------------------
//! - Positive-definiteness is the caller's responsibility (the matrix
//!   generator guarantees it). Indefinite objectives are valid inputs whose
//!   runs are expected to diverge.
//!
//! Downstream usage
//! ----------------
//! - Step-size strategies and the gradient-descent driver consume
//!   `&QuadraticObjective` only; nothing mutates it after construction.
//! - The experiment harness builds objectives from generated matrices.

pub mod errors;
pub mod finite_diff;
pub mod linalg;
pub mod quadratic;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ObjectiveError, ObjectiveResult};
pub use self::quadratic::QuadraticObjective;
pub use self::types::{Matrix, Vector};

pub mod prelude {
    pub use super::errors::{ObjectiveError, ObjectiveResult};
    pub use super::quadratic::QuadraticObjective;
    pub use super::types::{Matrix, Vector};
}
