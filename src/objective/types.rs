//! objective::types — canonical numeric aliases.
//!
//! Every vector and matrix in the crate is an `ndarray` container over
//! `f64`. Other modules import these aliases instead of naming `ndarray`
//! generics directly, so the storage type can change in one place.
use ndarray::{Array1, Array2};

/// Point, gradient, or search direction in `Rⁿ`.
pub type Vector = Array1<f64>;

/// Dense `n × n` matrix (the `A` of `f(x) = ½xᵀAx − bᵀx`).
pub type Matrix = Array2<f64>;

/// Relative tolerance used when checking `A` for symmetry.
///
/// Entries are compared as `|a_ij − a_ji| ≤ SYMMETRY_TOL · max(1, |a_ij|, |a_ji|)`.
pub const SYMMETRY_TOL: f64 = 1e-10;
