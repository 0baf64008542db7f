//! reference — argmin-backed steepest descent used as a cross-check.
//!
//! Purpose
//! -------
//! Provide an independent implementation of steepest descent with a
//! More–Thuente line search, so results of the hand-written strategies can
//! be compared against a mature library on the same quadratic.
//!
//! Key behaviors
//! -------------
//! - [`ArgminQuadratic`] exposes a [`QuadraticObjective`] through argmin's
//!   `CostFunction`/`Gradient` traits.
//! - [`reference_minimize`] runs the solver for a fixed iteration budget and
//!   converts argmin's state into a [`ReferenceOutcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The reference backend has no gradient-norm stopping rule; callers pick
//!   a modest iteration budget. Once the gradient vanishes the line search
//!   can fail, which surfaces as an `OptError`.
//!
//! [`QuadraticObjective`]: crate::objective::QuadraticObjective

pub mod adapter;
pub mod run;

pub use self::adapter::ArgminQuadratic;
pub use self::run::{ReferenceOutcome, reference_minimize};
