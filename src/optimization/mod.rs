//! optimization — step-size strategies, the descent driver, and its error surface.
//!
//! Purpose
//! -------
//! Minimize a [`QuadraticObjective`] by steepest descent and report how the
//! run ended. Step sizes come from a pluggable strategy family; an
//! argmin-backed solver is kept alongside as an independent reference.
//!
//! Key behaviors
//! -------------
//! - `line_search`: the `StepSizeStrategy` capability and its Constant,
//!   Armijo and strong Wolfe implementations.
//! - `gradient_descent`: the driver, its options and the
//!   `RUNNING → {CONVERGED, MAX_ITERS, DIVERGED}` state machine.
//! - `reference`: steepest descent with a More–Thuente line search from
//!   `argmin`, for cross-checks.
//! - `errors`: one enum ([`OptError`]) and alias ([`OptResult`]) for every
//!   configuration or backend failure.
//!
//! Invariants & assumptions
//! ------------------------
//! - Invalid configuration is an `Err` before any iteration runs.
//! - Numerical trouble during a run (NaN/±inf, failed line search) is a
//!   terminal `Diverged` status, never an `Err` and never a panic.
//!
//! Conventions
//! -----------
//! - Vectors and matrices are the `ndarray` aliases from
//!   [`crate::objective`].
//! - Progress is reported through `tracing` events; nothing here installs a
//!   subscriber.
//!
//! Downstream usage
//! ----------------
//! - Most callers want `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover local behavior; end-to-end runs on
//!   generated problems live in the crate's `tests/` directory.
//!
//! [`QuadraticObjective`]: crate::objective::QuadraticObjective

pub mod errors;
pub mod gradient_descent;
pub mod line_search;
pub mod reference;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use quad_descent::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::gradient_descent::prelude::*;
    pub use super::line_search::prelude::*;
    pub use super::reference::{ReferenceOutcome, reference_minimize};
}

pub use self::errors::{OptError, OptResult};
