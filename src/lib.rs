//! quad_descent — gradient-descent experiments on convex quadratics.
//!
//! Purpose
//! -------
//! Study how steepest descent behaves as a function of conditioning. The
//! crate minimizes `f(x) = ½xᵀAx − bᵀx` for symmetric `A` with a choice of
//! step-size strategy, records every iterate, and runs seeded sweeps over
//! prescribed condition numbers `κ`.
//!
//! Key behaviors
//! -------------
//! - `objective`: the validated [`QuadraticObjective`] with value, gradient
//!   and closed-form diagnostics.
//! - `optimization`: Constant, Armijo and strong Wolfe step sizes, the
//!   [`GradientDescent`] driver with its terminal-state machine, and an
//!   argmin-backed reference solver.
//! - `experiments`: seeded SPD matrix generation and the
//!   [`ExperimentHarness`] that turns a [`SweepSpec`] into a
//!   [`SweepReport`].
//! - `logging`: optional `tracing-subscriber` setup (`obs_tracing`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration mistakes are returned as `Err` before any iteration;
//!   numerical failure inside a run is a `Diverged` outcome.
//! - Everything is single-threaded and deterministic given the seeds.
//!
//! Conventions
//! -----------
//! - Vectors and matrices are `ndarray::Array1<f64>` / `Array2<f64>`;
//!   `nalgebra` is used internally for QR, Cholesky and eigenvalues.
//! - Result types derive `serde::Serialize` for export to plotting tools.
//!
//! Downstream usage
//! ----------------
//! ```ignore
//! use quad_descent::prelude::*;
//!
//! let harness = ExperimentHarness::new(StepStrategy::wolfe(), GdOptions::default())?;
//! let spec = SweepSpec::new(vec![1.0, 10.0, 100.0], 20, 5)?.with_base_seed(7);
//! let report = harness.run(&spec)?;
//! for summary in report.summaries() {
//!     println!("κ = {}: {} iterations", summary.condition_number, summary.mean_iterations);
//! }
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; end-to-end sweep scenarios and
//!   property tests on line-search conditions live under `tests/`.

pub mod experiments;
pub mod logging;
pub mod objective;
pub mod optimization;

pub use crate::experiments::{ExperimentHarness, SweepReport, SweepSpec};
pub use crate::objective::QuadraticObjective;
pub use crate::optimization::gradient_descent::GradientDescent;

pub mod prelude {
    pub use crate::experiments::prelude::*;
    pub use crate::objective::prelude::*;
    pub use crate::optimization::prelude::*;
}
