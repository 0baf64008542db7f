//! gradient_descent — steepest descent with an explicit termination state machine.
//!
//! Purpose
//! -------
//! Run `x_{k+1} = x_k − α_k ∇f(x_k)` on a [`QuadraticObjective`] with any
//! [`StepSizeStrategy`], record the full trajectory, and report exactly one
//! terminal status per run.
//!
//! Key behaviors
//! -------------
//! - [`GradientDescent`] owns a validated strategy and [`GdOptions`];
//!   `minimize` performs one run.
//! - Termination is decided by the pure [`next_state`] transition over
//!   [`RunState`] (`Running`, `Converged`, `MaxIters`, `Diverged`).
//! - Line-search failures and NaN/±inf quantities end the run as
//!   `Diverged` with a [`DivergenceCause`]; they are never raised as errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Trajectory length is at most `max_iter + 1` (start point included).
//! - Runs are deterministic functions of their inputs.
//!
//! Downstream usage
//! ----------------
//! - The experiment harness builds one driver per sweep and calls
//!   `minimize` once per trial.
//!
//! [`QuadraticObjective`]: crate::objective::QuadraticObjective
//! [`StepSizeStrategy`]: crate::optimization::line_search::StepSizeStrategy

pub mod options;
pub mod run;
pub mod state;
pub mod types;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::options::{DEFAULT_MAX_ITER, DEFAULT_TOL_GRAD, GdOptions, StoppingRule};
pub use self::run::GradientDescent;
pub use self::state::{Observation, RunState, next_state};
pub use self::types::{DivergenceCause, Iterate, RunResult, RunStatus, Trajectory};

pub mod prelude {
    pub use super::options::{GdOptions, StoppingRule};
    pub use super::run::GradientDescent;
    pub use super::types::{DivergenceCause, RunResult, RunStatus, Trajectory};
}
