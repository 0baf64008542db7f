//! line_search — the step-size strategy family {Constant, Armijo, Wolfe}.
//!
//! Purpose
//! -------
//! Choose the scalar step `α` for a gradient-descent update
//! `x ← x + α·d`. Every policy implements the single-operation capability
//! interface [`StepSizeStrategy`]; configuration picks one through the
//! tagged enum [`StepStrategy`].
//!
//! Key behaviors
//! -------------
//! - [`ConstantStep`]: returns a fixed `α`; the slow, possibly unstable
//!   baseline.
//! - [`ArmijoBacktracking`]: shrinks a trial step until sufficient decrease
//!   holds; fails below a numeric floor.
//! - [`StrongWolfe`]: brackets, then interpolates until sufficient decrease
//!   and the strong curvature condition both hold; bounded expansion and
//!   refinement budgets.
//! - [`conditions`] exposes the acceptance predicates so a trajectory can be
//!   audited after the fact.
//!
//! Invariants & assumptions
//! ------------------------
//! - Strategies hold only policy parameters and are pure functions of
//!   `(objective, x, direction)` (plus an optional previous-step hint).
//! - Parameters are validated at construction and again when an optimizer
//!   is built, so a misconfigured policy never reaches a run.
//! - Runtime failures are [`LineSearchError`] values, never panics.
//!
//! Conventions
//! -----------
//! - Defaults follow the textbook choices `c1 = 1e-4`, `c2 = 0.9`,
//!   `ρ = 0.5`, `α0 = 1`.
//!
//! Testing notes
//! -------------
//! - Each policy is tested on 1-D quadratics whose line functions are known
//!   in closed form; property tests in `tests/` check that every recorded
//!   step of a full run satisfies the policy's conditions.

pub mod armijo;
pub mod conditions;
pub mod constant;
pub mod errors;
pub mod line;
pub mod strategy;
pub mod traits;
pub mod validation;
pub mod wolfe;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::armijo::ArmijoBacktracking;
pub use self::constant::ConstantStep;
pub use self::errors::{LineSearchError, LineSearchResult};
pub use self::strategy::StepStrategy;
pub use self::traits::StepSizeStrategy;
pub use self::wolfe::StrongWolfe;

pub mod prelude {
    pub use super::armijo::ArmijoBacktracking;
    pub use super::constant::ConstantStep;
    pub use super::errors::{LineSearchError, LineSearchResult};
    pub use super::strategy::StepStrategy;
    pub use super::traits::StepSizeStrategy;
    pub use super::wolfe::StrongWolfe;
}
