//! experiments — generated problems and condition-number sweeps.
//!
//! Purpose
//! -------
//! Measure how gradient-descent behavior depends on conditioning: generate
//! SPD quadratics with a prescribed `κ`, run one optimizer configuration on
//! many seeded trials per `κ`, and collect flat, serialisable records.
//!
//! Key behaviors
//! -------------
//! - [`MatrixGenerator`] builds `A = QΛQᵀ` from a seed; the spectrum spans
//!   exactly `[1, κ]`.
//! - [`ExperimentHarness::run`] visits every `(κ, trial)` pair of a
//!   [`SweepSpec`] in order and returns a [`SweepReport`].
//! - [`SweepReport`] groups records by `κ` or dimension and computes
//!   per-cell iteration statistics.
//!
//! Invariants & assumptions
//! ------------------------
//! - Randomness comes only from per-trial seeds derived from the sweep's
//!   base seed ([`seeding`]); a sweep is reproducible bit-for-bit.
//! - Per-trial divergence is data, not an error.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover spectrum placement, seeding, grouping and sweep
//!   order; the κ-trend and strategy-comparison scenarios live in `tests/`.

pub mod errors;
pub mod generator;
pub mod harness;
pub mod records;
pub mod seeding;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ExperimentError, ExperimentResult};
pub use self::generator::{EigenSpacing, MatrixGenerator, RhsPolicy};
pub use self::harness::{ExperimentHarness, StartPoint, SweepSpec};
pub use self::records::{ConditionSummary, ExperimentRecord, SweepReport};
pub use self::seeding::trial_seed;

pub mod prelude {
    pub use super::errors::{ExperimentError, ExperimentResult};
    pub use super::generator::{EigenSpacing, MatrixGenerator, RhsPolicy};
    pub use super::harness::{ExperimentHarness, StartPoint, SweepSpec};
    pub use super::records::{ConditionSummary, ExperimentRecord, SweepReport};
}
