//! Run configuration for the gradient-descent driver.
//!
//! [`GdOptions`] bundles the termination thresholds of a single run. It is a
//! plain validated struct: `new` checks the numeric fields, the `with_*`
//! builders add the optional knobs, and `Default` gives the conventional
//! `tol_grad = 1e-6`, `max_iter = 10_000` setup.
use std::time::Duration;

use serde::Serialize;

use crate::optimization::errors::{OptError, OptResult};

/// Default gradient-norm tolerance.
pub const DEFAULT_TOL_GRAD: f64 = 1e-6;
/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// How the gradient-norm tolerance is interpreted.
///
/// - `Absolute`: stop once `‖∇f(x_k)‖ ≤ tol_grad`.
/// - `Relative`: stop once `‖∇f(x_k)‖ ≤ tol_grad · ‖∇f(x_0)‖`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StoppingRule {
    #[default]
    Absolute,
    Relative,
}

/// Termination thresholds and logging verbosity for one run.
///
/// Fields:
/// - `tol_grad`: gradient-norm tolerance (finite, strictly positive).
/// - `max_iter`: maximum number of updates (strictly positive); the
///   trajectory therefore holds at most `max_iter + 1` iterates.
/// - `stopping`: absolute or relative reading of `tol_grad`.
/// - `max_wall_time`: optional wall-clock cap; reaching it ends the run with
///   `MaxIters`.
/// - `verbose`: promote per-iteration events from `trace` to `debug`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GdOptions {
    pub tol_grad: f64,
    pub max_iter: usize,
    pub stopping: StoppingRule,
    pub max_wall_time: Option<Duration>,
    pub verbose: bool,
}

impl GdOptions {
    /// Construct validated options with an absolute stopping rule.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolGrad`] if `tol_grad` is non-finite or ≤ 0.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_grad: f64, max_iter: usize) -> OptResult<Self> {
        let options = Self {
            tol_grad,
            max_iter,
            stopping: StoppingRule::Absolute,
            max_wall_time: None,
            verbose: false,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn with_stopping(mut self, stopping: StoppingRule) -> Self {
        self.stopping = stopping;
        self
    }

    /// Cap the run's wall-clock time.
    ///
    /// # Errors
    /// [`OptError::InvalidMaxWallTime`] for a zero duration.
    pub fn with_max_wall_time(mut self, limit: Duration) -> OptResult<Self> {
        self.max_wall_time = Some(limit);
        self.validate()?;
        Ok(self)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Re-check every field; used by [`GradientDescent::new`] so options
    /// built by struct literal are held to the same rules.
    ///
    /// [`GradientDescent::new`]: crate::optimization::gradient_descent::GradientDescent::new
    pub fn validate(&self) -> OptResult<()> {
        verify_tol_grad(self.tol_grad)?;
        if self.max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter: self.max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        if let Some(limit) = self.max_wall_time {
            if limit.is_zero() {
                return Err(OptError::InvalidMaxWallTime {
                    reason: "Wall-clock cap must be greater than zero.",
                });
            }
        }
        Ok(())
    }

    /// Gradient-norm threshold for this run given `‖∇f(x_0)‖`.
    pub fn threshold(&self, initial_grad_norm: f64) -> f64 {
        match self.stopping {
            StoppingRule::Absolute => self.tol_grad,
            StoppingRule::Relative => self.tol_grad * initial_grad_norm,
        }
    }
}

impl Default for GdOptions {
    fn default() -> Self {
        Self {
            tol_grad: DEFAULT_TOL_GRAD,
            max_iter: DEFAULT_MAX_ITER,
            stopping: StoppingRule::Absolute,
            max_wall_time: None,
            verbose: false,
        }
    }
}

fn verify_tol_grad(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}
