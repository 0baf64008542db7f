//! gradient_descent::run — the steepest-descent driver.
//!
//! Purpose
//! -------
//! Tie a [`QuadraticObjective`] and a [`StepSizeStrategy`] together: starting
//! from `x0`, repeatedly step along `−∇f(x)` with the strategy's `α`,
//! record every iterate, and stop as soon as the state machine in
//! [`state`](super::state) reaches a terminal state.
//!
//! Key behaviors
//! -------------
//! - Construction validates both the strategy and the options, so a
//!   misconfigured run fails before any work is done.
//! - `minimize` fails only when the start point itself is unusable
//!   (wrong length, non-finite entries). Every numeric problem during the
//!   run becomes a `Diverged` result.
//! - The diverging iterate is recorded, so the trajectory shows the
//!   blow-up that ended the run.
//!
//! Invariants & assumptions
//! ------------------------
//! - `trajectory.len() == iterations + 1 ≤ max_iter + 1`.
//! - The driver never retries: one call to `minimize` is one run.
//! - Given the same objective, strategy, options and start point, two runs
//!   produce identical trajectories.
//!
//! Logging
//! -------
//! - `trace!` per iteration (`debug!` when `options.verbose`), `debug!` on
//!   completion, `warn!` on divergence.
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::{
    objective::{QuadraticObjective, Vector},
    optimization::{
        errors::{OptError, OptResult},
        gradient_descent::{
            options::GdOptions,
            state::{Observation, next_state},
            types::{Iterate, RunResult, RunStatus, Trajectory},
        },
        line_search::{strategy::StepStrategy, traits::StepSizeStrategy},
    },
};

/// Gradient descent with a pluggable step-size policy.
///
/// The default type parameter is the configuration-level [`StepStrategy`];
/// any [`StepSizeStrategy`] implementation (or a reference to one) works.
#[derive(Debug, Clone)]
pub struct GradientDescent<S = StepStrategy> {
    strategy: S,
    options: GdOptions,
}

impl<S: StepSizeStrategy> GradientDescent<S> {
    /// Build a driver after validating `strategy` and `options`.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepParameter`] for out-of-range strategy
    ///   parameters.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidMaxIter`] /
    ///   [`OptError::InvalidMaxWallTime`] for bad options.
    pub fn new(strategy: S, options: GdOptions) -> OptResult<Self> {
        strategy.validate()?;
        options.validate()?;
        Ok(Self { strategy, options })
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn options(&self) -> &GdOptions {
        &self.options
    }

    /// minimize — run gradient descent from `x0` until a terminal state.
    ///
    /// Parameters
    /// ----------
    /// - `objective`: the quadratic to minimize; only read.
    /// - `x0`: start point with `x0.len() == objective.dim()`.
    ///
    /// Returns
    /// -------
    /// A [`RunResult`] whose status is `Converged`, `MaxIters`, or
    /// `Diverged` (with a cause).
    ///
    /// Errors
    /// ------
    /// - [`OptError::StartPointDimMismatch`] if the length is wrong.
    /// - [`OptError::NonFiniteStartPoint`] for the first NaN/±inf entry.
    /// - The mapped configuration error if the strategy rejects its own
    ///   parameters mid-run; search failures end the run as `Diverged`.
    pub fn minimize(&self, objective: &QuadraticObjective, x0: &Vector) -> OptResult<RunResult> {
        validate_start_point(x0, objective.dim())?;
        let started = Instant::now();
        let options = &self.options;

        let mut x = x0.clone();
        let mut grad = objective.gradient(&x);
        let mut grad_norm = l2_norm(&grad);
        let initial_grad_norm = grad_norm;
        let mut trajectory = Trajectory::with_capacity(options.max_iter.min(1024) + 1);
        trajectory.push(Iterate {
            index: 0,
            x: x.clone(),
            value: objective.value(&x),
            grad_norm,
            step: None,
        });

        let mut iteration = 0usize;
        let mut previous_step: Option<f64> = None;
        let state = loop {
            let gate = next_state(
                &Observation::Gradient {
                    iteration,
                    grad_norm,
                    initial_grad_norm,
                    elapsed: started.elapsed(),
                },
                options,
            );
            if gate.is_terminal() {
                break gate;
            }

            let direction = -&grad;
            let alpha = match self.strategy.select_step_with_hint(
                objective,
                &x,
                &direction,
                previous_step,
            ) {
                Ok(alpha) => alpha,
                Err(err) if err.is_configuration() => return Err(err.into()),
                Err(err) => break next_state(&Observation::StepRejected(err), options),
            };
            let gate = next_state(&Observation::StepAccepted { alpha }, options);
            if gate.is_terminal() {
                break gate;
            }

            x.scaled_add(alpha, &direction);
            iteration += 1;
            objective.gradient_into(&x, &mut grad);
            grad_norm = l2_norm(&grad);
            let value = objective.value(&x);
            let finite =
                value.is_finite() && grad_norm.is_finite() && x.iter().all(|v| v.is_finite());
            let strategy = self.strategy.name();
            if options.verbose {
                debug!(iteration, value, grad_norm, alpha, strategy, "gd step");
            } else {
                trace!(iteration, value, grad_norm, alpha, strategy, "gd step");
            }
            trajectory.push(Iterate {
                index: iteration,
                x: x.clone(),
                value,
                grad_norm,
                step: Some(alpha),
            });

            let gate = next_state(&Observation::Moved { finite }, options);
            if gate.is_terminal() {
                break gate;
            }
            previous_step = Some(alpha);
        };

        let (status, cause) = match state.into_outcome() {
            Some(outcome) => outcome,
            None => return Err(OptError::UnknownError),
        };
        let final_value = trajectory.last().map_or(f64::NAN, |it| it.value);
        let elapsed = started.elapsed();
        match (&status, &cause) {
            (RunStatus::Diverged, Some(cause)) => {
                warn!(iteration, strategy = self.strategy.name(), %cause, "gd run diverged");
            }
            _ => {
                debug!(
                    iteration,
                    final_value,
                    grad_norm,
                    %status,
                    elapsed_us = elapsed.as_micros() as u64,
                    "gd run finished"
                );
            }
        }

        Ok(RunResult {
            status,
            cause,
            x,
            iterations: iteration,
            trajectory,
            final_value,
            final_grad_norm: grad_norm,
            elapsed,
        })
    }
}

// ---- Helper Methods ----

fn l2_norm(v: &Vector) -> f64 {
    v.dot(v).sqrt()
}

fn validate_start_point(x0: &Vector, dim: usize) -> OptResult<()> {
    if x0.len() != dim {
        return Err(OptError::StartPointDimMismatch { expected: dim, found: x0.len() });
    }
    for (index, &value) in x0.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFiniteStartPoint { index, value });
        }
    }
    Ok(())
}
