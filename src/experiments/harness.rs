//! experiments::harness — condition-number sweeps over generated quadratics.
//!
//! Purpose
//! -------
//! For every `(κ, trial)` pair of a [`SweepSpec`]: generate a seeded SPD
//! problem, pick a start point, run gradient descent once, and record an
//! [`ExperimentRecord`]. The result is a [`SweepReport`] in visit order.
//!
//! Key behaviors
//! -------------
//! - Pairs are visited in order: condition numbers in the given order,
//!   trials `0..trials` within each.
//! - Each trial draws from its own RNG seeded by
//!   [`trial_seed`](crate::experiments::seeding::trial_seed); the matrix is
//!   drawn first, then `b` (if random), then the start point (if random).
//! - Diverged and capped trials are recorded like any other and never
//!   retried.
//! - Sweeps run sequentially on the calling thread.
//!
//! Invariants & assumptions
//! ------------------------
//! - The sweep configuration is validated before the first trial; a valid one can
//!   only fail mid-sweep on inputs the generator rejects.
//! - A sweep is a deterministic function of `(SweepSpec, strategy, options)`.
//!
//! Logging
//! -------
//! - `debug!` per trial, `info!` per completed `κ` cell.
use rand::{Rng, distributions::Distribution};
use serde::Serialize;
use statrs::distribution::Normal;
use tracing::{debug, info};

use crate::{
    experiments::{
        errors::{ExperimentError, ExperimentResult},
        generator::{EigenSpacing, MatrixGenerator, RhsPolicy},
        records::{ConditionSummary, ExperimentRecord, SweepReport},
        seeding::{trial_rng, trial_seed},
    },
    objective::Vector,
    optimization::{
        errors::OptResult,
        gradient_descent::{GdOptions, GradientDescent},
        line_search::{StepSizeStrategy, StepStrategy},
    },
};

/// Start-point policy for sweep trials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StartPoint {
    /// The same point for every trial; its length must equal the dimension.
    Fixed(Vector),
    /// Every coordinate equal to the given value.
    Constant(f64),
    /// Independent `N(0, scale²)` coordinates drawn per trial.
    RandomNormal { scale: f64 },
}

impl StartPoint {
    fn validate(&self, dimension: usize) -> ExperimentResult<()> {
        match self {
            StartPoint::Fixed(x0) => {
                if x0.len() != dimension {
                    return Err(ExperimentError::StartPointDimMismatch {
                        expected: dimension,
                        found: x0.len(),
                    });
                }
                if let Some(&value) = x0.iter().find(|v| !v.is_finite()) {
                    return Err(ExperimentError::InvalidStartPoint {
                        value,
                        reason: "Start point entries must be finite.",
                    });
                }
                Ok(())
            }
            StartPoint::Constant(value) => {
                if !value.is_finite() {
                    return Err(ExperimentError::InvalidStartPoint {
                        value: *value,
                        reason: "Constant start value must be finite.",
                    });
                }
                Ok(())
            }
            StartPoint::RandomNormal { scale } => {
                if !scale.is_finite() || *scale <= 0.0 {
                    return Err(ExperimentError::InvalidStartPoint {
                        value: *scale,
                        reason: "Random start scale must be finite and positive.",
                    });
                }
                Ok(())
            }
        }
    }

    /// Materialise the start point for one trial.
    pub fn sample<R: Rng + ?Sized>(
        &self, dimension: usize, rng: &mut R,
    ) -> ExperimentResult<Vector> {
        match self {
            StartPoint::Fixed(x0) => Ok(x0.clone()),
            StartPoint::Constant(value) => Ok(Vector::from_elem(dimension, *value)),
            StartPoint::RandomNormal { scale } => {
                let normal = Normal::new(0.0, *scale)?;
                Ok(Vector::from_shape_fn(dimension, |_| normal.sample(rng)))
            }
        }
    }
}

/// Sweep configuration.
///
/// - `condition_numbers`: visited in order; each must be finite and ≥ 1.
/// - `dimension`: problem size `n ≥ 1`.
/// - `trials`: trials per condition number, ≥ 1.
/// - `base_seed`: root of every per-trial seed.
/// - `start_point`, `rhs`, `spacing`: problem construction policies.
///
/// Defaults from [`SweepSpec::new`]: `base_seed = 0`,
/// `start_point = RandomNormal { scale: 1.0 }`, `rhs = Zero`,
/// `spacing = Linear`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSpec {
    pub condition_numbers: Vec<f64>,
    pub dimension: usize,
    pub trials: usize,
    pub base_seed: u64,
    pub start_point: StartPoint,
    pub rhs: RhsPolicy,
    pub spacing: EigenSpacing,
}

impl SweepSpec {
    /// Build a validated sweep configuration with default policies.
    ///
    /// # Errors
    /// - [`ExperimentError::EmptySweep`], [`ExperimentError::InvalidTrials`],
    ///   [`ExperimentError::InvalidDimension`] or
    ///   [`ExperimentError::InvalidConditionNumber`].
    pub fn new(
        condition_numbers: Vec<f64>, dimension: usize, trials: usize,
    ) -> ExperimentResult<Self> {
        let spec = Self {
            condition_numbers,
            dimension,
            trials,
            base_seed: 0,
            start_point: StartPoint::RandomNormal { scale: 1.0 },
            rhs: RhsPolicy::Zero,
            spacing: EigenSpacing::Linear,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    pub fn with_start_point(mut self, start_point: StartPoint) -> ExperimentResult<Self> {
        start_point.validate(self.dimension)?;
        self.start_point = start_point;
        Ok(self)
    }

    pub fn with_rhs(mut self, rhs: RhsPolicy) -> Self {
        self.rhs = rhs;
        self
    }

    pub fn with_spacing(mut self, spacing: EigenSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Same sweep at a different dimension, revalidated; a `Fixed` start
    /// point of the old length is rejected.
    pub fn with_dimension(mut self, dimension: usize) -> ExperimentResult<Self> {
        self.dimension = dimension;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ExperimentResult<()> {
        if self.condition_numbers.is_empty() {
            return Err(ExperimentError::EmptySweep);
        }
        if self.trials == 0 {
            return Err(ExperimentError::InvalidTrials {
                trials: 0,
                reason: "At least one trial per condition number is required.",
            });
        }
        if self.dimension == 0 {
            return Err(ExperimentError::InvalidDimension {
                n: 0,
                reason: "Dimension must be at least one.",
            });
        }
        for &kappa in &self.condition_numbers {
            if !kappa.is_finite() || kappa < 1.0 {
                return Err(ExperimentError::InvalidConditionNumber {
                    kappa,
                    reason: "Condition numbers must be finite and at least one.",
                });
            }
        }
        self.start_point.validate(self.dimension)
    }
}

/// Runs sweeps with one fixed strategy and one set of options.
#[derive(Debug, Clone)]
pub struct ExperimentHarness<S = StepStrategy> {
    optimizer: GradientDescent<S>,
}

impl<S: StepSizeStrategy> ExperimentHarness<S> {
    /// # Errors
    /// Same as [`GradientDescent::new`].
    pub fn new(strategy: S, options: GdOptions) -> OptResult<Self> {
        Ok(Self { optimizer: GradientDescent::new(strategy, options)? })
    }

    pub fn optimizer(&self) -> &GradientDescent<S> {
        &self.optimizer
    }

    /// run — execute every `(κ, trial)` pair of the sweep once.
    ///
    /// Errors
    /// ------
    /// - Sweep validation errors (as [`OptError::Experiment`]).
    /// - Generator failures for a specific trial.
    ///
    /// Per-trial divergence is never an error; it is recorded.
    ///
    /// [`OptError::Experiment`]: crate::optimization::errors::OptError::Experiment
    pub fn run(&self, spec: &SweepSpec) -> OptResult<SweepReport> {
        spec.validate()?;
        let generator = MatrixGenerator::new(spec.spacing);
        let n = spec.dimension;
        let mut records = Vec::with_capacity(spec.condition_numbers.len() * spec.trials);

        for (kappa_index, &kappa) in spec.condition_numbers.iter().enumerate() {
            let cell_start = records.len();
            for trial in 0..spec.trials {
                let seed = trial_seed(spec.base_seed, kappa_index, trial);
                let mut rng = trial_rng(seed);
                let objective =
                    generator.generate_problem_with_rng(n, kappa, spec.rhs, &mut rng)?;
                let x0 = spec.start_point.sample(n, &mut rng)?;
                let run = self.optimizer.minimize(&objective, &x0)?;
                debug!(
                    kappa,
                    dimension = n,
                    trial,
                    seed,
                    status = %run.status,
                    iterations = run.iterations,
                    "sweep trial"
                );
                records.push(ExperimentRecord::from_run(kappa, n, trial, seed, &run));
            }

            let cell: Vec<&ExperimentRecord> = records[cell_start..].iter().collect();
            if let Some(summary) = ConditionSummary::from_records(&cell) {
                info!(
                    kappa,
                    dimension = n,
                    trials = summary.trials,
                    converged = summary.converged,
                    diverged = summary.diverged,
                    max_iters = summary.max_iters,
                    mean_iterations = summary.mean_iterations,
                    std_iterations = summary.std_iterations,
                    strategy = self.optimizer.strategy().name(),
                    "sweep cell finished"
                );
            }
        }

        Ok(SweepReport::new(records))
    }

    /// Repeat [`run`](Self::run) for each dimension in `dimensions`, in
    /// order, and concatenate the records.
    ///
    /// # Errors
    /// As [`run`](Self::run); also fails if a `Fixed` start point does not
    /// fit one of the dimensions.
    pub fn run_dimension_sweep(
        &self, spec: &SweepSpec, dimensions: &[usize],
    ) -> OptResult<SweepReport> {
        let mut report = SweepReport::default();
        for &dimension in dimensions {
            let cell_spec = spec.clone().with_dimension(dimension)?;
            report.extend(self.run(&cell_spec)?);
        }
        Ok(report)
    }
}
