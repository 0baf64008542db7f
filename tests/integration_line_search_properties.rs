//! Property tests for the step sizes recorded in full descent runs.
//!
//! Purpose
//! -------
//! - Check, on randomly generated problems, that every step a run records
//!   satisfies the acceptance conditions of the strategy that chose it.
//! - Check trajectory bookkeeping that must hold whatever the outcome.
//!
//! Coverage
//! --------
//! - `line_search::armijo` and `line_search::wolfe` through
//!   `GradientDescent::minimize`.
//! - `line_search::conditions` as the independent auditor.
//!
//! Exclusions
//! ----------
//! - Convergence speed; see `integration_sweep_pipeline.rs`.
use proptest::prelude::*;
use quad_descent::{
    experiments::{MatrixGenerator, RhsPolicy, StartPoint, seeding::trial_rng},
    objective::{QuadraticObjective, Vector},
    optimization::{
        gradient_descent::{GdOptions, GradientDescent, RunResult, RunStatus},
        line_search::{
            ArmijoBacktracking, StrongWolfe,
            conditions::{satisfies_armijo, satisfies_strong_wolfe},
        },
    },
};

/// Purpose
/// -------
/// Build a seeded problem and a random start point of matching size.
fn problem(n: usize, kappa: f64, seed: u64) -> (QuadraticObjective, Vector) {
    let mut rng = trial_rng(seed);
    let objective = MatrixGenerator::default()
        .generate_problem_with_rng(n, kappa, RhsPolicy::Zero, &mut rng)
        .unwrap();
    let x0 = StartPoint::RandomNormal { scale: 3.0 }.sample(n, &mut rng).unwrap();
    (objective, x0)
}

/// Purpose
/// -------
/// Invariants every run must satisfy regardless of strategy.
fn check_bookkeeping(run: &RunResult, max_iter: usize) -> Result<(), TestCaseError> {
    prop_assert!(run.trajectory.len() <= max_iter + 1);
    prop_assert_eq!(run.trajectory.len(), run.iterations + 1);
    prop_assert_eq!(run.status == RunStatus::Diverged, run.cause.is_some());
    for (k, it) in run.trajectory.iter().enumerate() {
        prop_assert_eq!(it.index, k);
        prop_assert_eq!(it.step.is_none(), k == 0);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every Armijo step satisfies sufficient decrease, so values never rise.
    #[test]
    fn armijo_steps_satisfy_sufficient_decrease(
        seed in any::<u64>(),
        n in 2usize..12,
        kappa in 1.0f64..200.0,
    ) {
        let (objective, x0) = problem(n, kappa, seed);
        let policy = ArmijoBacktracking::default();
        let max_iter = 300;
        let optimizer =
            GradientDescent::new(policy, GdOptions::new(1e-8, max_iter).unwrap()).unwrap();

        let run = optimizer.minimize(&objective, &x0).unwrap();

        check_bookkeeping(&run, max_iter)?;
        for pair in run.trajectory.as_slice().windows(2) {
            let (prev, it) = (&pair[0], &pair[1]);
            let direction = -objective.gradient(&prev.x);
            let alpha = it.step.unwrap();
            prop_assert!(alpha > 0.0);
            prop_assert!(satisfies_armijo(&objective, &prev.x, &direction, alpha, policy.c1));
        }
        for pair in run.trajectory.values().windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    /// Every strong-Wolfe step satisfies both Wolfe conditions.
    #[test]
    fn wolfe_steps_satisfy_strong_wolfe(
        seed in any::<u64>(),
        n in 2usize..12,
        kappa in 1.0f64..200.0,
    ) {
        let (objective, x0) = problem(n, kappa, seed);
        let policy = StrongWolfe::default().with_armijo_fallback(false);
        let max_iter = 300;
        let optimizer =
            GradientDescent::new(policy, GdOptions::new(1e-8, max_iter).unwrap()).unwrap();

        let run = optimizer.minimize(&objective, &x0).unwrap();

        check_bookkeeping(&run, max_iter)?;
        for pair in run.trajectory.as_slice().windows(2) {
            let (prev, it) = (&pair[0], &pair[1]);
            let direction = -objective.gradient(&prev.x);
            let alpha = it.step.unwrap();
            prop_assert!(satisfies_strong_wolfe(
                &objective, &prev.x, &direction, alpha, policy.c1, policy.c2
            ));
        }
    }

    /// Runs are pure functions of their inputs.
    #[test]
    fn runs_are_deterministic(seed in any::<u64>(), kappa in 1.0f64..50.0) {
        let (objective, x0) = problem(5, kappa, seed);
        let optimizer = GradientDescent::new(
            StrongWolfe::default(),
            GdOptions::new(1e-6, 500).unwrap(),
        )
        .unwrap();

        let first = optimizer.minimize(&objective, &x0).unwrap();
        let second = optimizer.minimize(&objective, &x0).unwrap();

        prop_assert_eq!(first.status, second.status);
        prop_assert_eq!(first.iterations, second.iterations);
        prop_assert_eq!(first.x, second.x);
        prop_assert_eq!(first.trajectory, second.trajectory);
    }
}
