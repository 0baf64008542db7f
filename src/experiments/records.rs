//! experiments::records — per-trial records, grouping and summaries.
//!
//! Purpose
//! -------
//! Hold the ordered output of a sweep and expose it in the shapes external
//! plotting or reporting code needs: the flat record list, per-κ and
//! per-dimension grouping, and per-cell iteration statistics.
//!
//! Key behaviors
//! -------------
//! - Records keep the order in which trials were run.
//! - Grouping preserves first-appearance order of the group keys.
//! - Summaries count every status; iteration statistics include every
//!   trial, diverged and capped ones too (a diverged trial contributes the
//!   iteration at which divergence was detected).
//!
//! Conventions
//! -----------
//! - `std_iterations` is the sample standard deviation (`n − 1`
//!   denominator) from `statrs`; it is NaN for a single trial.
use serde::Serialize;
use statrs::statistics::Statistics;

use crate::optimization::gradient_descent::{DivergenceCause, RunResult, RunStatus};

/// Outcome of one `(κ, trial)` cell.
///
/// - `seed`: per-trial seed; `MatrixGenerator::generate_problem(dimension,
///   condition_number, seed, rhs)` rebuilds the trial's objective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRecord {
    pub condition_number: f64,
    pub dimension: usize,
    pub trial: usize,
    pub seed: u64,
    pub status: RunStatus,
    pub cause: Option<DivergenceCause>,
    pub iterations: usize,
    pub final_value: f64,
    pub final_grad_norm: f64,
}

impl ExperimentRecord {
    pub fn from_run(
        condition_number: f64, dimension: usize, trial: usize, seed: u64, run: &RunResult,
    ) -> Self {
        Self {
            condition_number,
            dimension,
            trial,
            seed,
            status: run.status,
            cause: run.cause.clone(),
            iterations: run.iterations,
            final_value: run.final_value,
            final_grad_norm: run.final_grad_norm,
        }
    }
}

/// Iteration statistics for one `(dimension, κ)` cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionSummary {
    pub condition_number: f64,
    pub dimension: usize,
    pub trials: usize,
    pub converged: usize,
    pub diverged: usize,
    pub max_iters: usize,
    pub mean_iterations: f64,
    pub std_iterations: f64,
}

impl ConditionSummary {
    /// Summarize one `(dimension, κ)` cell; `None` for an empty cell.
    pub(crate) fn from_records(records: &[&ExperimentRecord]) -> Option<Self> {
        let first = records.first()?;
        let count = |status: RunStatus| records.iter().filter(|r| r.status == status).count();
        let iterations: Vec<f64> = records.iter().map(|r| r.iterations as f64).collect();
        Some(Self {
            condition_number: first.condition_number,
            dimension: first.dimension,
            trials: records.len(),
            converged: count(RunStatus::Converged),
            diverged: count(RunStatus::Diverged),
            max_iters: count(RunStatus::MaxIters),
            mean_iterations: iterations.iter().mean(),
            std_iterations: iterations.iter().std_dev(),
        })
    }
}

/// Ordered records of one sweep (or several, for dimension sweeps).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepReport {
    records: Vec<ExperimentRecord>,
}

impl SweepReport {
    pub fn new(records: Vec<ExperimentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExperimentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn extend(&mut self, other: SweepReport) {
        self.records.extend(other.records);
    }

    /// Records grouped by condition number, in first-appearance order.
    pub fn by_condition_number(&self) -> Vec<(f64, Vec<&ExperimentRecord>)> {
        group_by_key(&self.records, |r| r.condition_number.to_bits())
            .into_iter()
            .map(|group| (group[0].condition_number, group))
            .collect()
    }

    /// Records grouped by dimension, in first-appearance order.
    pub fn by_dimension(&self) -> Vec<(usize, Vec<&ExperimentRecord>)> {
        group_by_key(&self.records, |r| r.dimension as u64)
            .into_iter()
            .map(|group| (group[0].dimension, group))
            .collect()
    }

    /// One summary per `(dimension, κ)` cell, in first-appearance order.
    pub fn summaries(&self) -> Vec<ConditionSummary> {
        let mut cells: Vec<((usize, u64), Vec<&ExperimentRecord>)> = Vec::new();
        for record in &self.records {
            let key = (record.dimension, record.condition_number.to_bits());
            match cells.iter_mut().find(|(k, _)| *k == key) {
                Some((_, group)) => group.push(record),
                None => cells.push((key, vec![record])),
            }
        }
        cells.iter().filter_map(|(_, group)| ConditionSummary::from_records(group)).collect()
    }
}

// ---- Helper Methods ----

fn group_by_key<F>(records: &[ExperimentRecord], key: F) -> Vec<Vec<&ExperimentRecord>>
where
    F: Fn(&ExperimentRecord) -> u64,
{
    let mut groups: Vec<(u64, Vec<&ExperimentRecord>)> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, group)) => group.push(record),
            None => groups.push((k, vec![record])),
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(
        kappa: f64, dimension: usize, trial: usize, status: RunStatus, iterations: usize,
    ) -> ExperimentRecord {
        ExperimentRecord {
            condition_number: kappa,
            dimension,
            trial,
            seed: trial as u64,
            status,
            cause: None,
            iterations,
            final_value: 0.0,
            final_grad_norm: 0.0,
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify grouping order and per-cell statistics.
    //
    // Given
    // -----
    // - κ = 10 with iterations {10, 20, 30} (one MaxIters), then κ = 1 with
    //   {2, 4} (one Diverged), all at dimension 5.
    //
    // Expect
    // ------
    // - Groups in order [10, 1]; summaries with means 20 and 3, sample
    //   standard deviations 10 and √2, and the status counts.
    fn grouping_and_summaries() {
        // Arrange
        let report = SweepReport::new(vec![
            record(10.0, 5, 0, RunStatus::Converged, 10),
            record(10.0, 5, 1, RunStatus::Converged, 20),
            record(10.0, 5, 2, RunStatus::MaxIters, 30),
            record(1.0, 5, 0, RunStatus::Converged, 2),
            record(1.0, 5, 1, RunStatus::Diverged, 4),
        ]);

        // Act
        let groups = report.by_condition_number();
        let summaries = report.summaries();
        let dims = report.by_dimension();

        // Assert
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 10.0);
        assert_eq!(groups[0].1.len(), 3);
        assert_eq!(groups[1].0, 1.0);
        assert_eq!(dims.len(), 1);
        assert_eq!(dims[0].1.len(), 5);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].converged, 2);
        assert_eq!(summaries[0].max_iters, 1);
        assert_relative_eq!(summaries[0].mean_iterations, 20.0);
        assert_relative_eq!(summaries[0].std_iterations, 10.0);
        assert_eq!(summaries[1].diverged, 1);
        assert_relative_eq!(summaries[1].mean_iterations, 3.0);
        assert_relative_eq!(summaries[1].std_iterations, 2.0_f64.sqrt());
    }

    #[test]
    // Purpose
    // -------
    // Ensure the same κ at different dimensions yields separate summaries.
    fn summaries_split_by_dimension() {
        // Arrange
        let report = SweepReport::new(vec![
            record(50.0, 2, 0, RunStatus::Converged, 5),
            record(50.0, 8, 0, RunStatus::Converged, 9),
        ]);

        // Act
        let summaries = report.summaries();

        // Assert
        assert_eq!(report.by_condition_number().len(), 1);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].dimension, 2);
        assert_eq!(summaries[1].dimension, 8);
        assert!(summaries[0].std_iterations.is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Check the per-cell summary the harness logs after each cell.
    //
    // Given
    // -----
    // - One κ = 10 cell with iterations 10 (converged), 20 (capped) and 30
    //   (diverged); and an empty cell.
    //
    // Expect
    // ------
    // - One of each status, mean 20, sample std 10.
    // - `None` for the empty cell.
    fn cell_summary_counts_statuses_and_moments() {
        // Arrange
        let cell = [
            record(10.0, 4, 0, RunStatus::Converged, 10),
            record(10.0, 4, 1, RunStatus::MaxIters, 20),
            record(10.0, 4, 2, RunStatus::Diverged, 30),
        ];
        let refs: Vec<&ExperimentRecord> = cell.iter().collect();

        // Act
        let summary = ConditionSummary::from_records(&refs).unwrap();
        let empty = ConditionSummary::from_records(&[]);

        // Assert
        assert_eq!(summary.trials, 3);
        assert_eq!((summary.converged, summary.max_iters, summary.diverged), (1, 1, 1));
        assert_relative_eq!(summary.mean_iterations, 20.0);
        assert_relative_eq!(summary.std_iterations, 10.0);
        assert!(empty.is_none());
    }
}
