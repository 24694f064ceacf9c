use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};
use soup_core::{derive_substream_seed, Puzzle, SoupError, WordFinder};
use soup_solver::{run, RunConfig};

use crate::finder::collect_reports;
use crate::hash::stable_hash_string;
use crate::report::ExperimentRecord;
use crate::score::{score_runs, AnswerKey, ScoreSummary};

/// Runs one configuration end to end: collect candidate reports, solve,
/// score against the answer key, and time the whole thing.
pub fn run_experiment(
    config: &RunConfig,
    puzzles: &[Puzzle],
    finder: &dyn WordFinder,
    key: &AnswerKey,
) -> Result<ExperimentRecord, SoupError> {
    let params_hash = stable_hash_string(config)?;
    let started = Instant::now();
    let reports = collect_reports(finder, puzzles)?;
    let assignments = run(config, puzzles, &reports)?;
    let summary = score_runs(key, &assignments)?;
    let elapsed_seconds = started.elapsed().as_secs_f64();
    info!(
        "experiment finished: finder={} epochs={} mean_accuracy={:.3}",
        finder.name(),
        config.epochs,
        summary.mean_accuracy
    );
    Ok(ExperimentRecord {
        finder: finder.name().to_string(),
        epochs: config.epochs,
        elapsed_seconds,
        params_hash,
        summary,
    })
}

/// Plan sweeping the epoch count while the rest of the configuration stays
/// fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochSweepPlan {
    /// Epoch counts to try, one job each.
    pub epoch_counts: Vec<usize>,
    /// Configuration shared by every job (its epoch count is overridden).
    pub base: RunConfig,
}

/// Outcome of a single sweep job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepJobReport {
    /// Epoch count the job ran with.
    pub epochs: usize,
    /// Master seed derived for the job.
    pub master_seed: u64,
    /// Accuracy summary for the job's runs.
    pub summary: ScoreSummary,
}

/// Aggregate sweep report persisted for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Stable hash of the plan that produced the jobs.
    pub plan_hash: String,
    /// Per-job reports in plan order.
    pub jobs: Vec<SweepJobReport>,
}

/// Executes the plan job by job.
///
/// Every job re-collects candidate reports and solves with a master seed
/// derived from the base seed and the job index, so jobs never share random
/// streams and the whole sweep replays bit-for-bit from its plan.
pub fn sweep_epochs(
    plan: &EpochSweepPlan,
    puzzles: &[Puzzle],
    finder: &dyn WordFinder,
    key: &AnswerKey,
) -> Result<SweepReport, SoupError> {
    let plan_hash = stable_hash_string(plan)?;
    let mut jobs = Vec::with_capacity(plan.epoch_counts.len());
    for (idx, &epochs) in plan.epoch_counts.iter().enumerate() {
        let mut config = plan.base.clone();
        config.epochs = epochs;
        config.seed_policy.master_seed =
            derive_substream_seed(plan.base.seed_policy.master_seed, idx as u64);
        let record = run_experiment(&config, puzzles, finder, key)?;
        jobs.push(SweepJobReport {
            epochs,
            master_seed: config.seed_policy.master_seed,
            summary: record.summary,
        });
    }
    Ok(SweepReport { plan_hash, jobs })
}
