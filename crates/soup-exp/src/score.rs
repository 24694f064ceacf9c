use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use soup_core::errors::ErrorInfo;
use soup_core::{Assignment, SoupError};

use crate::hash::stable_hash_string;

/// Known correct words keyed by their masked form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    answers: BTreeMap<String, String>,
}

impl AnswerKey {
    /// Wraps an existing answer map.
    pub fn new(answers: BTreeMap<String, String>) -> Self {
        Self { answers }
    }

    /// Builds a key from (masked word, answer) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            answers: pairs
                .into_iter()
                .map(|(puzzle, answer)| (puzzle.into(), answer.into()))
                .collect(),
        }
    }

    /// Number of puzzles with known answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true when the key holds no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of puzzles the assignment decodes exactly.
    pub fn correct_in(&self, assignment: &Assignment) -> usize {
        self.answers
            .iter()
            .filter(|(puzzle, answer)| assignment.get(*puzzle) == Some(*answer))
            .count()
    }
}

/// Accuracy summary over a batch of assignment samples.
///
/// Accuracies are fractions in `0..=1`. The best assignment is only recorded
/// when some run scored strictly above zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of runs scored.
    pub runs: usize,
    /// Mean accuracy across runs.
    pub mean_accuracy: f64,
    /// Sample standard deviation of the per-run accuracies.
    pub std_dev: f64,
    /// Median per-run accuracy.
    pub median: f64,
    /// Highest accuracy observed.
    pub best_accuracy: f64,
    /// The assignment that achieved `best_accuracy`, when above zero.
    pub best_assignment: Option<Assignment>,
    /// Number of structurally distinct assignments seen across runs.
    pub distinct_assignments: usize,
    /// Per-run accuracies in generation order.
    pub per_run: Vec<f64>,
}

/// Scores every run against the answer key and summarizes the batch.
pub fn score_runs(key: &AnswerKey, runs: &[Assignment]) -> Result<ScoreSummary, SoupError> {
    if key.is_empty() {
        return Err(SoupError::Report(ErrorInfo::new(
            "empty-answer-key",
            "cannot score runs without expected words",
        )));
    }
    let total = key.len() as f64;
    let mut per_run = Vec::with_capacity(runs.len());
    let mut distinct = IndexSet::new();
    let mut best_accuracy = 0.0_f64;
    let mut best_assignment = None;
    for assignment in runs {
        let accuracy = key.correct_in(assignment) as f64 / total;
        if accuracy > best_accuracy {
            best_accuracy = accuracy;
            best_assignment = Some(assignment.clone());
        }
        distinct.insert(stable_hash_string(assignment)?);
        per_run.push(accuracy);
    }
    Ok(ScoreSummary {
        runs: runs.len(),
        mean_accuracy: mean(&per_run),
        std_dev: sample_std_dev(&per_run),
        median: median(&per_run),
        best_accuracy,
        best_assignment,
        distinct_assignments: distinct.len(),
        per_run,
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
