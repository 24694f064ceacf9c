use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use soup_core::errors::ErrorInfo;
use soup_core::SoupError;

use crate::hash::to_canonical_json_bytes;
use crate::score::ScoreSummary;

const REPORT_COLUMNS: [&str; 11] = [
    "finder",
    "epochs",
    "runs",
    "mean_accuracy",
    "std_dev",
    "median",
    "best_accuracy",
    "distinct_assignments",
    "elapsed_seconds",
    "params_hash",
    "best_assignment",
];

/// One experiment outcome, ready for the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Label of the word-finder backend used.
    pub finder: String,
    /// Epoch count the solver ran with.
    pub epochs: usize,
    /// Wall-clock seconds for the whole experiment.
    pub elapsed_seconds: f64,
    /// Stable hash of the run configuration.
    pub params_hash: String,
    /// Accuracy summary over the produced assignments.
    pub summary: ScoreSummary,
}

/// Query descriptor for registry lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Query {
    /// Only keep rows produced by this finder label.
    #[serde(default)]
    pub finder: Option<String>,
    /// Stop after this many matching rows.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Table representation returned from registry queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in file order.
    pub columns: Vec<String>,
    /// Matching rows, each cell as written.
    pub rows: Vec<Vec<String>>,
}

/// Appends an [`ExperimentRecord`] to the CSV registry at `path`.
///
/// The header row is written only when the file is created. The best
/// assignment travels as a single JSON cell; the csv writer's quoting keeps
/// it intact through read-back.
pub fn report_append(path: &Path, record: &ExperimentRecord) -> Result<(), SoupError> {
    ensure_parent(path)?;
    let file_exists = path.exists();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| {
            SoupError::Report(
                ErrorInfo::new("report-open", "failed to open CSV registry")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    if !file_exists {
        writer
            .write_record(REPORT_COLUMNS)
            .map_err(|err| wrap_csv("report-write-header", err))?;
    }
    let best_assignment = match &record.summary.best_assignment {
        Some(assignment) => canonical_string(assignment)?,
        None => String::new(),
    };
    writer
        .write_record(&[
            record.finder.clone(),
            record.epochs.to_string(),
            record.summary.runs.to_string(),
            record.summary.mean_accuracy.to_string(),
            record.summary.std_dev.to_string(),
            record.summary.median.to_string(),
            record.summary.best_accuracy.to_string(),
            record.summary.distinct_assignments.to_string(),
            record.elapsed_seconds.to_string(),
            record.params_hash.clone(),
            best_assignment,
        ])
        .map_err(|err| wrap_csv("report-write-row", err))?;
    writer
        .flush()
        .map_err(|err| wrap_csv("report-flush", err.into()))?;
    Ok(())
}

/// Reads the registry back, applying the query's finder filter and row limit.
pub fn report_query(path: &Path, query: &Query) -> Result<Table, SoupError> {
    if !path.exists() {
        return Ok(Table {
            columns: table_columns(),
            rows: Vec::new(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| wrap_csv("report-read", err))?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| wrap_csv("report-record", err))?;
        if let Some(finder) = &query.finder {
            if record.get(0) != Some(finder.as_str()) {
                continue;
            }
        }
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
        if let Some(limit) = query.limit {
            if rows.len() >= limit {
                break;
            }
        }
    }
    Ok(Table {
        columns: table_columns(),
        rows,
    })
}

fn table_columns() -> Vec<String> {
    REPORT_COLUMNS.iter().map(|name| name.to_string()).collect()
}

fn canonical_string<T: Serialize>(value: &T) -> Result<String, SoupError> {
    let bytes = to_canonical_json_bytes(value)?;
    String::from_utf8(bytes)
        .map_err(|err| SoupError::Serde(ErrorInfo::new("json-utf8", err.to_string())))
}

fn ensure_parent(path: &Path) -> Result<(), SoupError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| {
                SoupError::Report(
                    ErrorInfo::new("report-mkdir", "failed to create registry directory")
                        .with_context("path", parent.display().to_string())
                        .with_hint(err.to_string()),
                )
            })?;
        }
    }
    Ok(())
}

fn wrap_csv(code: &str, err: csv::Error) -> SoupError {
    SoupError::Report(ErrorInfo::new(code, err.to_string()))
}
