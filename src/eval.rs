//! Evaluation harness: scores model predictions against reference times.
//!
//! Consumes already-validated [`BenchmarkRecord`]s, runs the cost model
//! once per record, and produces per-record [`PredictionResult`]s plus the
//! dataset mean squared error. The harness returns data only — rendering
//! is [`crate::report`]'s job.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, PredictResult};
use crate::model;
use crate::profile::HardwareProfile;
use crate::shape::ProblemShape;

/// One reference measurement from the benchmark dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub shape: ProblemShape,
    /// Ground-truth execution time in microseconds. Expected positive;
    /// a zero value only degrades that record's percent error.
    pub measured_time_usec: f64,
}

/// Model prediction for one record, with per-record error statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub shape: ProblemShape,
    pub predicted_time_usec: f64,
    pub measured_time_usec: f64,
    /// Absolute percent error `|predicted − measured| / measured · 100`.
    /// `None` when the measured time is zero: the percent error is
    /// undefined there, not infinite. The record still contributes its
    /// squared error to the aggregate.
    pub percent_error: Option<f64>,
}

/// Aggregate outcome of scoring a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    /// Number of records scored.
    pub count: usize,
    /// Arithmetic mean of (measured − predicted)² over all records.
    pub mean_squared_error: f64,
    /// Per-record results, strictly in dataset order.
    pub results: Vec<PredictionResult>,
}

/// Score every record against the model, in input order.
///
/// Fails with [`PredictError::EmptyDataset`] on zero records and propagates
/// [`PredictError::InvalidShape`] from the model — a malformed record
/// aborts the evaluation, since records are supposed to arrive validated.
pub fn evaluate(
    records: &[BenchmarkRecord],
    profile: &HardwareProfile,
) -> PredictResult<EvaluationSummary> {
    if records.is_empty() {
        return Err(PredictError::EmptyDataset);
    }
    let mut results = Vec::with_capacity(records.len());
    for record in records {
        results.push(score_record(record, profile)?);
    }
    Ok(summarize(results))
}

/// Parallel variant of [`evaluate`]. Model calls are pure and independent,
/// so records are scored across the rayon pool; `collect` on an indexed
/// parallel iterator keeps the results in input order, which is an
/// observable contract of the summary.
pub fn evaluate_parallel(
    records: &[BenchmarkRecord],
    profile: &HardwareProfile,
) -> PredictResult<EvaluationSummary> {
    if records.is_empty() {
        return Err(PredictError::EmptyDataset);
    }
    let results = records
        .par_iter()
        .map(|record| score_record(record, profile))
        .collect::<PredictResult<Vec<_>>>()?;
    Ok(summarize(results))
}

fn score_record(
    record: &BenchmarkRecord,
    profile: &HardwareProfile,
) -> PredictResult<PredictionResult> {
    let predicted = model::estimate(record.shape, profile)?;
    let measured = record.measured_time_usec;
    let percent_error = if measured != 0.0 {
        Some((predicted - measured).abs() / measured * 100.0)
    } else {
        debug!("record {}: zero measured time, percent error undefined", record.shape);
        None
    };
    Ok(PredictionResult {
        shape: record.shape,
        predicted_time_usec: predicted,
        measured_time_usec: measured,
        percent_error,
    })
}

fn summarize(results: Vec<PredictionResult>) -> EvaluationSummary {
    let count = results.len();
    let squared_sum: f64 = results
        .iter()
        .map(|r| (r.measured_time_usec - r.predicted_time_usec).powi(2))
        .sum();
    EvaluationSummary {
        count,
        mean_squared_error: squared_sum / count as f64,
        results,
    }
}
