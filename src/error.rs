//! Error types for the predictor core.
//!
//! Structural errors (bad profile, bad shape, empty dataset) abort the
//! operation that hit them. A zero measured time is NOT represented here:
//! it is the `None` state of [`PredictionResult::percent_error`] and never
//! aborts an evaluation.
//!
//! [`PredictionResult::percent_error`]: crate::eval::PredictionResult

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// A hardware profile field is zero or negative. Raised at profile
    /// construction, never silently clamped.
    #[error("invalid hardware profile: {field} must be strictly positive, got {value}")]
    InvalidProfile { field: &'static str, value: f64 },

    /// A problem dimension is below 1.
    #[error("invalid problem shape {m}x{n}x{k}: every dimension must be at least 1")]
    InvalidShape { m: u64, n: u64, k: u64 },

    /// The evaluator was handed zero records; mean squared error is
    /// undefined over an empty dataset.
    #[error("empty benchmark dataset: mean squared error is undefined")]
    EmptyDataset,
}

pub type PredictResult<T> = Result<T, PredictError>;
