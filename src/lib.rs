//! gemm-roofline: analytical performance prediction for GEMM-shaped kernels.
//!
//! Estimates the wall-clock execution time of a dense matrix-multiply-shaped
//! workload (M, N, K) with a closed-form roofline model — the maximum of a
//! compute-bound, a bandwidth-bound, and a cache-aware latency-bound term —
//! and validates the model against DeepBench-style reference measurements,
//! reporting per-record error and the dataset mean squared error.
//!
//! # Quick Start
//!
//! ```
//! use gemm_roofline::{estimate, evaluate, BenchmarkRecord, HardwareProfile, ProblemShape};
//!
//! let profile = HardwareProfile::titan_v();
//!
//! // One-off prediction
//! let shape = ProblemShape::new(1760, 128, 1760)?;
//! let usec = estimate(shape, &profile)?;
//! assert!(usec > 0.0);
//!
//! // Score against reference measurements
//! let records = vec![BenchmarkRecord { shape, measured_time_usec: 43.1 }];
//! let summary = evaluate(&records, &profile)?;
//! assert_eq!(summary.count, 1);
//! # Ok::<(), gemm_roofline::PredictError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod eval;
pub mod model;
pub mod profile;
pub mod report;
pub mod shape;

pub use dataset::{load_records, parse_records, RecordParseError};
pub use error::{PredictError, PredictResult};
pub use eval::{evaluate, evaluate_parallel, BenchmarkRecord, EvaluationSummary, PredictionResult};
pub use model::{breakdown, estimate, Bound, BoundBreakdown};
pub use profile::{HardwareProfile, ProfileFileError};
pub use shape::ProblemShape;
