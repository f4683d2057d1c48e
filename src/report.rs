//! Rendering of evaluation results.
//!
//! The evaluator returns structured data; this module turns an
//! [`EvaluationSummary`] into an aligned text table or pretty JSON. Keeping
//! rendering out of the core is what makes the evaluator testable without
//! capturing console output.

use std::fmt::Write as _;

use crate::eval::EvaluationSummary;

/// Render the per-record table plus the aggregate MSE line.
///
/// Undefined percent errors (zero measured time) render as `-`.
pub fn render_table(summary: &EvaluationSummary) -> String {
    let rule = "-".repeat(78);
    let mut out = String::with_capacity(80 * (summary.count + 4));

    let _ = writeln!(
        out,
        "{:>8} {:>8} {:>8} {:>18} {:>18} {:>10}",
        "M", "N", "K", "Measured (us)", "Predicted (us)", "Err%"
    );
    let _ = writeln!(out, "{rule}");

    for r in &summary.results {
        let err = match r.percent_error {
            Some(pct) => format!("{pct:.2}"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:>8} {:>8} {:>8} {:>18.6} {:>18.6} {:>10}",
            r.shape.m, r.shape.n, r.shape.k, r.measured_time_usec, r.predicted_time_usec, err
        );
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{} records | total mean squared error: {:.6}",
        summary.count, summary.mean_squared_error
    );
    out
}

/// Pretty JSON rendering of the full summary, for tooling.
pub fn render_json(summary: &EvaluationSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
