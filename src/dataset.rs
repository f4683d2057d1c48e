//! Reference dataset ingestion (DeepBench text format).
//!
//! One whitespace-delimited row per measurement: the first three fields
//! are M, N, K and the last field is the measured time in microseconds.
//! Columns in between (transpose flags, library names) are ignored. The
//! first line of the file is a header and is skipped.
//!
//! Parse failures abort the load — a dataset with a malformed row never
//! reaches the evaluator. Line numbers in errors are 1-based and count
//! the header.

use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::eval::BenchmarkRecord;
use crate::shape::ProblemShape;

#[derive(Debug, Error)]
pub enum RecordParseError {
    #[error("line {line}: expected at least 4 fields `M N K ... time_usec`, got {found}")]
    TooFewFields { line: usize, found: usize },

    #[error("line {line}: invalid {field} {token:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("line {line}: invalid shape {m}x{n}x{k}: every dimension must be at least 1")]
    InvalidShape { line: usize, m: u64, n: u64, k: u64 },

    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse a dataset file.
pub fn load_records(path: &Path) -> Result<Vec<BenchmarkRecord>, RecordParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| RecordParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = parse_records(&text)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse dataset text. The first line is the header; blank lines are
/// skipped.
pub fn parse_records(text: &str) -> Result<Vec<BenchmarkRecord>, RecordParseError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, line_no)?);
    }
    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> Result<BenchmarkRecord, RecordParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(RecordParseError::TooFewFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let m = parse_dim(fields[0], "M", line_no)?;
    let n = parse_dim(fields[1], "N", line_no)?;
    let k = parse_dim(fields[2], "K", line_no)?;

    let time_token = fields[fields.len() - 1];
    let measured_time_usec: f64 =
        time_token.parse().map_err(|_| RecordParseError::InvalidField {
            line: line_no,
            field: "measured time",
            token: time_token.to_string(),
        })?;

    let shape = ProblemShape::new(m, n, k)
        .map_err(|_| RecordParseError::InvalidShape { line: line_no, m, n, k })?;

    Ok(BenchmarkRecord {
        shape,
        measured_time_usec,
    })
}

fn parse_dim(token: &str, field: &'static str, line_no: usize) -> Result<u64, RecordParseError> {
    token.parse().map_err(|_| RecordParseError::InvalidField {
        line: line_no,
        field,
        token: token.to_string(),
    })
}
