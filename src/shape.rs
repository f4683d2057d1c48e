//! Problem shape for a matrix-multiply-shaped workload.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, PredictResult};

/// The (M, N, K) triple of a GEMM-shaped problem: C[M,N] += A[M,K] · B[K,N].
///
/// Convolutions lowered to GEMM land here too; the model only sees the
/// triple. Every dimension must be at least 1 — M, N, or K equal to 1 is a
/// valid degenerate (vector) case, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemShape {
    pub m: u64,
    pub n: u64,
    pub k: u64,
}

impl ProblemShape {
    /// Validated constructor.
    pub fn new(m: u64, n: u64, k: u64) -> PredictResult<Self> {
        let shape = ProblemShape { m, n, k };
        shape.validate()?;
        Ok(shape)
    }

    /// Check the M,N,K ≥ 1 invariant.
    pub fn validate(&self) -> PredictResult<()> {
        if self.m < 1 || self.n < 1 || self.k < 1 {
            return Err(PredictError::InvalidShape {
                m: self.m,
                n: self.n,
                k: self.k,
            });
        }
        Ok(())
    }

    /// Total multiply-accumulate operations: 2·M·N·K (mul + add per element).
    #[inline]
    pub fn flops(&self) -> f64 {
        2.0 * self.m as f64 * self.n as f64 * self.k as f64
    }

    /// Elements touched by the two input operands: M·K + K·N.
    #[inline]
    pub fn operand_elements(&self) -> f64 {
        self.m as f64 * self.k as f64 + self.k as f64 * self.n as f64
    }
}

impl fmt::Display for ProblemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.m, self.n, self.k)
    }
}
