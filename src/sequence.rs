//! Validated boundary-dimension sequences.

use crate::error::ChainError;

/// Ordered boundary dimensions `P[0..=N]` describing a chain of N stages.
///
/// Invariants, enforced at construction and relied on by every solver:
/// - at least 3 entries (N ≥ 2 stages),
/// - every entry strictly positive.
///
/// Immutable once built; solvers borrow it read-only. The caller owns the
/// sequence for however many runs it wants — there is no process-wide
/// "current chain" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSequence {
    dims: Vec<u64>,
}

impl DimensionSequence {
    /// Validate raw caller input and build a sequence.
    ///
    /// Returns an error naming the violated constraint so the caller (CLI,
    /// menu, test harness) can re-prompt and retry.
    pub fn new(dims: &[i64]) -> Result<Self, ChainError> {
        if dims.len() < 3 {
            return Err(ChainError::TooFewDimensions(dims.len()));
        }
        for (index, &value) in dims.iter().enumerate() {
            if value <= 0 {
                return Err(ChainError::NonPositiveDimension { index, value });
            }
        }
        Ok(Self {
            dims: dims.iter().map(|&v| v as u64).collect(),
        })
    }

    /// Number of stages N, one fewer than the number of dimensions.
    #[inline]
    pub fn stages(&self) -> usize {
        self.dims.len() - 1
    }

    /// Boundary dimension `P[idx]`, 0-based over the N+1 entries.
    #[inline]
    pub fn dim(&self, idx: usize) -> u64 {
        self.dims[idx]
    }

    /// All boundary dimensions.
    #[inline]
    pub fn dims(&self) -> &[u64] {
        &self.dims
    }
}
