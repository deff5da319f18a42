//! Error taxonomy for the public entry points.
//!
//! Only caller-recoverable conditions get a variant here. Contract breaches
//! inside the solvers (i > j, out-of-range stage indices) are programmer
//! errors and assert instead; see the individual solver docs.

use thiserror::Error;

/// Errors surfaced by sequence construction and the brute-force entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The sequence describes fewer than two stages.
    #[error("dimension sequence needs at least 3 entries (2 stages), got {0}")]
    TooFewDimensions(usize),

    /// A boundary dimension is zero or negative.
    #[error("dimension P[{index}] must be strictly positive, got {value}")]
    NonPositiveDimension { index: usize, value: i64 },

    /// Brute force was asked for a chain beyond its safety ceiling.
    #[error("brute-force solver is capped at {max} stages, got {stages}")]
    BruteForceLimitExceeded { stages: usize, max: usize },
}
