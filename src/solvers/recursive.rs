//! Naive recursive solver, no caching.
//!
//! Recomputes every overlapping subproblem, so the running time is
//! exponential in the chain length. It exists as a correctness baseline and
//! a demonstration of the unmemoized recurrence; the public entry point
//! refuses chains long enough to make that cost painful.

use crate::cost::merge_cost;
use crate::error::ChainError;
use crate::sequence::DimensionSequence;

/// Hard ceiling on the stage count accepted by [`brute_force`].
///
/// The recursion tree grows with the Catalan numbers; above roughly this
/// many stages a single call runs for minutes.
pub const BRUTE_FORCE_MAX_STAGES: usize = 20;

/// Minimum cost for the sub-chain `[i, j]`, recomputing every subproblem.
///
/// # Panics
/// On contract breach: requires `1 <= i <= j <= N`.
pub fn solve(i: usize, j: usize, p: &DimensionSequence) -> u64 {
    assert!(
        i >= 1 && i <= j && j <= p.stages(),
        "invalid sub-chain (i={i}, j={j})"
    );
    if i == j {
        return 0;
    }
    let mut best = u64::MAX;
    for k in i..j {
        let candidate = solve(i, k, p) + solve(k + 1, j, p) + merge_cost(p, i, k, j);
        best = best.min(candidate);
    }
    best
}

/// Whole-chain brute force, guarded by [`BRUTE_FORCE_MAX_STAGES`].
///
/// Unsuitable for anything but small demonstrations; prefer
/// [`crate::optimize`] for normal operation.
pub fn brute_force(p: &DimensionSequence) -> Result<u64, ChainError> {
    let stages = p.stages();
    if stages > BRUTE_FORCE_MAX_STAGES {
        return Err(ChainError::BruteForceLimitExceeded {
            stages,
            max: BRUTE_FORCE_MAX_STAGES,
        });
    }
    Ok(solve(1, stages, p))
}
