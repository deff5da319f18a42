//! Interconnection cost of joining two optimized sub-chains.

use crate::sequence::DimensionSequence;

/// Cost of joining `[i, k]` and `[k+1, j]` into one block:
/// `P[i-1] * P[k] * P[j]`.
///
/// Stage indices are 1-based, matching the recurrence; `p` is the 0-based
/// dimension array. Pure function.
///
/// # Panics
/// On contract breach: requires `1 <= i <= k < j <= N`.
#[inline]
pub fn merge_cost(p: &DimensionSequence, i: usize, k: usize, j: usize) -> u64 {
    assert!(
        i >= 1 && i <= k && k < j && j <= p.stages(),
        "invalid split (i={i}, k={k}, j={j})"
    );
    p.dim(i - 1) * p.dim(k) * p.dim(j)
}
