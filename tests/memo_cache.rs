//! Regression coverage for memo-cache lifetime.
//!
//! The cache key is `(i, j)` only, not the dimension sequence, so a cache
//! populated by one sequence silently poisons a solve over another. The
//! verifier constructs a fresh cache per run; these tests pin down both the
//! hazard and the fix.

use chain_dp::solvers::memoized::{self, MemoCache};
use chain_dp::{optimize, DimensionSequence};

#[test]
fn reusing_a_cache_across_sequences_returns_stale_costs() {
    let small = DimensionSequence::new(&[1, 2, 3, 4]).unwrap();
    let large = DimensionSequence::new(&[10, 20, 30, 40]).unwrap();

    let mut cache = MemoCache::new();
    assert_eq!(memoized::solve(1, 3, &small, &mut cache), 18);

    // The (1, 3) entry computed from `small` shadows the real answer.
    let stale = memoized::solve(1, 3, &large, &mut cache);
    assert_eq!(stale, 18);

    let mut fresh = MemoCache::new();
    assert_eq!(memoized::solve(1, 3, &large, &mut fresh), 18_000);
}

#[test]
fn fresh_cache_per_run_keeps_back_to_back_runs_correct() {
    let small = DimensionSequence::new(&[1, 2, 3, 4]).unwrap();
    let large = DimensionSequence::new(&[10, 20, 30, 40]).unwrap();

    assert_eq!(optimize(&small).cost(), Some(18));
    assert_eq!(optimize(&large).cost(), Some(18_000));
    // Order must not matter either.
    assert_eq!(optimize(&small).cost(), Some(18));
}
