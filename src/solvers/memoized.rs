//! Top-down solver with per-call memoization.

use std::collections::HashMap;

use crate::cost::merge_cost;
use crate::sequence::DimensionSequence;

/// Cache of sub-chain costs keyed by `(i, j)`.
///
/// Scoped to a single solve session over a single [`DimensionSequence`]. The
/// key does not identify the sequence, so a cache populated by one sequence
/// and reused with another returns stale costs computed from the old
/// dimensions. Construct a fresh cache per call; [`crate::optimize`] does.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: HashMap<(usize, usize), u64>,
}

impl MemoCache {
    /// Empty cache for one solve session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct sub-chains cached so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Minimum cost for the sub-chain `[i, j]`, consulting and populating
/// `cache`.
///
/// Same recurrence as [`crate::solvers::recursive::solve`], but each of the
/// O(n²) distinct sub-chains is computed once and the split scan is O(n),
/// giving O(n³) time and O(n²) space overall.
///
/// # Panics
/// On contract breach: requires `1 <= i <= j <= N`.
pub fn solve(i: usize, j: usize, p: &DimensionSequence, cache: &mut MemoCache) -> u64 {
    assert!(
        i >= 1 && i <= j && j <= p.stages(),
        "invalid sub-chain (i={i}, j={j})"
    );
    if i == j {
        return 0;
    }
    if let Some(&cost) = cache.entries.get(&(i, j)) {
        return cost;
    }
    let mut best = u64::MAX;
    for k in i..j {
        let candidate = solve(i, k, p, cache) + solve(k + 1, j, p, cache) + merge_cost(p, i, k, j);
        best = best.min(candidate);
    }
    cache.entries.insert((i, j), best);
    best
}

#[cfg(test)]
mod tests {
    use super::{solve, MemoCache};
    use crate::sequence::DimensionSequence;

    #[test]
    fn textbook_three_stage_chain() {
        let p = DimensionSequence::new(&[1, 2, 3, 4]).unwrap();
        let mut cache = MemoCache::new();
        assert_eq!(solve(1, 3, &p, &mut cache), 18);
    }

    #[test]
    fn caches_every_multi_stage_sub_chain() {
        let p = DimensionSequence::new(&[1, 2, 3, 4]).unwrap();
        let mut cache = MemoCache::new();
        solve(1, 3, &p, &mut cache);
        // (1,2), (2,3), (1,3); single-stage ranges are never stored.
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn base_case_bypasses_the_cache() {
        let p = DimensionSequence::new(&[5, 6, 7, 8]).unwrap();
        let mut cache = MemoCache::new();
        assert_eq!(solve(2, 2, &p, &mut cache), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn clrs_six_stage_chain() {
        let p = DimensionSequence::new(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
        let mut cache = MemoCache::new();
        assert_eq!(solve(1, 6, &p, &mut cache), 15125);
    }
}
