//! Bottom-up solver filling a full cost table.

use crate::cost::merge_cost;
use crate::sequence::DimensionSequence;

/// Square table of sub-chain costs, 1-indexed on both axes.
///
/// Built once per solve call and discarded. The diagonal is fixed at 0; the
/// rest is filled in increasing order of sub-chain length, so `dp[i][k]` and
/// `dp[k+1][j]` are always finalized before `dp[i][j]` reads them.
struct CostTable {
    cells: Vec<Vec<u64>>,
}

impl CostTable {
    fn new(n: usize) -> Self {
        Self {
            cells: vec![vec![0u64; n + 1]; n + 1],
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u64 {
        self.cells[i][j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, cost: u64) {
        self.cells[i][j] = cost;
    }
}

/// Whole-chain minimum cost, bottom-up.
///
/// Same asymptotic bounds as the memoized solver, O(n³) time and O(n²)
/// space, but iterative: stack depth does not grow with the chain length.
pub fn solve(p: &DimensionSequence) -> u64 {
    let n = p.stages();
    let mut dp = CostTable::new(n);

    for len in 2..=n {
        for i in 1..=(n - len + 1) {
            let j = i + len - 1;
            let mut best = u64::MAX;
            for k in i..j {
                let candidate = dp.get(i, k) + dp.get(k + 1, j) + merge_cost(p, i, k, j);
                best = best.min(candidate);
            }
            dp.set(i, j, best);
        }
    }

    dp.get(1, n)
}
