//! Cross-validation of the two polynomial solvers.
//!
//! Runs the memoized and tabulated solvers on the same sequence, times each
//! leg, and compares the costs exactly. Costs are integers, so there is no
//! tolerance: a mismatch can only come from an implementation defect (stale
//! cache reuse, off-by-one in loop bounds) and the report carries it as an
//! explicit flag instead of picking a winner.

use std::time::Duration;

use crate::sequence::DimensionSequence;
use crate::solvers::memoized::{self, MemoCache};
use crate::solvers::tabulation;
use crate::utils::timed;

/// One solver leg: the cost it computed and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveResult {
    pub cost: u64,
    pub elapsed: Duration,
}

/// Outcome of one cross-validated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    /// Top-down leg, run with a fresh cache.
    pub memoized: SolveResult,
    /// Bottom-up leg.
    pub tabulated: SolveResult,
    /// Exact equality of the two costs. `false` signals a solver defect,
    /// not a problem with the input.
    pub consistent: bool,
}

impl VerificationReport {
    /// The agreed minimum cost, if the legs are consistent.
    pub fn cost(&self) -> Option<u64> {
        self.consistent.then_some(self.tabulated.cost)
    }
}

/// Run both polynomial solvers on `seq` and cross-check them.
///
/// The sequence type already guarantees N ≥ 2 and positive dimensions, so
/// this never fails; invalid input is rejected at
/// [`DimensionSequence::new`].
pub fn optimize(seq: &DimensionSequence) -> VerificationReport {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("optimize", stages = seq.stages());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = seq.stages();

    let (memo_cost, memo_elapsed) = timed(|| {
        let mut cache = MemoCache::new();
        memoized::solve(1, n, seq, &mut cache)
    });
    #[cfg(feature = "tracing")]
    tracing::debug!(cost = memo_cost, elapsed = ?memo_elapsed, "memoized leg done");

    let (tab_cost, tab_elapsed) = timed(|| tabulation::solve(seq));
    #[cfg(feature = "tracing")]
    tracing::debug!(cost = tab_cost, elapsed = ?tab_elapsed, "tabulated leg done");

    let consistent = memo_cost == tab_cost;
    #[cfg(feature = "tracing")]
    if !consistent {
        tracing::error!(memo_cost, tab_cost, "solver disagreement");
    }

    VerificationReport {
        memoized: SolveResult {
            cost: memo_cost,
            elapsed: memo_elapsed,
        },
        tabulated: SolveResult {
            cost: tab_cost,
            elapsed: tab_elapsed,
        },
        consistent,
    }
}
