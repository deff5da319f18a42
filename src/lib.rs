//! Interval-DP optimizer for staged processing chains.
//!
//! Given N+1 boundary dimensions `P[0..=N]`, stage `i` has shape
//! `P[i-1] x P[i]` and joining two adjacent, already-optimized sub-chains at
//! split point `k` costs `P[i-1] * P[k] * P[j]` scalar multiplications. The
//! crate computes the minimum total cost of parenthesizing the whole chain,
//! the classic matrix-chain-order problem.
//!
//! ## Core idea
//! Three solvers share one recurrence and form a ladder from exponential to
//! cubic:
//! 1. [`solvers::recursive`]: the naive recurrence, no caching; correctness
//!    baseline only.
//! 2. [`solvers::memoized`]: top-down with a per-call cache, O(n³).
//! 3. [`solvers::tabulation`]: bottom-up table fill, O(n³), no recursion.
//!
//! [`optimize`] runs the two polynomial solvers on the same sequence, times
//! each, and cross-checks that their costs agree exactly.
//!
//! ## Quick start
//! ```
//! use chain_dp::{optimize, DimensionSequence};
//!
//! let seq = DimensionSequence::new(&[1, 2, 3, 4]).unwrap();
//! let report = optimize(&seq);
//! assert!(report.consistent);
//! assert_eq!(report.cost(), Some(18));
//! ```

pub mod cost;
pub mod error;
pub mod sequence;
pub mod solvers;
pub mod utils;
pub mod verifier;

pub use crate::error::ChainError;
pub use crate::sequence::DimensionSequence;
pub use crate::solvers::recursive::brute_force;
pub use crate::verifier::{optimize, SolveResult, VerificationReport};
