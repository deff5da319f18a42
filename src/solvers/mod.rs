//! Three interchangeable solvers for the chain recurrence.
//!
//! ```text
//! cost(i, j) = 0                                             if i == j
//! cost(i, j) = min over k in [i, j) of
//!              cost(i, k) + cost(k+1, j) + P[i-1]*P[k]*P[j]  otherwise
//! ```
//!
//! - [`recursive`]  : the naive recurrence, exponential; correctness baseline.
//! - [`memoized`]   : top-down with a per-call cache, O(n³) time, O(n²) space.
//! - [`tabulation`] : bottom-up table fill, same bounds, no recursion.
//!
//! All three return identical costs on identical input; the verifier
//! cross-checks the two polynomial ones on every run.

pub mod memoized;
pub mod recursive;
pub mod tabulation;
