//! Assorted small helpers.

use std::time::{Duration, Instant};

/// Run `f` and return its output together with elapsed wall-clock time.
#[inline]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::timed;
    use std::time::Duration;

    #[test]
    fn passes_output_through() {
        let (out, elapsed) = timed(|| 41 + 1);
        assert_eq!(out, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
