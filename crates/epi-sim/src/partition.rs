//! Index-range partitioning for the parallel executor.

use std::ops::Range;

/// Split `0..len` into `workers` contiguous, non-overlapping ranges covering
/// every index exactly once.
///
/// Each worker gets `len / workers` indices; the last range absorbs the
/// remainder.  With `workers > len` the leading ranges are empty and the last
/// one takes everything — degenerate but valid.
///
/// # Panics
/// Panics if `workers` is zero (callers validate via `RunConfig`).
pub fn split(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "worker count must be at least 1");

    let chunk = len / workers;
    let mut ranges = Vec::with_capacity(workers);
    for rank in 0..workers {
        let start = rank * chunk;
        let end = if rank == workers - 1 { len } else { (rank + 1) * chunk };
        ranges.push(start..end);
    }

    debug_assert!(covers_exactly(&ranges, len));
    ranges
}

/// `true` if `ranges` tile `0..len` contiguously with no gap or overlap.
pub(crate) fn covers_exactly(ranges: &[Range<usize>], len: usize) -> bool {
    let mut next = 0;
    for range in ranges {
        if range.start != next || range.end < range.start {
            return false;
        }
        next = range.end;
    }
    next == len
}
