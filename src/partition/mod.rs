//! Range partitioning
//!
//! Splits an inclusive integer interval `[lo, hi]` into contiguous,
//! non-overlapping subranges, one per worker. This is the same idea as the
//! offset-range partitioning a worker pool does over a shared file, applied
//! to integers.
//!
//! # Layout
//!
//! With `s = hi - lo + 1` values and `n' = min(n, s)` workers, every subrange
//! holds `s / n'` values and the first `s % n'` subranges hold one extra.
//! The remainder always goes to the front so worker announcements are
//! reproducible.
//!
//! # Example
//!
//! ```
//! use ensemble::partition::{partition, Subrange};
//!
//! let ranges = partition(10, 20, 4).unwrap();
//! assert_eq!(ranges, vec![
//!     Subrange::new(10, 12),
//!     Subrange::new(13, 15),
//!     Subrange::new(16, 18),
//!     Subrange::new(19, 20),
//! ]);
//! ```

use crate::error::EnsembleError;
use std::fmt;

/// Inclusive integer interval assigned to exactly one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subrange {
    /// First value (inclusive)
    pub start: i64,
    /// Last value (inclusive)
    pub end: i64,
}

impl Subrange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of values covered
    ///
    /// Saturates at `u64::MAX` for the single subrange spanning all of `i64`.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Subranges are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the covered values in ascending order
    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl fmt::Display for Subrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Number of values in `[lo, hi]`
///
/// Computed in `u128` so the full `i64` domain does not overflow.
pub fn range_size(lo: i64, hi: i64) -> u128 {
    u128::from(hi.abs_diff(lo)) + 1
}

/// Effective worker count for `[lo, hi]`: `min(requested, range size)`
pub fn effective_workers(lo: i64, hi: i64, requested: usize) -> usize {
    let size = range_size(lo, hi);
    if (requested as u128) > size {
        // size < requested <= usize::MAX, so the cast is lossless
        size as usize
    } else {
        requested
    }
}

/// Partition `[lo, hi]` across `workers` workers
///
/// Returns `min(workers, hi - lo + 1)` subranges that are contiguous, cover
/// the interval exactly, and whose lengths differ by at most one (longer ones
/// first).
///
/// # Errors
///
/// - [`EnsembleError::InvalidRange`] when `hi < lo`
/// - [`EnsembleError::InvalidWorkerCount`] when `workers == 0`
pub fn partition(lo: i64, hi: i64, workers: usize) -> Result<Vec<Subrange>, EnsembleError> {
    if hi < lo {
        return Err(EnsembleError::InvalidRange { lo, hi });
    }
    if workers == 0 {
        return Err(EnsembleError::InvalidWorkerCount { count: 0 });
    }

    let size = range_size(lo, hi);
    let count = effective_workers(lo, hi, workers);
    let base = size / count as u128;
    let mut remainder = size % count as u128;

    let mut ranges = Vec::with_capacity(count);
    let mut start = i128::from(lo);

    for _ in 0..count {
        let mut len = base;
        if remainder > 0 {
            len += 1;
            remainder -= 1;
        }

        // len >= 1 and the running total never passes hi, so both ends fit in i64
        let end = start + len as i128 - 1;
        ranges.push(Subrange::new(start as i64, end as i64));
        start = end + 1;
    }

    debug_assert_eq!(ranges.last().map(|r| r.end), Some(hi));
    Ok(ranges)
}
