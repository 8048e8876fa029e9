//! Shared prime sink
//!
//! Workers append primes concurrently; the coordinator sorts and reads the
//! result once every worker has been joined.
//!
//! # Quiescence
//!
//! [`SharedSink::append`] takes `&self` and serializes writers through a
//! mutex. [`SharedSink::sort`] and [`SharedSink::snapshot`] take `&mut self`,
//! so they are only reachable once the coordinator owns the sink exclusively,
//! i.e. after every worker's `Arc` handle is gone. The borrow checker rules
//! out a sort racing an append.
//!
//! # Per-worker buffers
//!
//! A plain `Vec<i64>` also implements [`PrimeSink`]. Workers can fill a
//! private buffer with no contention and the coordinator merges the buffers
//! with [`SharedSink::extend`] after join. After the sort both layouts are
//! indistinguishable.

use std::sync::{Arc, Mutex, PoisonError};

/// Destination for primes found by a worker
pub trait PrimeSink {
    /// Record one value
    fn append(&mut self, value: i64);
}

/// Mutex-guarded, append-only collection of primes
#[derive(Debug, Default)]
pub struct SharedSink {
    values: Mutex<Vec<i64>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value; safe to call from any number of threads
    ///
    /// A poisoned lock only means another worker panicked mid-push, and a
    /// `Vec::push` leaves the vector consistent either way, so the values
    /// are still usable.
    pub fn append(&self, value: i64) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Merge a batch of values under a single lock acquisition
    pub fn extend<I>(&self, values: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(values);
    }

    /// Sort ascending; requires exclusive access
    pub fn sort(&mut self) {
        self.values_mut().sort_unstable();
    }

    /// Current contents; requires exclusive access
    pub fn snapshot(&mut self) -> &[i64] {
        self.values_mut()
    }

    /// Number of values appended so far
    pub fn len(&mut self) -> usize {
        self.values_mut().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Consume the sink and return its values in ascending order
    pub fn into_sorted(mut self) -> Vec<i64> {
        self.sort();
        self.values
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn values_mut(&mut self) -> &mut Vec<i64> {
        self.values
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PrimeSink for &SharedSink {
    fn append(&mut self, value: i64) {
        SharedSink::append(self, value);
    }
}

impl PrimeSink for Arc<SharedSink> {
    fn append(&mut self, value: i64) {
        SharedSink::append(self, value);
    }
}

impl PrimeSink for Vec<i64> {
    fn append(&mut self, value: i64) {
        self.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_append_and_sort() {
        let mut sink = SharedSink::new();
        sink.append(7);
        sink.append(2);
        sink.append(5);
        assert_eq!(sink.len(), 3);

        sink.sort();
        assert_eq!(sink.snapshot(), &[2, 5, 7]);
    }

    #[test]
    fn test_empty_sink() {
        let mut sink = SharedSink::new();
        assert!(sink.is_empty());
        assert!(sink.into_sorted().is_empty());
    }

    #[test]
    fn test_concurrent_appends_keep_every_value() {
        let sink = Arc::new(SharedSink::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let mut sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..1000 {
                        PrimeSink::append(&mut sink, worker * 1000 + i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let sink = Arc::try_unwrap(sink).unwrap();
        let values = sink.into_sorted();
        assert_eq!(values, (0..8000).collect::<Vec<i64>>());
    }

    #[test]
    fn test_merge_per_worker_buffers() {
        let mut first: Vec<i64> = Vec::new();
        let mut second: Vec<i64> = Vec::new();
        PrimeSink::append(&mut first, 11);
        PrimeSink::append(&mut first, 13);
        PrimeSink::append(&mut second, 2);

        let sink = SharedSink::new();
        sink.extend(second);
        sink.extend(first);
        assert_eq!(sink.into_sorted(), vec![2, 11, 13]);
    }

    #[test]
    fn test_borrowed_sink() {
        let shared = SharedSink::new();
        let mut handle = &shared;
        handle.append(3);
        PrimeSink::append(&mut handle, 1);
        assert_eq!(shared.into_sorted(), vec![1, 3]);
    }
}
