//! Prime search worker

use crate::output::text;
use crate::partition::Subrange;
use crate::prime::{is_prime, PrimeSink};
use crate::util::console::Console;

/// Searches one subrange for primes
///
/// The worker announces itself exactly once, then appends every prime of its
/// subrange to the sink in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeWorker {
    id: usize,
    range: Subrange,
}

impl PrimeWorker {
    pub fn new(id: usize, range: Subrange) -> Self {
        Self { id, range }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn range(&self) -> Subrange {
        self.range
    }

    /// Announce, then search the whole subrange
    ///
    /// Returns the number of primes emitted.
    pub fn run<S: PrimeSink>(&self, console: &Console, sink: &mut S) -> usize {
        console.line(text::worker_announcement(self.id, self.range));
        tracing::debug!(worker = self.id, start = self.range.start, end = self.range.end, "prime worker started");

        let mut found = 0;
        for value in self.range.values() {
            if is_prime(value) {
                sink.append(value);
                found += 1;
            }
        }

        tracing::debug!(worker = self.id, found, "prime worker finished");
        found
    }
}
