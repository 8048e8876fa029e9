//! Prime search coordinator
//!
//! # Lifecycle
//!
//! 1. **Partition**: split `[min, max]` into one subrange per worker
//! 2. **Spawn**: start the workers in id order, each on its own thread
//! 3. **Join**: wait for every worker; a failed worker is logged, not fatal
//! 4. **Sort**: reclaim the sink exclusively and sort it once
//! 5. **Report**: print the primes and their count
//!
//! # Example
//!
//! ```
//! use ensemble::config::{PrimeConfig, SinkMode};
//! use ensemble::coordinator::PrimeCoordinator;
//! use ensemble::util::console::Console;
//!
//! let config = PrimeConfig { min: 1, max: 10, threads: 2, sink: SinkMode::Shared };
//! let (console, _output) = Console::capture();
//!
//! let report = PrimeCoordinator::new(config, console).run()?;
//! assert_eq!(report.primes, vec![2, 3, 5, 7]);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::report_join_failure;
use crate::config::{PrimeConfig, SinkMode};
use crate::output::text;
use crate::partition::{partition, Subrange};
use crate::prime::SharedSink;
use crate::util::console::Console;
use crate::worker::PrimeWorker;
use crate::Result;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Result of a prime search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeReport {
    /// Subrange assigned to each worker, by worker id
    pub ranges: Vec<Subrange>,
    /// Primes found, ascending
    pub primes: Vec<i64>,
    /// Ids of workers that terminated abnormally
    pub failed_workers: Vec<usize>,
}

impl PrimeReport {
    pub fn count(&self) -> usize {
        self.primes.len()
    }
}

/// Runs the prime ensemble
#[derive(Debug)]
pub struct PrimeCoordinator {
    config: PrimeConfig,
    console: Console,
}

impl PrimeCoordinator {
    pub fn new(config: PrimeConfig, console: Console) -> Self {
        Self { config, console }
    }

    /// Partition, spawn, join, sort, report
    ///
    /// # Errors
    ///
    /// Fails before spawning anything when the configured range or worker
    /// count is invalid, and when a worker thread cannot be spawned. In the
    /// latter case the workers already started are joined first.
    pub fn run(&self) -> Result<PrimeReport> {
        let ranges = partition(self.config.min, self.config.max, self.config.threads)?;
        tracing::debug!(workers = ranges.len(), sink = ?self.config.sink, "starting prime search");

        let sink = Arc::new(SharedSink::new());
        let handles = spawn_all(&ranges, &sink, |worker, sink| self.spawn_worker(worker, sink))?;

        // Join every worker before touching the results
        let failed_workers = join_workers(handles, &sink);

        // All worker handles are gone, so the sink is quiescent
        let sink = Arc::try_unwrap(sink)
            .map_err(|_| anyhow::anyhow!("prime sink still shared after all workers were joined"))?;
        let primes = sink.into_sorted();

        self.console.line(text::ALL_WORKERS_FINISHED);
        self.console.line(text::prime_list(&primes));
        self.console.line(text::prime_count(primes.len()));

        Ok(PrimeReport {
            ranges,
            primes,
            failed_workers,
        })
    }

    /// Start one worker thread
    ///
    /// In shared mode the worker appends straight into `sink` and returns an
    /// empty buffer; in per-worker mode it returns its private buffer for the
    /// coordinator to merge.
    fn spawn_worker(
        &self,
        worker: PrimeWorker,
        sink: &Arc<SharedSink>,
    ) -> io::Result<JoinHandle<Vec<i64>>> {
        let console = self.console.clone();
        let builder = thread::Builder::new().name(format!("prime-worker-{}", worker.id()));

        match self.config.sink {
            SinkMode::Shared => {
                let mut sink = Arc::clone(sink);
                builder.spawn(move || {
                    worker.run(&console, &mut sink);
                    Vec::new()
                })
            }
            SinkMode::PerWorker => builder.spawn(move || {
                let mut buffer = Vec::new();
                worker.run(&console, &mut buffer);
                buffer
            }),
        }
    }
}

/// Spawn one worker per range, in id order
///
/// If a spawn fails, the workers already running are joined before the error
/// is returned, so none outlives the call.
fn spawn_all<F>(
    ranges: &[Subrange],
    sink: &Arc<SharedSink>,
    mut spawn: F,
) -> Result<Vec<JoinHandle<Vec<i64>>>>
where
    F: FnMut(PrimeWorker, &Arc<SharedSink>) -> io::Result<JoinHandle<Vec<i64>>>,
{
    let mut handles = Vec::with_capacity(ranges.len());
    for (id, range) in ranges.iter().copied().enumerate() {
        match spawn(PrimeWorker::new(id, range), sink) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                join_workers(handles, sink);
                return Err(anyhow::Error::new(err)
                    .context(format!("Failed to spawn prime worker {}", id)));
            }
        }
    }
    Ok(handles)
}

/// Join workers in id order, merging returned buffers into `sink`
///
/// Returns the ids of workers that terminated abnormally.
fn join_workers(handles: Vec<JoinHandle<Vec<i64>>>, sink: &SharedSink) -> Vec<usize> {
    let mut failed = Vec::new();
    for (id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(buffer) => sink.extend(buffer),
            Err(_) => {
                report_join_failure(format!("prime worker {}", id));
                failed.push(id);
            }
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator::validate_prime_bounds;
    use crate::config::PrimeSettings;
    use crate::prime::sieve;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn run_search(min: i64, max: i64, threads: i64, sink: SinkMode) -> (PrimeReport, Vec<String>) {
        let settings = PrimeSettings { sink };
        let config = validate_prime_bounds(min, max, threads, &settings).unwrap();
        let (console, capture) = Console::capture();
        let report = PrimeCoordinator::new(config, console).run().unwrap();
        (report, capture.lines())
    }

    fn announcements(lines: &[String]) -> Vec<String> {
        let mut found: Vec<String> = lines
            .iter()
            .filter(|line| line.starts_with("Thread "))
            .cloned()
            .collect();
        // Workers announce concurrently
        found.sort();
        found
    }

    #[test]
    fn test_two_workers() {
        let (report, lines) = run_search(1, 10, 2, SinkMode::Shared);

        assert_eq!(
            announcements(&lines),
            vec!["Thread 0 searching range [1, 5]", "Thread 1 searching range [6, 10]"]
        );
        assert_eq!(
            &lines[2..],
            &[
                "Main Thread: All workers finished. Primes found:",
                "2 3 5 7 ",
                "Main Thread: 4 prime numbers found.",
            ]
        );
        assert_eq!(report.count(), 4);
        assert!(report.failed_workers.is_empty());
    }

    #[test]
    fn test_uneven_split() {
        let (report, lines) = run_search(10, 20, 4, SinkMode::Shared);

        let starts: Vec<i64> = report.ranges.iter().map(|r| r.start).collect();
        let lens: Vec<u64> = report.ranges.iter().map(|r| r.len()).collect();
        assert_eq!(starts, vec![10, 13, 16, 19]);
        assert_eq!(lens, vec![3, 3, 3, 2]);
        assert_eq!(report.primes, vec![11, 13, 17, 19]);
        assert_eq!(lines.last().unwrap(), "Main Thread: 4 prime numbers found.");
    }

    #[test]
    fn test_clamped_single_worker() {
        let (report, lines) = run_search(5, 5, 10, SinkMode::Shared);
        assert_eq!(report.ranges, vec![Subrange::new(5, 5)]);
        assert_eq!(report.primes, vec![5]);
        assert_eq!(lines[0], "Thread 0 searching range [5, 5]");
        assert_eq!(lines[2], "5 ");
        assert_eq!(lines[3], "Main Thread: 1 prime numbers found.");
    }

    #[test]
    fn test_no_primes() {
        let (report, lines) = run_search(1, 1, 1, SinkMode::Shared);
        assert!(report.primes.is_empty());
        assert_eq!(
            lines,
            vec![
                "Thread 0 searching range [1, 1]",
                "Main Thread: All workers finished. Primes found:",
                "",
                "Main Thread: 0 prime numbers found.",
            ]
        );
    }

    #[test]
    fn test_invalid_config_spawns_nothing() {
        let config = PrimeConfig { min: 7, max: 3, threads: 2, sink: SinkMode::Shared };
        let (console, capture) = Console::capture();
        let result = PrimeCoordinator::new(config, console).run();
        assert!(result.is_err());
        assert!(capture.contents().is_empty());
    }

    #[test]
    fn test_matches_sieve_in_both_modes() {
        let expected = sieve(0, 3000);
        for mode in [SinkMode::Shared, SinkMode::PerWorker] {
            for threads in [1, 2, 3, 7, 16] {
                let (report, _) = run_search(0, 3000, threads, mode);
                assert_eq!(report.primes, expected, "{:?} with {} threads", mode, threads);
                assert_eq!(report.count(), expected.len());
            }
        }
    }

    #[test]
    fn test_repeat_runs_agree() {
        let (first, _) = run_search(100, 900, 6, SinkMode::Shared);
        let (second, _) = run_search(100, 900, 6, SinkMode::PerWorker);
        assert_eq!(first.primes, second.primes);
        assert_eq!(first.ranges, second.ranges);
    }

    #[test]
    fn test_negative_range() {
        let (report, _) = run_search(-20, 12, 4, SinkMode::Shared);
        assert_eq!(report.primes, vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_spawn_failure_joins_started_workers() {
        let ranges = partition(1, 30, 3).unwrap();
        let sink = Arc::new(SharedSink::new());
        let finished = Arc::new(AtomicUsize::new(0));

        let result = spawn_all(&ranges, &sink, |worker, sink| {
            if worker.id() == 2 {
                return Err(io::Error::new(io::ErrorKind::Other, "thread limit reached"));
            }
            let mut sink = Arc::clone(sink);
            let finished = Arc::clone(&finished);
            thread::Builder::new().spawn(move || {
                thread::sleep(Duration::from_millis(20));
                let (console, _) = Console::capture();
                worker.run(&console, &mut sink);
                finished.fetch_add(1, Ordering::SeqCst);
                Vec::new()
            })
        });

        let err = result.unwrap_err();
        assert!(err.to_string().contains("prime worker 2"));
        assert_eq!(finished.load(Ordering::SeqCst), 2);
        assert_eq!(Arc::strong_count(&sink), 1);
    }
}
