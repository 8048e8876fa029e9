//! Prime number search
//!
//! Holds the primality predicate used by the prime workers and the sink the
//! workers emit into.
//!
//! - [`is_prime`]: trial division up to `⌊√k⌋`
//! - [`sink`]: the shared, append-only result collection

pub mod sink;

pub use sink::{PrimeSink, SharedSink};

/// Primality by trial division
///
/// `k` is prime iff `k >= 2` and no `d` in `[2, ⌊√k⌋]` divides it. The loop
/// bound is written as `d <= k / d` so it cannot overflow near `i64::MAX`.
///
/// # Examples
///
/// ```
/// use ensemble::prime::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 * 13
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(k: i64) -> bool {
    if k < 2 {
        return false;
    }

    let mut d = 2;
    while d <= k / d {
        if k % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
pub(crate) fn sieve(lo: i64, hi: i64) -> Vec<i64> {
    // Reference implementation for tests: Eratosthenes over [0, hi]
    if hi < 2 {
        return Vec::new();
    }
    let limit = hi as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        if n as i64 >= lo {
            primes.push(n as i64);
        }
        let mut multiple = n * n;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}
