//! # Fibonacci backoff.
//!
//! [`FibonacciBackoff`] walks a fibonacci sequence seeded from caller-chosen
//! start values, default `(0, 1)`. Each call returns `v2 × 1000 × unit` and
//! advances `(v1, v2) ← (v2, v1 + v2)`.
//!
//! The ×1000 scaling is deliberate: with the default 1ms unit it puts this
//! algorithm on a seconds-scale progression (1s, 1s, 2s, 3s, 5s, ...). It is
//! part of the wire-level behavior and must stay.

use std::time::Duration;

use crate::strategies::strategy::{duration_from_nanos, BackoffStrategy};

/// Backoff strategy with delays following a fibonacci sequence.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{BackoffStrategy, FibonacciBackoff};
///
/// let mut alg = FibonacciBackoff::new(0, 1, Duration::from_micros(1));
/// assert_eq!(alg.next_delay(), Duration::from_millis(1)); // 1 × 1000 × 1µs
/// assert_eq!(alg.next_delay(), Duration::from_millis(1));
/// assert_eq!(alg.next_delay(), Duration::from_millis(2));
/// assert_eq!(alg.next_delay(), Duration::from_millis(3));
/// assert_eq!(alg.next_delay(), Duration::from_millis(5));
/// ```
#[derive(Debug)]
pub struct FibonacciBackoff {
    start1: u64,
    start2: u64,
    v1: u64,
    v2: u64,
    unit: Duration,
}

impl FibonacciBackoff {
    /// Creates a fibonacci backoff seeded with `(start1, start2)`.
    ///
    /// `start1` is clamped to `≥ 0` and `start2` to `≥ 1`, silently. The
    /// running pair starts at the seed values.
    pub fn new(start1: i64, start2: i64, unit: Duration) -> Self {
        let start1 = start1.max(0) as u64;
        let start2 = start2.max(1) as u64;
        Self {
            start1,
            start2,
            v1: start1,
            v2: start2,
            unit,
        }
    }
}

impl Default for FibonacciBackoff {
    /// Returns a fibonacci backoff seeded `(0, 1)` with `unit = 1ms`
    /// (delays 1s, 1s, 2s, 3s, 5s, ...).
    fn default() -> Self {
        Self::new(0, 1, Duration::from_millis(1))
    }
}

impl BackoffStrategy for FibonacciBackoff {
    fn next_delay(&mut self) -> Duration {
        let nanos = self
            .unit
            .as_nanos()
            .saturating_mul(self.v2 as u128)
            .saturating_mul(1000);
        (self.v1, self.v2) = (self.v2, self.v1.saturating_add(self.v2));
        duration_from_nanos(nanos)
    }

    fn reset(&mut self) {
        (self.v1, self.v2) = (self.start1, self.start2);
    }

    fn fresh(&self) -> Box<dyn BackoffStrategy> {
        Box::new(Self {
            start1: self.start1,
            start2: self.start2,
            v1: self.start1,
            v2: self.start2,
            unit: self.unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Duration = Duration::from_micros(1);

    #[test]
    fn test_default_seed_progression() {
        let mut alg = FibonacciBackoff::new(0, 1, UNIT);
        let expect = [1u64, 1, 2, 3, 5, 8, 13, 21];
        for (i, &ms) in expect.iter().enumerate() {
            assert_eq!(
                alg.next_delay(),
                Duration::from_millis(ms),
                "step {} of the sequence",
                i
            );
        }
    }

    #[test]
    fn test_custom_seed_progression() {
        let mut alg = FibonacciBackoff::new(2, 3, UNIT);
        assert_eq!(alg.next_delay(), Duration::from_millis(3));
        assert_eq!(alg.next_delay(), Duration::from_millis(5));
        assert_eq!(alg.next_delay(), Duration::from_millis(8));
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut alg = FibonacciBackoff::new(0, 1, UNIT);
        for _ in 0..6 {
            alg.next_delay();
        }
        alg.reset();
        assert_eq!(alg.next_delay(), Duration::from_millis(1));
        assert_eq!(alg.next_delay(), Duration::from_millis(1));
        assert_eq!(alg.next_delay(), Duration::from_millis(2));
    }

    #[test]
    fn test_fresh_discards_progression() {
        let mut alg = FibonacciBackoff::new(0, 1, UNIT);
        for _ in 0..6 {
            alg.next_delay();
        }
        let mut copy = alg.fresh();
        assert_eq!(copy.next_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_negative_seeds_clamp() {
        let mut clamped = FibonacciBackoff::new(-1, 0, UNIT);
        let mut canonical = FibonacciBackoff::new(0, 1, UNIT);
        for _ in 0..5 {
            assert_eq!(clamped.next_delay(), canonical.next_delay());
        }
    }

    #[test]
    fn test_running_pair_saturates() {
        let mut alg = FibonacciBackoff::new(i64::MAX, i64::MAX, Duration::from_secs(1));
        for _ in 0..5 {
            // v1 + v2 saturates at u64::MAX, delay saturates at Duration::MAX
            assert_eq!(alg.next_delay(), Duration::MAX);
        }
    }
}
