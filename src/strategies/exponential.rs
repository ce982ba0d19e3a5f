//! # Exponential backoff.
//!
//! [`ExponentialBackoff`] doubles the delay on every failed attempt:
//! `base × unit × 2^attempt`, with the attempt counter starting at 1.
//!
//! Growth is **uncapped**: there is no maximum-delay ceiling. After enough
//! attempts the computed delay saturates at [`Duration::MAX`](std::time::Duration::MAX)
//! rather than overflowing. Callers needing a ceiling should wrap the policy
//! externally.

use std::time::Duration;

use crate::strategies::strategy::{duration_from_nanos, BackoffStrategy};

/// Backoff strategy with exponentially growing delays.
///
/// Delay for the n-th call since construction or [`reset`](BackoffStrategy::reset)
/// is `base × unit × 2^n` (n starting at 1).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{BackoffStrategy, ExponentialBackoff};
///
/// let mut alg = ExponentialBackoff::new(100, Duration::from_millis(1));
/// assert_eq!(alg.next_delay(), Duration::from_millis(200));
/// assert_eq!(alg.next_delay(), Duration::from_millis(400));
/// assert_eq!(alg.next_delay(), Duration::from_millis(800));
/// ```
#[derive(Debug)]
pub struct ExponentialBackoff {
    base: u64,
    unit: Duration,
    attempt: u32,
}

impl ExponentialBackoff {
    /// Creates an exponential backoff with the given base and time unit.
    ///
    /// Negative `base` values are clamped to `0`, not rejected. The attempt
    /// counter starts at 1, so the first delay is `base × unit × 2`.
    pub fn new(base: i64, unit: Duration) -> Self {
        Self {
            base: base.max(0) as u64,
            unit,
            attempt: 1,
        }
    }
}

impl Default for ExponentialBackoff {
    /// Returns an exponential backoff with `base = 1000` and `unit = 1ms`
    /// (first delay 2s, then 4s, 8s, ...).
    fn default() -> Self {
        Self::new(1000, Duration::from_millis(1))
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&mut self) -> Duration {
        let pow = 1u128.checked_shl(self.attempt).unwrap_or(u128::MAX);
        let nanos = self
            .unit
            .as_nanos()
            .saturating_mul(self.base as u128)
            .saturating_mul(pow);
        self.attempt = self.attempt.saturating_add(1);
        duration_from_nanos(nanos)
    }

    fn reset(&mut self) {
        self.attempt = 1;
    }

    fn fresh(&self) -> Box<dyn BackoffStrategy> {
        Box::new(Self {
            base: self.base,
            unit: self.unit,
            attempt: 1,
        })
    }
}
