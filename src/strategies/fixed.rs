//! # Fixed-interval backoff.
//!
//! [`FixedBackoff`] returns the same delay on every call: `interval × unit`.
//! There is no progression state, so [`reset`](crate::BackoffStrategy::reset)
//! is a no-op. Use it when retries should not escalate.

use std::time::Duration;

use crate::strategies::strategy::{duration_from_nanos, BackoffStrategy};

/// Backoff strategy with a constant delay.
///
/// Delay is `interval × unit` on every call.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{BackoffStrategy, FixedBackoff};
///
/// let mut alg = FixedBackoff::new(250, Duration::from_millis(1));
/// assert_eq!(alg.next_delay(), Duration::from_millis(250));
/// assert_eq!(alg.next_delay(), Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct FixedBackoff {
    interval: u64,
    unit: Duration,
}

impl FixedBackoff {
    /// Creates a fixed backoff with the given interval and time unit.
    ///
    /// Negative `interval` values are clamped to `0`, not rejected.
    pub fn new(interval: i64, unit: Duration) -> Self {
        Self {
            interval: interval.max(0) as u64,
            unit,
        }
    }
}

impl Default for FixedBackoff {
    /// Returns a fixed backoff of `1000 × 1ms` (one second per retry).
    fn default() -> Self {
        Self::new(1000, Duration::from_millis(1))
    }
}

impl BackoffStrategy for FixedBackoff {
    fn next_delay(&mut self) -> Duration {
        duration_from_nanos(self.unit.as_nanos().saturating_mul(self.interval as u128))
    }

    fn reset(&mut self) {
        // no progression state
    }

    fn fresh(&self) -> Box<dyn BackoffStrategy> {
        Box::new(Self {
            interval: self.interval,
            unit: self.unit,
        })
    }
}
