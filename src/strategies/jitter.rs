//! # Exponential backoff with jitter.
//!
//! [`ExponentialJitterBackoff`] follows the same doubling progression as
//! [`ExponentialBackoff`](crate::ExponentialBackoff) but multiplies each delay
//! by a random factor in `[0.5, 1.5)`:
//!
//! ```text
//! delay = base × (2^attempt × (U + 0.5)) × unit,   U ∈ [0, 1) fresh per call
//! ```
//!
//! The non-determinism is intentional: it desynchronizes many concurrent
//! retrying callers so they do not hammer a recovering dependency in lockstep
//! (thundering herd).

use std::time::Duration;

use rand::Rng;

use crate::strategies::strategy::BackoffStrategy;

/// Exponential backoff with multiplicative jitter in `[0.5, 1.5)`.
///
/// The n-th delay falls in `[base × unit × 2^n × 0.5, base × unit × 2^n × 1.5)`
/// with n starting at 1.
#[derive(Debug)]
pub struct ExponentialJitterBackoff {
    base: u64,
    unit: Duration,
    attempt: u32,
}

impl ExponentialJitterBackoff {
    /// Creates a jittered exponential backoff with the given base and time unit.
    ///
    /// Negative `base` values are clamped to `0`, not rejected. The attempt
    /// counter starts at 1, so the first delay centers on `base × unit × 2`.
    pub fn new(base: i64, unit: Duration) -> Self {
        Self {
            base: base.max(0) as u64,
            unit,
            attempt: 1,
        }
    }
}

impl Default for ExponentialJitterBackoff {
    /// Returns a jittered exponential backoff with `base = 1000` and
    /// `unit = 1ms` (first delay in `[1s, 3s)`).
    fn default() -> Self {
        Self::new(1000, Duration::from_millis(1))
    }
}

impl BackoffStrategy for ExponentialJitterBackoff {
    fn next_delay(&mut self) -> Duration {
        let mut rng = rand::rng();
        let factor = 2f64.powi(self.attempt.min(i32::MAX as u32) as i32) * (rng.random::<f64>() + 0.5);
        let secs = self.unit.as_secs_f64() * self.base as f64 * factor;
        self.attempt = self.attempt.saturating_add(1);

        if !secs.is_finite() || secs < 0.0 {
            return Duration::MAX;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
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
