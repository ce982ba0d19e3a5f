//! # Backoff strategy contract.
//!
//! Defines [`BackoffStrategy`] the capability set every delay algorithm
//! implements, plus a shared saturating conversion helper for delay math.
//!
//! A strategy bundles two kinds of data:
//! - **Construction parameters** (immutable): base/interval/start values and
//!   the time unit, fixed at construction.
//! - **Progression state** (mutable): counters or running values that advance
//!   on every [`next_delay`](BackoffStrategy::next_delay) call.
//!
//! ## Rules
//! - [`next_delay`](BackoffStrategy::next_delay) computes the delay for the
//!   current position, **then** advances progression state.
//! - [`reset`](BackoffStrategy::reset) restores progression state to the exact
//!   identity position of a freshly constructed instance.
//! - [`fresh`](BackoffStrategy::fresh) builds a new instance from the original
//!   construction parameters — an unstarted strategy, never a snapshot of
//!   in-flight progress.
//!
//! A strategy value is **not** safe for concurrent use: progression state is
//! mutable and unsynchronized, which the `&mut self` receivers make explicit.
//! Share a [`RetryPolicy`](crate::RetryPolicy) instead; it clones per session.

use std::time::Duration;

/// Pluggable algorithm computing successive retry delays.
///
/// Implemented by [`FixedBackoff`](crate::FixedBackoff),
/// [`ExponentialBackoff`](crate::ExponentialBackoff),
/// [`ExponentialJitterBackoff`](crate::ExponentialJitterBackoff) and
/// [`FibonacciBackoff`](crate::FibonacciBackoff).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{BackoffStrategy, ExponentialBackoff};
///
/// let mut alg = ExponentialBackoff::new(100, Duration::from_millis(1));
/// assert_eq!(alg.next_delay(), Duration::from_millis(200)); // 100 × 2^1
/// assert_eq!(alg.next_delay(), Duration::from_millis(400)); // 100 × 2^2
///
/// alg.reset();
/// assert_eq!(alg.next_delay(), Duration::from_millis(200)); // back to identity
/// ```
pub trait BackoffStrategy: Send + Sync {
    /// Returns the delay for the current progression position, then advances
    /// the internal state.
    ///
    /// Pure computation: no sleeping happens here. The executor composes this
    /// with `tokio::time::sleep`.
    fn next_delay(&mut self) -> Duration;

    /// Restores progression state to the identity position, as if the
    /// strategy had just been constructed.
    fn reset(&mut self);

    /// Returns a new, unstarted instance built from the original construction
    /// parameters.
    ///
    /// Progression state is **not** carried over: the result behaves exactly
    /// like a freshly constructed strategy with the same parameters.
    fn fresh(&self) -> Box<dyn BackoffStrategy>;
}

/// Converts a nanosecond count into a [`Duration`], saturating at
/// [`Duration::MAX`] instead of panicking on overflow.
///
/// Uncapped algorithms (exponential, fibonacci) can overflow `u64` nanoseconds
/// after enough failed attempts; saturation keeps delay math total.
pub(crate) fn duration_from_nanos(nanos: u128) -> Duration {
    u64::try_from(nanos)
        .map(Duration::from_nanos)
        .unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_nanos_exact() {
        assert_eq!(
            duration_from_nanos(1_500_000_000),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_duration_from_nanos_saturates() {
        assert_eq!(duration_from_nanos(u128::MAX), Duration::MAX);
        assert_eq!(duration_from_nanos(u64::MAX as u128 + 1), Duration::MAX);
    }
}
