//! # RetryPolicy: reusable, shareable retry configuration.
//!
//! [`RetryPolicy`] pairs a **template** backoff strategy with an attempt
//! budget. The template is never used for delays directly: every
//! [`run`](RetryPolicy::run) clones it via
//! [`BackoffStrategy::fresh`] and hands the clone to the executor, so the
//! session owns its progression state exclusively.
//!
//! ## Rules
//! - The template is read-only from `run`'s perspective; a policy can be
//!   shared (`&self`, `Send + Sync`) across arbitrarily many concurrent
//!   callers without external locking.
//! - Concurrent sessions never observe each other's progression state.
//! - `Clone` on the policy clones configuration, not progression (the fresh
//!   clone semantics propagate).

use crate::{
    core::executor::{retry, retry_with_hook},
    error::RetryError,
    strategies::{BackoffStrategy, FixedBackoff},
};
use std::future::Future;

/// Reusable retry configuration: a template strategy plus an attempt budget.
///
/// Construct once, share freely, call [`run`](RetryPolicy::run) per operation.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{ExponentialBackoff, RetryPolicy};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let policy = RetryPolicy::new(
///     Box::new(ExponentialBackoff::new(1, Duration::from_millis(1))),
///     3,
/// );
///
/// let value = policy
///     .run(|| async { Ok::<_, String>("fetched") })
///     .await
///     .unwrap();
/// assert_eq!(value, "fetched");
/// # }
/// ```
pub struct RetryPolicy {
    /// Template strategy; cloned per session, never mutated in place.
    pub template: Box<dyn BackoffStrategy>,
    /// Attempt budget per session (`0` = operations never run).
    pub max_attempts: u32,
}

impl RetryPolicy {
    /// Creates a policy from a template strategy and an attempt budget.
    pub fn new(template: Box<dyn BackoffStrategy>, max_attempts: u32) -> Self {
        Self {
            template,
            max_attempts,
        }
    }

    /// Creates a builder for constructing a policy with a fluent API.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::new()
    }

    /// Runs one retry session for `operation`, silently.
    ///
    /// Clones the template strategy so the session's progression state is
    /// private; the template itself is untouched.
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut session = self.template.fresh();
        retry(session.as_mut(), self.max_attempts, operation).await
    }

    /// Runs one retry session for `operation`, reporting each failed
    /// attempt's error to `on_failure`.
    ///
    /// Same cloning guarantee as [`run`](RetryPolicy::run).
    pub async fn run_with_hook<F, Fut, T, E, H>(
        &self,
        on_failure: H,
        operation: F,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        H: FnMut(&E),
    {
        let mut session = self.template.fresh();
        retry_with_hook(session.as_mut(), self.max_attempts, on_failure, operation).await
    }
}

impl Clone for RetryPolicy {
    /// Clones the configuration: the template is re-created from its original
    /// construction parameters via [`BackoffStrategy::fresh`].
    fn clone(&self) -> Self {
        Self {
            template: self.template.fresh(),
            max_attempts: self.max_attempts,
        }
    }
}

impl Default for RetryPolicy {
    /// Returns a policy with a default [`FixedBackoff`] (1s constant delay)
    /// and 3 attempts.
    fn default() -> Self {
        Self::new(Box::new(FixedBackoff::default()), 3)
    }
}

/// Builder for [`RetryPolicy`] with a fluent API.
pub struct RetryPolicyBuilder {
    template: Box<dyn BackoffStrategy>,
    max_attempts: u32,
}

impl RetryPolicyBuilder {
    /// Creates a builder seeded with the [`RetryPolicy::default`] settings.
    pub fn new() -> Self {
        Self {
            template: Box::new(FixedBackoff::default()),
            max_attempts: 3,
        }
    }

    /// Replaces the template strategy.
    pub fn with_strategy(mut self, strategy: impl BackoffStrategy + 'static) -> Self {
        self.template = Box::new(strategy);
        self
    }

    /// Replaces the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Builds the policy.
    pub fn build(self) -> RetryPolicy {
        RetryPolicy::new(self.template, self.max_attempts)
    }
}

impl Default for RetryPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::ExponentialBackoff;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time;

    fn exponential_policy(attempts: u32) -> RetryPolicy {
        RetryPolicy::new(
            Box::new(ExponentialBackoff::new(10, Duration::from_millis(1))),
            attempts,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_template_is_never_advanced_by_runs() {
        let policy = exponential_policy(3);

        // base=10ms, 3 failures sleep 20 + 40 + 80 = 140ms per session. If a
        // session leaked progression into the template, the second run would
        // start deeper in the doubling sequence and take longer.
        let mut elapsed = Vec::new();
        for _ in 0..2 {
            let started = time::Instant::now();
            let _ = policy
                .run::<_, _, (), _>(|| async { Err("down") })
                .await;
            elapsed.push(started.elapsed());
        }

        assert_eq!(elapsed[0], Duration::from_millis(140));
        assert_eq!(elapsed[1], elapsed[0], "second session saw fresh state");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_sessions_do_not_interfere() {
        let policy = Arc::new(exponential_policy(4));
        let counters: Vec<Arc<AtomicU32>> =
            (0..4).map(|_| Arc::new(AtomicU32::new(0))).collect();

        let mut handles = Vec::new();
        for counter in &counters {
            let policy = Arc::clone(&policy);
            let counter = Arc::clone(counter);
            handles.push(tokio::spawn(async move {
                let _ = policy
                    .run::<_, _, (), _>(|| {
                        counter.fetch_add(1, Ordering::SeqCst);
                        async { Err("down") }
                    })
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for (i, counter) in counters.iter().enumerate() {
            assert_eq!(
                counter.load(Ordering::SeqCst),
                4,
                "session {i} ran a full independent budget"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_hook_reports_each_failure() {
        let policy = exponential_policy(3);
        let mut seen = Vec::new();

        let result = policy
            .run_with_hook::<_, _, (), _, _>(
                |e: &String| seen.push(e.clone()),
                || async { Err("unavailable".to_string()) },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|e| e == "unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clone_copies_configuration_not_progression() {
        let policy = exponential_policy(2);
        let copy = policy.clone();

        // Run the original to exhaustion, then verify the copy still behaves
        // like a fresh configuration.
        let _ = policy.run::<_, _, (), _>(|| async { Err("x") }).await;

        let started = time::Instant::now();
        let _ = copy.run::<_, _, (), _>(|| async { Err("x") }).await;
        assert_eq!(started.elapsed(), Duration::from_millis(60)); // 20 + 40
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let policy = RetryPolicy::builder()
            .with_strategy(ExponentialBackoff::new(5, Duration::from_millis(1)))
            .with_max_attempts(7)
            .build();
        assert_eq!(policy.max_attempts, 7);

        let defaults = RetryPolicyBuilder::new().build();
        assert_eq!(defaults.max_attempts, 3);
    }

    #[test]
    fn test_policy_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RetryPolicy>();
    }
}
