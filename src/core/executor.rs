//! # Retry executor: the attempt loop.
//!
//! Runs one retry session: invoke the operation, and on failure report the
//! error to the hook, ask the strategy for a delay, sleep, and try again —
//! until success or the attempt budget is exhausted.
//!
//! ## Flow
//! ```text
//! loop attempt = 1..=max_attempts {
//!   ├─► invoke operation
//!   │       │
//!   │       ├─ Ok(v)  ──► strategy.reset() ─► return Ok(v)
//!   │       │
//!   │       └─ Err(e) ──► hook(&e)
//!   │                     record e as last error
//!   │                     delay = strategy.next_delay()
//!   │                     sleep(delay)      (final failing attempt included)
//!   │                     continue
//! }
//! exhausted ──► strategy.reset() ─► Err(Exhausted { attempts, last })
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially**; the loop exits on the **first** success.
//! - The hook fires once per failed attempt, never on success, and the final
//!   exhausting failure is reported no differently than intermediate ones.
//! - The strategy is reset on **every** terminal outcome, so a reused
//!   strategy value always starts the next session from its identity state.
//! - `max_attempts == 0` runs zero attempts and yields
//!   [`RetryError::NotAttempted`] without touching operation, hook, or clock.
//!
//! The operation is a closure producing a fresh future per attempt, so
//! argument binding happens at the call site and there is no runtime
//! "is this callable" check to fail.

use std::future::Future;

use tokio::time;

use crate::{error::RetryError, strategies::BackoffStrategy};

/// Retries `operation` until it succeeds or `max_attempts` is exhausted,
/// without reporting intermediate failures anywhere.
///
/// Equivalent to [`retry_with_hook`] with a no-op hook. Use that entry point
/// to observe per-attempt errors (logging, metrics).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use retrykit::{retry, FixedBackoff};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut strategy = FixedBackoff::new(1, Duration::from_millis(1));
/// let value = retry(&mut strategy, 3, || async { Ok::<_, String>(42) })
///     .await
///     .unwrap();
/// assert_eq!(value, 42);
/// # }
/// ```
pub async fn retry<S, F, Fut, T, E>(
    strategy: &mut S,
    max_attempts: u32,
    operation: F,
) -> Result<T, RetryError<E>>
where
    S: BackoffStrategy + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_with_hook(strategy, max_attempts, |_: &E| {}, operation).await
}

/// Retries `operation` until it succeeds or `max_attempts` is exhausted,
/// reporting each failed attempt's error to `on_failure`.
///
/// ### Parameters
/// - `strategy`: delay algorithm, owned by this session (`&mut`); reset to
///   identity state before returning.
/// - `max_attempts`: attempt budget; `0` means the operation never runs.
/// - `on_failure`: invoked with a borrow of each failed attempt's error.
/// - `operation`: closure producing one attempt's future per call.
///
/// ### Returns
/// - `Ok(value)` from the first successful attempt.
/// - [`RetryError::Exhausted`] with the final attempt's error and the attempt
///   count, once the budget runs out.
/// - [`RetryError::NotAttempted`] if the budget was zero.
///
/// ### Suspension
/// Sleeps after every failed attempt via `tokio::time::sleep`, cooperatively
/// yielding the caller's task. The final failing attempt sleeps too, before
/// exhaustion is reported.
pub async fn retry_with_hook<S, F, Fut, T, E, H>(
    strategy: &mut S,
    max_attempts: u32,
    mut on_failure: H,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    S: BackoffStrategy + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: FnMut(&E),
{
    let mut last: Option<E> = None;

    for _ in 0..max_attempts {
        match operation().await {
            Ok(value) => {
                strategy.reset();
                return Ok(value);
            }
            Err(e) => {
                on_failure(&e);
                last = Some(e);

                let delay = strategy.next_delay();
                time::sleep(delay).await;
            }
        }
    }

    strategy.reset();
    match last {
        Some(last) => Err(RetryError::Exhausted {
            attempts: max_attempts,
            last,
        }),
        None => Err(RetryError::NotAttempted),
    }
}
