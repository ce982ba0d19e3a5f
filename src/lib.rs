//! # retrykit
//!
//! **Retrykit** is a pluggable retry engine for Rust.
//!
//! It re-invokes an arbitrary fallible async operation using a swappable
//! backoff strategy until the operation succeeds or an attempt budget is
//! exhausted. The crate is designed as a library collaborator for network
//! clients, storage clients, task runners — anything that needs uniform retry
//! policy without rewriting control flow at each call site.
//!
//! ## Architecture
//! ### Overview
//! ```text
//! caller ──► RetryPolicy::run(operation)
//!                │
//!                ├─► template.fresh()          (session-private strategy clone)
//!                ▼
//!            core::executor loop
//!                │
//!   ┌────────────┴────────────┐
//!   ▼                         ▼
//! operation() → Ok(v)       operation() → Err(e)
//!   │                         │
//!   │ strategy.reset()        ├─► failure hook(&e)
//!   └─► return Ok(v)          ├─► delay = strategy.next_delay()
//!                             ├─► sleep(delay)
//!                             └─► next attempt (or exhaustion)
//!                                      │
//!                                      ▼
//!                          strategy.reset()
//!                          Err(Exhausted { attempts, last })
//! ```
//!
//! ### Strategies
//! ```text
//! BackoffStrategy (trait: next_delay / reset / fresh)
//!   ├─ FixedBackoff              interval × unit, constant
//!   ├─ ExponentialBackoff        base × unit × 2^attempt, uncapped
//!   ├─ ExponentialJitterBackoff  base × unit × 2^attempt × [0.5, 1.5)
//!   └─ FibonacciBackoff          v2 × 1000 × unit, (v1,v2) ← (v2, v1+v2)
//! ```
//!
//! ## Features
//! | Area           | Description                                             | Key types / functions                  |
//! |----------------|---------------------------------------------------------|----------------------------------------|
//! | **Strategies** | Pluggable delay algorithms with reset/fresh semantics.  | [`BackoffStrategy`] and the 4 variants |
//! | **Executor**   | Generic async attempt loop over closures.               | [`retry`], [`retry_with_hook`]         |
//! | **Policies**   | Shareable config; per-session strategy cloning.         | [`RetryPolicy`]                        |
//! | **Errors**     | Typed session outcome with attempt count.               | [`RetryError`]                         |
//!
//! ## Concurrency
//! A [`RetryPolicy`] is safe to share across arbitrarily many concurrent
//! callers: `run` clones the template strategy per session, so sessions never
//! observe each other's progression state. A raw strategy value, by contrast,
//! holds mutable progression state — the `&mut` receivers on
//! [`BackoffStrategy`] keep direct concurrent use out of reach.
//!
//! There is no cancellation or timeout path: once a session starts it runs to
//! success or exhaustion, sleeps included. Wrapped operations are re-invoked
//! as-is; partial side effects of a failed attempt are the operation's
//! responsibility.
//!
//! ## Optional features
//! - `logging`: exports the stdout [`console_hook`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retrykit::{ExponentialJitterBackoff, RetryError, RetryPolicy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let policy = RetryPolicy::builder()
//!         .with_strategy(ExponentialJitterBackoff::new(1, Duration::from_millis(1)))
//!         .with_max_attempts(3)
//!         .build();
//!
//!     let mut calls = 0u32;
//!     let result = policy
//!         .run_with_hook(
//!             |e: &String| eprintln!("attempt failed: {e}"),
//!             || {
//!                 calls += 1;
//!                 let attempt = calls;
//!                 async move {
//!                     if attempt < 3 {
//!                         Err(format!("transient failure {attempt}"))
//!                     } else {
//!                         Ok("payload")
//!                     }
//!                 }
//!             },
//!         )
//!         .await;
//!
//!     assert_eq!(result.unwrap(), "payload");
//! }
//! ```

mod core;
mod error;
mod strategies;

// ---- Public re-exports ----

pub use core::{retry, retry_with_hook, RetryPolicy, RetryPolicyBuilder};
pub use error::RetryError;
pub use strategies::{
    BackoffStrategy, ExponentialBackoff, ExponentialJitterBackoff, FibonacciBackoff, FixedBackoff,
};

// Optional: expose the stdout failure hook (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod hooks;
#[cfg(feature = "logging")]
pub use hooks::console_hook;
