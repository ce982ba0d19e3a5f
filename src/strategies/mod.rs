//! Backoff strategies.
//!
//! This module groups the delay-computation algorithms the retry executor can
//! be driven by. All of them implement [`BackoffStrategy`].
//!
//! ## Contents
//! - [`FixedBackoff`]              constant delay, never escalates
//! - [`ExponentialBackoff`]        delay doubles per failed attempt
//! - [`ExponentialJitterBackoff`]  doubling with a `[0.5, 1.5)` random factor
//! - [`FibonacciBackoff`]          delays follow a seeded fibonacci sequence
//!
//! ## Quick wiring
//! ```text
//! RetryPolicy { template: Box<dyn BackoffStrategy>, max_attempts }
//!      └─► core::executor uses, per session clone:
//!           - next_delay() to schedule the next attempt
//!           - reset() on terminal outcome (success or exhaustion)
//! ```
//!
//! ## Defaults
//! Construction defaults put every variant on a milliseconds unit:
//! fixed 1s constant; exponential 2s, 4s, 8s, ...; jitter `[1s, 3s)` first
//! band; fibonacci 1s, 1s, 2s, 3s, 5s, ...

mod exponential;
mod fibonacci;
mod fixed;
mod jitter;
mod strategy;

pub use exponential::ExponentialBackoff;
pub use fibonacci::FibonacciBackoff;
pub use fixed::FixedBackoff;
pub use jitter::ExponentialJitterBackoff;
pub use strategy::BackoffStrategy;
