//! # Stdout failure hook for debugging and demos.
//!
//! [`console_hook`] prints each failed attempt to stdout in the format
//! `error: <err>, retrying...`.
//!
//! Enabled via the `logging` feature. Primarily useful for development,
//! debugging, and examples; implement a custom hook for structured logging
//! or metrics collection.

use std::fmt::Display;

/// Prints a failed attempt's error to stdout.
///
/// Pass it directly wherever a failure hook is expected:
///
/// ```
/// use std::time::Duration;
/// use retrykit::{console_hook, retry_with_hook, FixedBackoff};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut strategy = FixedBackoff::new(1, Duration::from_millis(1));
/// let _ = retry_with_hook(&mut strategy, 2, console_hook, || async {
///     Err::<(), _>("connection refused")
/// })
/// .await;
/// // prints twice: error: connection refused, retrying...
/// # }
/// ```
pub fn console_hook<E: Display>(err: &E) {
    println!("error: {err}, retrying...");
}
