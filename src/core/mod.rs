//! Retry execution core.
//!
//! ## Contents
//! - [`retry`] / [`retry_with_hook`]  free-function attempt loop over a
//!   caller-owned strategy
//! - [`RetryPolicy`]                  shareable configuration facade that
//!   clones its template strategy per session

mod executor;
mod policy;

pub use executor::{retry, retry_with_hook};
pub use policy::{RetryPolicy, RetryPolicyBuilder};
