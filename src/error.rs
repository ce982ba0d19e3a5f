//! Error type returned by retry sessions.
//!
//! A session ends in one of three ways: success (plain `Ok`), exhaustion
//! ([`RetryError::Exhausted`] carrying the last operation error untouched),
//! or never having run at all ([`RetryError::NotAttempted`], when the attempt
//! budget is zero).
//!
//! Intermediate errors are never aggregated: only the final attempt's error
//! survives, everything earlier is reported solely through the failure hook.

use thiserror::Error;

/// # Terminal failure of a retry session.
///
/// Generic over `E`, the wrapped operation's error type. The last operation
/// error is carried as-is; [`RetryError::into_last`] recovers it without any
/// wrapping left behind.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// Every attempt failed; carries the error from the final attempt and the
    /// number of attempts that ran.
    #[error("retries exhausted after {attempts} attempt(s): {last}")]
    Exhausted {
        /// How many attempts were made (equals the configured budget).
        attempts: u32,
        /// The error reported by the final attempt, untouched.
        last: E,
    },

    /// The attempt budget was zero; the operation was never invoked.
    #[error("no attempts were made (max_attempts = 0)")]
    NotAttempted,
}

impl<E> RetryError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use retrykit::RetryError;
    ///
    /// let err: RetryError<std::io::Error> = RetryError::NotAttempted;
    /// assert_eq!(err.as_label(), "retry_not_attempted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::Exhausted { .. } => "retry_exhausted",
            RetryError::NotAttempted => "retry_not_attempted",
        }
    }

    /// Returns how many attempts ran before the session gave up.
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Exhausted { attempts, .. } => *attempts,
            RetryError::NotAttempted => 0,
        }
    }

    /// Returns the final attempt's error, if any attempt ran.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            RetryError::Exhausted { last, .. } => Some(last),
            RetryError::NotAttempted => None,
        }
    }

    /// Consumes the error, recovering the final attempt's error unwrapped.
    pub fn into_last(self) -> Option<E> {
        match self {
            RetryError::Exhausted { last, .. } => Some(last),
            RetryError::NotAttempted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_exposes_attempts_and_last() {
        let err: RetryError<String> = RetryError::Exhausted {
            attempts: 3,
            last: "boom".to_string(),
        };
        assert_eq!(err.as_label(), "retry_exhausted");
        assert_eq!(err.attempts(), 3);
        assert_eq!(err.last_error().map(String::as_str), Some("boom"));
        assert_eq!(err.into_last().as_deref(), Some("boom"));
    }

    #[test]
    fn test_not_attempted_has_no_error() {
        let err: RetryError<String> = RetryError::NotAttempted;
        assert_eq!(err.attempts(), 0);
        assert!(err.last_error().is_none());
        assert!(err.into_last().is_none());
    }

    #[test]
    fn test_display_includes_last_error() {
        let err: RetryError<String> = RetryError::Exhausted {
            attempts: 2,
            last: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2 attempt(s)"), "unexpected message: {msg}");
        assert!(
            msg.contains("connection refused"),
            "unexpected message: {msg}"
        );
    }
}
