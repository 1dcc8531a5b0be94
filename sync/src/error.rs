//! Remote-call error taxonomy.

use thiserror::Error;

/// Errors from one synchronization call.
///
/// Exactly one of these classifies every failed call. The retryable class
/// is surfaced through [`is_transient`](SyncError::is_transient): replace
/// semantics are idempotent, so transient failures are safe to retry
/// blindly within a budget.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Credential rejected (401/403). Fatal to the call, never retryable.
    #[error("unauthorized ({status}): credential rejected by the platform")]
    Unauthorized {
        /// HTTP status code returned.
        status: u16,
    },

    /// The remote validator rejected the payload (other 4xx). Non-retryable;
    /// a payload that passed local validation but fails here indicates a
    /// gap in the local validator.
    #[error("payload rejected by remote validator ({status}): {message}")]
    RemotePayloadRejected {
        /// HTTP status code returned.
        status: u16,
        /// Error body returned by the platform.
        message: String,
    },

    /// The platform returned 429 Too Many Requests.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying, from `Retry-After`.
        retry_after_secs: u64,
    },

    /// The platform returned a 5xx status.
    #[error("remote unavailable ({status})")]
    RemoteUnavailable {
        /// HTTP status code returned.
        status: u16,
    },

    /// Transport-level failure: connect error, timeout, or an unreadable
    /// response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SyncError {
    /// Whether the error is safe to retry under the idempotent replace
    /// contract.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SyncError::RateLimited { .. }
                | SyncError::RemoteUnavailable { .. }
                | SyncError::Transport(_)
        )
    }

    /// Server-supplied retry hint in seconds, when one exists.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            SyncError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classes() {
        assert!(SyncError::RateLimited {
            retry_after_secs: 5
        }
        .is_transient());
        assert!(SyncError::RemoteUnavailable { status: 502 }.is_transient());
        assert!(!SyncError::Unauthorized { status: 401 }.is_transient());
        assert!(!SyncError::RemotePayloadRejected {
            status: 400,
            message: String::new()
        }
        .is_transient());
    }

    #[test]
    fn test_retry_after_hint_only_on_rate_limit() {
        assert_eq!(
            SyncError::RateLimited {
                retry_after_secs: 30
            }
            .retry_after(),
            Some(30)
        );
        assert_eq!(SyncError::RemoteUnavailable { status: 503 }.retry_after(), None);
    }
}
