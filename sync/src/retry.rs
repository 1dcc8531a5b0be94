//! Bounded retry of transient failures.
//!
//! Replace semantics are idempotent, so a transient failure can be retried
//! blindly without risk of duplicated effect. The budget is always explicit:
//! a [`RetryPolicy`] caps attempts and delays, and non-transient errors are
//! returned immediately.

use std::time::Duration;

use slash_schema_core::WirePayload;

use crate::client::{RemoteAck, SyncClient};
use crate::credential::Credential;
use crate::error::SyncError;
use crate::target::TargetResource;

/// Explicit retry budget for one synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (1 disables retries).
    pub max_attempts: u32,
    /// Backoff for the first retry; doubles each retry after that.
    pub base_delay: Duration,
    /// Cap on any single delay, including server-supplied hints.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay before the retry following failed attempt `attempt` (1-based).
    ///
    /// A server hint (`Retry-After` seconds) takes precedence over the
    /// exponential backoff; both are capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32, server_hint: Option<u64>) -> Duration {
        let delay = match server_hint {
            Some(secs) => Duration::from_secs(secs),
            None => self
                .base_delay
                .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1))),
        };
        delay.min(self.max_delay)
    }
}

impl SyncClient {
    /// Like [`synchronize`](SyncClient::synchronize), retrying transient
    /// failures within `policy`'s budget.
    ///
    /// Non-transient errors (`Unauthorized`, `RemotePayloadRejected`) are
    /// returned on first occurrence. When the budget runs out, the last
    /// classified error is returned.
    ///
    /// # Errors
    ///
    /// The final [`SyncError`] after the budget is exhausted, or the first
    /// non-transient one.
    pub async fn synchronize_with_retry(
        &self,
        target: &TargetResource,
        payload: &WirePayload,
        credential: &Credential,
        policy: &RetryPolicy,
    ) -> Result<RemoteAck, SyncError> {
        let attempts = policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.synchronize(target, payload, credential).await {
                Ok(ack) => return Ok(ack),
                Err(err) if err.is_transient() && attempt < attempts => {
                    let delay = policy.delay_for(attempt, err.retry_after());
                    tracing::warn!(
                        %err,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1, None), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2, None), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3, None), Duration::from_millis(2000));
    }

    #[test]
    fn test_server_hint_overrides_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1, Some(5)), Duration::from_secs(5));
    }

    #[test]
    fn test_delays_capped_at_max() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(4),
        };
        assert_eq!(policy.delay_for(9, None), Duration::from_secs(4));
        assert_eq!(policy.delay_for(1, Some(3600)), Duration::from_secs(4));
    }
}
