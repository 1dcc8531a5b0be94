//! The replace client.
//!
//! One [`SyncClient::synchronize`] call issues exactly one `PUT` of the full
//! wire payload against the resolved target: the remote collection becomes
//! exactly the payload, implicitly removing anything absent from it. The
//! call is idempotent, so repeating it with the same payload yields the same
//! remote state.
//!
//! The client holds no credential; a [`Credential`] is injected per call.

use std::time::Duration;

use slash_schema_core::{RegisteredCommand, WirePayload};

use crate::credential::Credential;
use crate::error::SyncError;
use crate::target::TargetResource;

/// Default API base for the platform's current version.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The platform's acknowledgment of a successful replace: the accepted
/// command set, echoed back in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAck {
    /// Commands now registered at the target.
    pub commands: Vec<RegisteredCommand>,
}

impl RemoteAck {
    /// Names of the registered commands, in echo order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }
}

/// HTTP client for the idempotent replace call.
pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for SyncClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncClient {
    /// Creates a client with the default API base and a 10 s timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a caller-chosen request timeout. On timeout the
    /// call surfaces as [`SyncError::Transport`], which is transient and
    /// safe to retry.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("DiscordBot (https://github.com/ex1tium/slash-schema, 0.1)")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL (test servers, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Performs one full-replace call: `PUT` the payload at the target,
    /// authorized by `credential`.
    ///
    /// The connection is held for the duration of this one call and released
    /// on completion either way.
    ///
    /// # Errors
    ///
    /// One [`SyncError`] classifying the failure; only
    /// [`is_transient`](SyncError::is_transient) errors are retry-eligible.
    pub async fn synchronize(
        &self,
        target: &TargetResource,
        payload: &WirePayload,
        credential: &Credential,
    ) -> Result<RemoteAck, SyncError> {
        let url = format!("{}/{}", self.base_url, target.path());
        tracing::debug!(resource = %target, commands = payload.commands.len(), "replacing command set");

        let resp = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, credential.header_value())
            .json(payload)
            .send()
            .await?;

        let resp = classify_response(resp).await?;
        let commands: Vec<RegisteredCommand> = resp.json().await?;
        tracing::info!(resource = %target, registered = commands.len(), "command set replaced");
        Ok(RemoteAck { commands })
    }
}

/// Classifies an HTTP response against the error taxonomy.
///
/// Returns the response unchanged on 2xx. Handles:
/// - **401/403** → [`SyncError::Unauthorized`]
/// - **429** → [`SyncError::RateLimited`] with `Retry-After` parsing
///   (falls back to 60 s if absent or unparseable)
/// - **5xx** → [`SyncError::RemoteUnavailable`]
/// - **other non-success** → [`SyncError::RemotePayloadRejected`] with the
///   response body
pub(crate) async fn classify_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, SyncError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == 401 || status == 403 {
        return Err(SyncError::Unauthorized {
            status: status.as_u16(),
        });
    }
    if status == 429 {
        return Err(SyncError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status.is_server_error() {
        return Err(SyncError::RemoteUnavailable {
            status: status.as_u16(),
        });
    }
    Err(SyncError::RemotePayloadRejected {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

/// Parses the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
