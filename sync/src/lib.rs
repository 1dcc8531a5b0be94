//! # slash-schema-sync
//!
//! Synchronization engine for slash command schemas: resolves the remote
//! command collection a batch targets, then performs one authenticated,
//! idempotent full-replace `PUT` of the validated payload.
//!
//! The engine is deliberately stateless and credential-free:
//! - [`resolve_target`] maps scope plus identifiers onto a
//!   [`TargetResource`], rejecting ambiguous combinations before any
//!   network activity.
//! - [`SyncClient::synchronize`] issues exactly one outbound call per
//!   invocation; a [`Credential`] is injected per call, never stored or
//!   read from the environment here.
//! - [`SyncClient::synchronize_with_retry`] retries only
//!   [transient](SyncError::is_transient) failures, within an explicit
//!   [`RetryPolicy`] budget — safe because a replace of the same payload
//!   is idempotent.
//!
//! Concurrent calls against *different* targets are independent; callers
//! needing a specific final state for one target must serialize their own
//! calls to it (the platform orders same-target replaces last-write-wins).

mod client;
mod credential;
mod error;
mod retry;
mod target;

pub use client::{DEFAULT_API_BASE, RemoteAck, SyncClient};
pub use credential::Credential;
pub use error::SyncError;
pub use retry::RetryPolicy;
pub use target::{Scope, ScopeResolutionError, TargetResource, resolve_target};
