//! Target resource resolution.
//!
//! Maps a [`Scope`] plus identifiers onto the remote command collection a
//! replace call addresses. Scope determines the target path only, never the
//! payload shape.

use std::fmt;

use thiserror::Error;

/// Whether a command set applies application-wide or to one guild.
///
/// Exactly one scope per synchronization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The application's global command collection.
    Global,
    /// One guild's command collection.
    Guild,
}

/// Errors from resolving a target resource.
///
/// All of these are caller misconfiguration, surfaced before any network
/// activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeResolutionError {
    /// Application id is empty.
    #[error("application id cannot be empty")]
    EmptyApplicationId,
    /// Guild scope requested without a guild id.
    #[error("guild scope requires a guild id")]
    MissingGuildId,
    /// Global scope requested together with a guild id. Ambiguous intent is
    /// a caller error, never silently resolved.
    #[error("global scope does not take a guild id (got '{0}')")]
    UnexpectedGuildId(String),
}

/// The resolved remote command collection one replace call addresses.
///
/// # Examples
///
/// ```
/// use slash_schema_sync::{Scope, resolve_target};
///
/// let target = resolve_target("42", Scope::Global, None).unwrap();
/// assert_eq!(target.path(), "applications/42/commands");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResource {
    path: String,
}

impl TargetResource {
    /// Resource path relative to the API base.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for TargetResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Resolves the command collection for `scope`.
///
/// Guild scope requires a non-empty `guild_id`; global scope requires its
/// absence. An empty `guild_id` counts as absent for guild scope (invalid)
/// and as present for global scope only when non-empty.
///
/// # Errors
///
/// [`ScopeResolutionError`] on any scope/id mismatch.
pub fn resolve_target(
    application_id: &str,
    scope: Scope,
    guild_id: Option<&str>,
) -> Result<TargetResource, ScopeResolutionError> {
    if application_id.is_empty() {
        return Err(ScopeResolutionError::EmptyApplicationId);
    }

    let guild_id = guild_id.filter(|id| !id.is_empty());
    let path = match (scope, guild_id) {
        (Scope::Global, None) => format!("applications/{application_id}/commands"),
        (Scope::Global, Some(guild)) => {
            return Err(ScopeResolutionError::UnexpectedGuildId(guild.to_string()));
        }
        (Scope::Guild, Some(guild)) => {
            format!("applications/{application_id}/guilds/{guild}/commands")
        }
        (Scope::Guild, None) => return Err(ScopeResolutionError::MissingGuildId),
    };

    Ok(TargetResource { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scope_addresses_application_collection() {
        let target = resolve_target("42", Scope::Global, None).unwrap();
        assert_eq!(target.path(), "applications/42/commands");
    }

    #[test]
    fn test_guild_scope_addresses_guild_collection() {
        let target = resolve_target("42", Scope::Guild, Some("99")).unwrap();
        assert_eq!(target.path(), "applications/42/guilds/99/commands");
    }

    #[test]
    fn test_guild_scope_without_id_fails() {
        assert_eq!(
            resolve_target("42", Scope::Guild, None),
            Err(ScopeResolutionError::MissingGuildId)
        );
    }

    #[test]
    fn test_guild_scope_with_empty_id_fails() {
        assert_eq!(
            resolve_target("42", Scope::Guild, Some("")),
            Err(ScopeResolutionError::MissingGuildId)
        );
    }

    #[test]
    fn test_global_scope_with_guild_id_fails() {
        assert_eq!(
            resolve_target("42", Scope::Global, Some("99")),
            Err(ScopeResolutionError::UnexpectedGuildId("99".to_string()))
        );
    }

    #[test]
    fn test_empty_application_id_fails() {
        assert_eq!(
            resolve_target("", Scope::Global, None),
            Err(ScopeResolutionError::EmptyApplicationId)
        );
    }
}
