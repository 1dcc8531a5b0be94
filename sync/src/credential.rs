//! Bearer authority for the replace call.
//!
//! A [`Credential`] is resolved once by the caller (typically from the
//! process environment) and passed explicitly into every call; the engine
//! never reads credentials implicitly. The token is kept out of `Debug`
//! output and has no `Display`.

use std::fmt;

/// An authorization header value injected per call.
#[derive(Clone)]
pub struct Credential {
    header_value: String,
}

impl Credential {
    /// Bot-token authority (`Authorization: Bot <token>`), the form the
    /// platform expects for application-owned registrations.
    pub fn bot(token: &str) -> Self {
        Self {
            header_value: format!("Bot {token}"),
        }
    }

    /// OAuth bearer authority (`Authorization: Bearer <token>`), for
    /// client-credentials grants.
    pub fn bearer(token: &str) -> Self {
        Self {
            header_value: format!("Bearer {token}"),
        }
    }

    /// The full `Authorization` header value.
    pub(crate) fn header_value(&self) -> &str {
        &self.header_value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.header_value.split(' ').next().unwrap_or("?");
        f.debug_struct("Credential")
            .field("scheme", &scheme)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_credential_header_value() {
        let cred = Credential::bot("abc123");
        assert_eq!(cred.header_value(), "Bot abc123");
    }

    #[test]
    fn test_bearer_credential_header_value() {
        let cred = Credential::bearer("abc123");
        assert_eq!(cred.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_debug_never_leaks_token() {
        let rendered = format!("{:?}", Credential::bot("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Bot"));
    }
}
