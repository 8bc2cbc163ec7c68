//! Credential management for PodcastIndex API authentication.

use secrecy::{ExposeSecret, SecretString};

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier, sent as `X-Auth-Key`)
    pub api_key: String,
    /// The API secret (private, only ever hashed)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Check that both the key and the secret are non-empty.
    pub fn is_valid(&self) -> bool {
        validate_credentials(Some(&self.api_key), Some(self.expose_secret()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Check that an API key and secret are both present and non-empty.
///
/// ```rust
/// use podcastindex_api_client::auth::validate_credentials;
///
/// assert!(validate_credentials(Some("key"), Some("secret")));
/// assert!(!validate_credentials(Some(""), Some("secret")));
/// assert!(!validate_credentials(None, None));
/// ```
pub fn validate_credentials(api_key: Option<&str>, api_secret: Option<&str>) -> bool {
    matches!((api_key, api_secret), (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty())
}
