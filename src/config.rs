//! Client configuration.
//!
//! A [`ClientConfig`] is either built explicitly or sourced from three
//! named settings. Sourcing fails fast, before any network activity, and
//! reports every missing setting at once.

use crate::auth::Credentials;
use crate::error::ConfigError;
use crate::rest::PODCASTINDEX_BASE_URL;

/// Setting holding the API key.
pub const API_KEY_VAR: &str = "PODCASTINDEX_API_KEY";
/// Setting holding the API secret.
pub const API_SECRET_VAR: &str = "PODCASTINDEX_API_SECRET";
/// Setting holding the User-Agent string.
pub const USER_AGENT_VAR: &str = "USER_AGENT";
/// Optional setting overriding the base URL.
pub const BASE_URL_VAR: &str = "PODCASTINDEX_BASE_URL";

/// Immutable configuration for a [`PodcastIndexClient`](crate::rest::PodcastIndexClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key and secret.
    pub credentials: Credentials,
    /// User-Agent identifying the calling application, e.g. `MyApp/1.0 (https://myapp.com)`.
    pub user_agent: String,
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration targeting the public PodcastIndex API.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
            user_agent: user_agent.into(),
            base_url: PODCASTINDEX_BASE_URL.to_string(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the configuration from process environment variables.
    ///
    /// Requires `PODCASTINDEX_API_KEY`, `PODCASTINDEX_API_SECRET` and
    /// `USER_AGENT`; `PODCASTINDEX_BASE_URL` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary lookup function.
    ///
    /// Unset and empty values both count as missing.
    ///
    /// ```rust
    /// use podcastindex_api_client::config::ClientConfig;
    ///
    /// let err = ClientConfig::from_lookup(|name| match name {
    ///     "PODCASTINDEX_API_SECRET" => Some("secret".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap_err();
    /// assert_eq!(err.missing(), ["PODCASTINDEX_API_KEY", "USER_AGENT"]);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let api_key = setting(API_KEY_VAR);
        let api_secret = setting(API_SECRET_VAR);
        let user_agent = setting(USER_AGENT_VAR);

        match (api_key, api_secret, user_agent) {
            (Some(api_key), Some(api_secret), Some(user_agent)) => {
                let config = Self::new(api_key, api_secret, user_agent);
                Ok(match setting(BASE_URL_VAR) {
                    Some(base_url) => config.with_base_url(base_url),
                    None => config,
                })
            }
            (api_key, api_secret, user_agent) => {
                let missing = [
                    (api_key.is_none(), API_KEY_VAR),
                    (api_secret.is_none(), API_SECRET_VAR),
                    (user_agent.is_none(), USER_AGENT_VAR),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();
                Err(ConfigError::new(missing))
            }
        }
    }
}
