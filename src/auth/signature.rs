//! SHA-1 header signing for PodcastIndex API authentication.
//!
//! Every request carries a digest computed as:
//! ```text
//! hex(SHA1(api_key + api_secret + unix_seconds))
//! ```
//!
//! The digest is sent in the `Authorization` header alongside the timestamp
//! (`X-Auth-Date`) and the key (`X-Auth-Key`). Because the timestamp is part
//! of the digest, headers are produced fresh for every request.

use std::time::{SystemTime, UNIX_EPOCH};

use sha1::{Digest, Sha1};

use crate::auth::Credentials;

/// Header carrying the signing timestamp.
pub const X_AUTH_DATE: &str = "X-Auth-Date";
/// Header carrying the API key.
pub const X_AUTH_KEY: &str = "X-Auth-Key";

/// Authentication headers for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `User-Agent` value.
    pub user_agent: String,
    /// `X-Auth-Date` value (unix seconds).
    pub auth_date: String,
    /// `X-Auth-Key` value.
    pub auth_key: String,
    /// `Authorization` value (40 lowercase hex characters).
    pub authorization: String,
}

impl AuthHeaders {
    /// Sign with the given credentials at the current wall-clock time.
    pub fn now(credentials: &Credentials, user_agent: &str) -> Self {
        sign_request(
            &credentials.api_key,
            credentials.expose_secret(),
            user_agent,
            unix_timestamp(),
        )
    }

    /// Header name/value pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("User-Agent", self.user_agent.as_str()),
            (X_AUTH_DATE, self.auth_date.as_str()),
            (X_AUTH_KEY, self.auth_key.as_str()),
            ("Authorization", self.authorization.as_str()),
        ]
        .into_iter()
    }
}

/// Current unix time in whole seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Build the authentication headers for a request.
///
/// # Arguments
///
/// * `api_key` - The API key, sent verbatim as `X-Auth-Key`
/// * `api_secret` - The API secret, only used as digest input
/// * `user_agent` - Sent verbatim as `User-Agent`
/// * `timestamp` - Unix seconds, sent as `X-Auth-Date` and hashed
///
/// # Example
///
/// ```rust
/// use podcastindex_api_client::auth::sign_request;
///
/// let headers = sign_request("key", "secret", "MyApp/1.0", 1_700_000_000);
/// assert_eq!(headers.auth_date, "1700000000");
/// assert_eq!(headers.authorization.len(), 40);
/// ```
pub fn sign_request(
    api_key: &str,
    api_secret: &str,
    user_agent: &str,
    timestamp: u64,
) -> AuthHeaders {
    let auth_date = timestamp.to_string();

    let mut hasher = Sha1::new();
    hasher.update(api_key.as_bytes());
    hasher.update(api_secret.as_bytes());
    hasher.update(auth_date.as_bytes());
    let authorization = hex::encode(hasher.finalize());

    AuthHeaders {
        user_agent: user_agent.to_string(),
        auth_date,
        auth_key: api_key.to_string(),
        authorization,
    }
}
