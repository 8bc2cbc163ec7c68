//! Custom serde helpers for the PodcastIndex API's loosely-typed fields.
//!
//! The service is not consistent about scalar types: `status` is usually the
//! string `"true"` but some endpoints send a JSON boolean, and a few numeric
//! fields arrive as strings. These helpers normalize such fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any JSON scalar into `Option<String>`.
///
/// Strings are kept, booleans and numbers are rendered with their JSON
/// spelling, `null` becomes `None`. Arrays and objects are rejected.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use podcastindex_api_client::types::serde_helpers::lenient_string;
///
/// #[derive(Deserialize)]
/// struct Response {
///     #[serde(default, deserialize_with = "lenient_string")]
///     status: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"status":true}"#).unwrap();
/// assert_eq!(response.status.as_deref(), Some("true"));
///
/// let response: Response = serde_json::from_str(r#"{"status":"false"}"#).unwrap();
/// assert_eq!(response.status.as_deref(), Some("false"));
/// ```
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar, got {other}"
        ))),
    }
}

/// Deserialize a required status field, accepting `"true"` or `true`.
///
/// A missing or null status deserializes to an empty string.
pub fn status_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Deserialize an explicit `null` as the type's default.
///
/// Pairs with `#[serde(default)]`, which only covers missing fields.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use podcastindex_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize)]
/// struct Feed {
///     #[serde(default, deserialize_with = "null_as_default")]
///     author: String,
/// }
///
/// let feed: Feed = serde_json::from_str(r#"{"author":null}"#).unwrap();
/// assert_eq!(feed.author, "");
/// ```
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an integer that may be sent as a number or a numeric string.
///
/// Unparseable values become `None` instead of failing the whole response.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use podcastindex_api_client::types::serde_helpers::lenient_i64;
///
/// #[derive(Deserialize)]
/// struct Response {
///     #[serde(default, deserialize_with = "lenient_i64")]
///     max: Option<i64>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"max":"10"}"#).unwrap();
/// assert_eq!(response.max, Some(10));
///
/// let response: Response = serde_json::from_str(r#"{"max":10}"#).unwrap();
/// assert_eq!(response.max, Some(10));
///
/// let response: Response = serde_json::from_str(r#"{"max":"ten"}"#).unwrap();
/// assert_eq!(response.max, None);
/// ```
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserialize to `None` instead of failing on unexpected data.
///
/// The service answers lookups that miss with an empty array where an
/// object is expected (`"feed": []`); this keeps such responses parseable.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use podcastindex_api_client::types::Podcast;
/// use podcastindex_api_client::types::serde_helpers::default_on_error;
///
/// #[derive(Deserialize)]
/// struct Response {
///     #[serde(default, deserialize_with = "default_on_error")]
///     feed: Option<Podcast>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"feed":[]}"#).unwrap();
/// assert!(response.feed.is_none());
/// ```
pub fn default_on_error<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    // Buffer first so a bad value cannot leave the outer parser mid-token.
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Deserialize either a single object, an array of them, or `null` into a `Vec`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use podcastindex_api_client::types::Funding;
/// use podcastindex_api_client::types::serde_helpers::one_or_many;
///
/// #[derive(Deserialize)]
/// struct Feed {
///     #[serde(default, deserialize_with = "one_or_many")]
///     funding: Vec<Funding>,
/// }
///
/// let feed: Feed = serde_json::from_str(r#"{"funding":{"url":"https://example.com/donate"}}"#).unwrap();
/// assert_eq!(feed.funding.len(), 1);
///
/// let feed: Feed = serde_json::from_str(r#"{"funding":null}"#).unwrap();
/// assert!(feed.funding.is_empty());
/// ```
pub fn one_or_many<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}
