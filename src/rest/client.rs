//! PodcastIndex REST API client implementation.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::AuthHeaders;
use crate::config::ClientConfig;
use crate::error::{PodcastIndexError, ServiceError};
use crate::types::serde_helpers::lenient_string;

/// The PodcastIndex REST API client.
///
/// Every request is signed with fresh authentication headers. Non-2xx
/// responses become [`ServiceError`]s; transport failures are returned
/// as-is.
///
/// # Example
///
/// ```rust,no_run
/// use podcastindex_api_client::config::ClientConfig;
/// use podcastindex_api_client::rest::{PodcastIndexClient, SearchRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::new("api_key", "api_secret", "MyApp/1.0");
///     let client = PodcastIndexClient::new(config);
///
///     let results = client.search(&SearchRequest::new("rust").max(10)).await?;
///     for feed in &results.feeds {
///         println!("{}: {}", feed.id, feed.title);
///     }
///
///     Ok(())
/// }
/// ```
///
/// Settings can also come from the environment:
///
/// ```rust,no_run
/// use podcastindex_api_client::rest::PodcastIndexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // PODCASTINDEX_API_KEY, PODCASTINDEX_API_SECRET and USER_AGENT
///     let client = PodcastIndexClient::from_env()?;
///
///     let stats = client.get_stats().await?;
///     println!("Feeds indexed: {}", stats.stats.feed_count_total);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PodcastIndexClient {
    http_client: ClientWithMiddleware,
    config: Arc<ClientConfig>,
}

impl PodcastIndexClient {
    /// Create a new client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self::builder(config).build()
    }

    /// Create a new client from `PODCASTINDEX_API_KEY`,
    /// `PODCASTINDEX_API_SECRET` and `USER_AGENT`.
    ///
    /// Fails without touching the network if any of them is unset or empty.
    pub fn from_env() -> Result<Self, PodcastIndexError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Create a new client builder.
    pub fn builder(config: ClientConfig) -> PodcastIndexClientBuilder {
        PodcastIndexClientBuilder::new(config)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request.
    pub(crate) async fn get<T>(&self, endpoint: &str) -> Result<T, PodcastIndexError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        self.execute(endpoint, self.http_client.get(url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, PodcastIndexError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url_with_params(endpoint, params)?;
        self.execute(endpoint, self.http_client.get(url)).await
    }

    /// Make a POST request with a JSON body.
    ///
    /// The parameters are mirrored into the query string, which is where the
    /// `add/*` endpoints read them from.
    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, PodcastIndexError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url_with_params(endpoint, body)?;
        let body = serde_json::to_vec(body)?;
        self.execute(endpoint, self.http_client.post(url).body(body))
            .await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, PodcastIndexError> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url, endpoint))?)
    }

    fn endpoint_url_with_params<Q>(&self, endpoint: &str, params: &Q) -> Result<Url, PodcastIndexError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(endpoint)?;
        let query_string = serde_urlencoded::to_string(params)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        Ok(url)
    }

    /// Sign, send and parse a request.
    async fn execute<T>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, PodcastIndexError>
    where
        T: DeserializeOwned,
    {
        // The timestamp is part of the digest, so headers are never reused.
        let auth = AuthHeaders::now(&self.config.credentials, &self.config.user_agent);

        let mut request = request.header(CONTENT_TYPE, "application/json");
        for (name, value) in auth.iter() {
            request = request.header(name, value);
        }

        tracing::debug!(endpoint, "sending PodcastIndex request");
        let response = request.send().await?;
        self.parse_response(endpoint, response).await
    }

    /// Parse a response from the PodcastIndex API.
    async fn parse_response<T>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, PodcastIndexError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        // An unreadable or non-JSON error body must not mask the status.
        let body = response.bytes().await.ok();
        let parsed = body.as_deref().and_then(ErrorBody::parse);
        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            parsed_body = parsed.is_some(),
            "PodcastIndex request failed"
        );

        let ErrorBody {
            status: service_status,
            description: service_description,
        } = parsed.unwrap_or_default();

        let error = ServiceError::new(
            status.as_u16(),
            status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), str::to_string),
        )
        .with_service_fields(service_status, service_description);
        Err(error.into())
    }
}

impl std::fmt::Debug for PodcastIndexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodcastIndexClient")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .field("credentials", &self.config.credentials)
            .finish()
    }
}

/// Builder for [`PodcastIndexClient`].
pub struct PodcastIndexClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl PodcastIndexClientBuilder {
    /// Create a new builder for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: None,
            middleware: Vec::new(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Use a preconfigured `reqwest` client, e.g. one with a timeout or proxy.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Add a middleware layer, e.g. a retry policy.
    ///
    /// Layers run after the built-in tracing middleware, in the order added.
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware,
    {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Build the client.
    pub fn build(self) -> PodcastIndexClient {
        if !self.config.credentials.is_valid() {
            tracing::warn!("PodcastIndex client built with an empty API key or secret");
        }

        let reqwest_client = self.http_client.unwrap_or_default();

        let client = self
            .middleware
            .into_iter()
            .fold(
                ClientBuilder::new(reqwest_client).with(TracingMiddleware::default()),
                ClientBuilder::with_arc,
            )
            .build();

        PodcastIndexClient {
            http_client: client,
            config: Arc::new(self.config),
        }
    }
}

/// Fields recovered from a non-2xx response body.
#[derive(Debug, Default)]
struct ErrorBody {
    status: Option<String>,
    description: Option<String>,
}

impl ErrorBody {
    /// Each field is read on its own, so a malformed `description` does not
    /// drop a valid `status`.
    fn parse(body: &[u8]) -> Option<Self> {
        let Value::Object(fields) = serde_json::from_slice::<Value>(body).ok()? else {
            return None;
        };
        let field = |name: &str| {
            fields
                .get(name)
                .and_then(|value| lenient_string(value).ok().flatten())
        };
        Some(Self {
            status: field("status"),
            description: field("description"),
        })
    }
}
