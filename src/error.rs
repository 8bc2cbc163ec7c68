//! Error types for the PodcastIndex client library.

use thiserror::Error;

/// The main error type for all PodcastIndex client operations.
#[derive(Error, Debug)]
pub enum PodcastIndexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameters could not be encoded as a query string
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// PodcastIndex API returned a non-success response
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Client configuration is incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PodcastIndexError {
    /// The service error, if this is one.
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Error returned when the PodcastIndex API answers with a non-2xx status.
///
/// `service_status` and `service_description` are only populated when the
/// response body was valid JSON carrying those fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code
    pub transport_status: u16,
    /// HTTP reason phrase
    pub transport_status_text: String,
    /// `status` field from the error body
    pub service_status: Option<String>,
    /// `description` field from the error body
    pub service_description: Option<String>,
}

impl ServiceError {
    /// Create a new service error without any body fields.
    pub fn new(transport_status: u16, transport_status_text: impl Into<String>) -> Self {
        Self {
            transport_status,
            transport_status_text: transport_status_text.into(),
            service_status: None,
            service_description: None,
        }
    }

    /// Attach the fields recovered from the error body.
    pub fn with_service_fields(
        mut self,
        service_status: Option<String>,
        service_description: Option<String>,
    ) -> Self {
        self.service_status = service_status;
        self.service_description = service_description;
        self
    }

    /// Check if the credentials were rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.transport_status, 401 | 403)
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.transport_status == 404
    }

    /// Check if the request was throttled.
    pub fn is_rate_limited(&self) -> bool {
        self.transport_status == 429
    }

    /// Check if the service failed internally.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.transport_status)
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = self
            .service_description
            .as_deref()
            .unwrap_or(&self.transport_status_text);
        write!(f, "PodcastIndex API error {}: {}", self.transport_status, detail)
    }
}

impl std::error::Error for ServiceError {}

/// Error returned when required client settings are missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required environment variables: {}", .missing.join(", "))]
pub struct ConfigError {
    missing: Vec<&'static str>,
}

impl ConfigError {
    pub(crate) fn new(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }

    /// Names of the missing settings, in lookup order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}
