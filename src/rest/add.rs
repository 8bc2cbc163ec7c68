//! Feed submission endpoints.
//!
//! These require an API key with write or publisher permissions; read-only
//! keys get a [`ServiceError`](crate::error::ServiceError) back.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::add;
use crate::types::AddFeedResponse;

/// Request parameters for adding a feed by URL.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddByFeedUrlRequest {
    /// Feed URL.
    pub url: String,
    /// MD5 of the feed's `<channel>` contents, to skip re-adding identical feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chash: Option<String>,
    /// iTunes ID of the feed, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunesid: Option<u64>,
}

impl AddByFeedUrlRequest {
    /// Create a new request for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Request parameters for adding a feed by iTunes ID.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddByItunesIdRequest {
    /// iTunes ID of the feed.
    pub id: u64,
}

impl AddByItunesIdRequest {
    /// Create a new request for the given iTunes ID.
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl PodcastIndexClient {
    /// Submit a feed URL to the index.
    pub async fn add_by_feed_url(
        &self,
        request: &AddByFeedUrlRequest,
    ) -> Result<AddFeedResponse, PodcastIndexError> {
        self.post(add::BY_FEED_URL, request).await
    }

    /// Submit a feed to the index by its iTunes ID.
    pub async fn add_by_itunes_id(
        &self,
        request: &AddByItunesIdRequest,
    ) -> Result<AddFeedResponse, PodcastIndexError> {
        self.post(add::BY_ITUNES_ID, request).await
    }
}
