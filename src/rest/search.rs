//! Search endpoints.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::search;
use crate::types::{EpisodesResponse, SearchResponse};

/// Request parameters for term, title and music searches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    /// Terms to search for.
    pub q: String,
    /// Only return feeds with a value block of this type (`any`, `lightning`, `hive`, `webmonetization`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    /// Only return non-explicit feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
    /// Return full text fields instead of truncating at 100 words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Include similar matches (title search only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<bool>,
}

impl SearchRequest {
    /// Create a new search for the given terms.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Limit the number of results.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Exclude explicit feeds.
    pub fn clean(mut self) -> Self {
        self.clean = Some(true);
        self
    }

    /// Request untruncated text fields.
    pub fn fulltext(mut self) -> Self {
        self.fulltext = Some(true);
        self
    }
}

/// Request parameters for a person search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonSearchRequest {
    /// Person name to search for.
    pub q: String,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl PersonSearchRequest {
    /// Create a new person search.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

impl PodcastIndexClient {
    /// Search podcasts by title, author or owner.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use podcastindex_api_client::rest::{PodcastIndexClient, SearchRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PodcastIndexClient::from_env()?;
    ///     let results = client.search(&SearchRequest::new("batman university").max(20)).await?;
    ///     println!("{} feeds", results.count);
    ///     Ok(())
    /// }
    /// ```
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, PodcastIndexError> {
        self.get_with_params(search::BY_TERM, request).await
    }

    /// Search podcasts by title only.
    pub async fn search_by_title(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, PodcastIndexError> {
        self.get_with_params(search::BY_TITLE, request).await
    }

    /// Search episodes that credit a person, by name.
    pub async fn search_by_person(
        &self,
        request: &PersonSearchRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(search::BY_PERSON, request).await
    }

    /// Search music podcasts (`<podcast:medium>music`).
    pub async fn search_music_by_term(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, PodcastIndexError> {
        self.get_with_params(search::MUSIC_BY_TERM, request).await
    }
}
