//! Podcast lookup endpoints.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::podcasts;
use crate::types::{PodcastResponse, SearchResponse};

/// Request parameters for podcasts by medium.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PodcastsByMediumRequest {
    /// `<podcast:medium>` value, e.g. `music` or `audiobook`.
    pub medium: String,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl PodcastsByMediumRequest {
    /// Create a new request for the given medium.
    pub fn new(medium: impl Into<String>) -> Self {
        Self {
            medium: medium.into(),
            max: None,
        }
    }
}

/// Request parameters for trending podcasts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendingRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Only feeds trending since this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Comma-separated language codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Comma-separated category names or IDs to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<String>,
    /// Comma-separated category names or IDs to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notcat: Option<String>,
}

impl PodcastIndexClient {
    /// Get a podcast by its feed URL.
    pub async fn get_podcast_by_feed_url(
        &self,
        url: &str,
    ) -> Result<PodcastResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params<'a> {
            url: &'a str,
        }
        self.get_with_params(podcasts::BY_FEED_URL, &Params { url })
            .await
    }

    /// Get a podcast by its PodcastIndex feed ID.
    pub async fn get_podcast_by_feed_id(
        &self,
        id: u64,
    ) -> Result<PodcastResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params {
            id: u64,
        }
        self.get_with_params(podcasts::BY_FEED_ID, &Params { id })
            .await
    }

    /// Get a podcast by its `<podcast:guid>`.
    pub async fn get_podcast_by_guid(
        &self,
        guid: &str,
    ) -> Result<PodcastResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params<'a> {
            guid: &'a str,
        }
        self.get_with_params(podcasts::BY_GUID, &Params { guid })
            .await
    }

    /// Get a podcast by its iTunes ID.
    pub async fn get_podcast_by_itunes_id(
        &self,
        id: u64,
    ) -> Result<PodcastResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params {
            id: u64,
        }
        self.get_with_params(podcasts::BY_ITUNES_ID, &Params { id })
            .await
    }

    /// Get podcasts carrying a tag.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag name, e.g. `podcast-value`.
    /// * `max` - Optional maximum number of results.
    pub async fn get_podcasts_by_tag(
        &self,
        tag: &str,
        max: Option<u32>,
    ) -> Result<SearchResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params<'a> {
            tag: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            max: Option<u32>,
        }
        self.get_with_params(podcasts::BY_TAG, &Params { tag, max })
            .await
    }

    /// Get podcasts by `<podcast:medium>`.
    pub async fn get_podcasts_by_medium(
        &self,
        request: &PodcastsByMediumRequest,
    ) -> Result<SearchResponse, PodcastIndexError> {
        self.get_with_params(podcasts::BY_MEDIUM, request).await
    }

    /// Get trending podcasts.
    pub async fn get_trending_podcasts(
        &self,
        request: Option<&TrendingRequest>,
    ) -> Result<SearchResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(podcasts::TRENDING, req).await,
            None => self.get(podcasts::TRENDING).await,
        }
    }

    /// Get feeds the index has marked dead.
    pub async fn get_dead_podcasts(&self) -> Result<SearchResponse, PodcastIndexError> {
        self.get(podcasts::DEAD).await
    }
}
