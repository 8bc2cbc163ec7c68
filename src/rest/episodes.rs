//! Episode lookup endpoints.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::episodes;
use crate::types::EpisodesResponse;

/// Request parameters for an episode by ID.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodeByIdRequest {
    /// PodcastIndex episode ID.
    pub id: u64,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodeByIdRequest {
    /// Create a new request for the given episode.
    pub fn new(id: u64) -> Self {
        Self { id, fulltext: None }
    }
}

/// Request parameters for an episode by GUID.
///
/// Item GUIDs are only unique within a feed, so one of `feedurl`, `feedid`
/// or `podcastguid` should be set as well.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodeByGuidRequest {
    /// Item `<guid>`.
    pub guid: String,
    /// URL of the feed the item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedurl: Option<String>,
    /// ID of the feed the item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedid: Option<u64>,
    /// `<podcast:guid>` of the feed the item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcastguid: Option<String>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodeByGuidRequest {
    /// Create a new request for an item of the given feed.
    pub fn for_feed_id(guid: impl Into<String>, feedid: u64) -> Self {
        Self {
            guid: guid.into(),
            feedid: Some(feedid),
            ..Default::default()
        }
    }

    /// Create a new request for an item of the given feed URL.
    pub fn for_feed_url(guid: impl Into<String>, feedurl: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            feedurl: Some(feedurl.into()),
            ..Default::default()
        }
    }
}

/// Request parameters for episodes of a feed, by feed ID.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodesByFeedIdRequest {
    /// Feed ID, or comma-separated IDs.
    pub id: String,
    /// Only episodes published after this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodesByFeedIdRequest {
    /// Create a new request for a single feed.
    pub fn new(id: u64) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// Create a new request covering several feeds at once.
    pub fn for_feeds(ids: &[u64]) -> Self {
        Self {
            id: ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            ..Default::default()
        }
    }
}

/// Request parameters for episodes of a feed, by feed URL.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodesByFeedUrlRequest {
    /// Feed URL.
    pub url: String,
    /// Only episodes published after this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodesByFeedUrlRequest {
    /// Create a new request for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Request parameters for episodes of a feed, by iTunes ID.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodesByItunesIdRequest {
    /// iTunes ID of the feed.
    pub id: u64,
    /// Only episodes published after this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodesByItunesIdRequest {
    /// Create a new request for the given iTunes ID.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// Request parameters for episodes of a feed, by `<podcast:guid>`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodesByPodcastGuidRequest {
    /// `<podcast:guid>` of the feed.
    pub guid: String,
    /// Only episodes published after this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

impl EpisodesByPodcastGuidRequest {
    /// Create a new request for the given podcast GUID.
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            ..Default::default()
        }
    }
}

/// Request parameters for random episodes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RandomEpisodesRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Comma-separated language codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Comma-separated category names or IDs to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<String>,
    /// Comma-separated category names or IDs to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notcat: Option<String>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

/// Request parameters for live episodes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LiveEpisodesRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl PodcastIndexClient {
    /// Get a single episode by its PodcastIndex ID.
    ///
    /// The episode is returned in [`EpisodesResponse::episode`].
    pub async fn get_episode_by_id(
        &self,
        request: &EpisodeByIdRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_ID, request).await
    }

    /// Get a single episode by its item GUID.
    pub async fn get_episode_by_guid(
        &self,
        request: &EpisodeByGuidRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_GUID, request).await
    }

    /// Get the episodes of one or more feeds by feed ID.
    pub async fn get_episodes_by_feed_id(
        &self,
        request: &EpisodesByFeedIdRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_FEED_ID, request).await
    }

    /// Get the episodes of a feed by feed URL.
    pub async fn get_episodes_by_feed_url(
        &self,
        request: &EpisodesByFeedUrlRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_FEED_URL, request).await
    }

    /// Get the episodes of a feed by iTunes ID.
    pub async fn get_episodes_by_itunes_id(
        &self,
        request: &EpisodesByItunesIdRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_ITUNES_ID, request).await
    }

    /// Get the episodes of a feed by `<podcast:guid>`.
    pub async fn get_episodes_by_podcast_guid(
        &self,
        request: &EpisodesByPodcastGuidRequest,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        self.get_with_params(episodes::BY_PODCAST_GUID, request)
            .await
    }

    /// Get random episodes.
    pub async fn get_random_episodes(
        &self,
        request: Option<&RandomEpisodesRequest>,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(episodes::RANDOM, req).await,
            None => self.get(episodes::RANDOM).await,
        }
    }

    /// Get episodes that are currently live (`<podcast:liveItem>`).
    pub async fn get_live_episodes(
        &self,
        request: Option<&LiveEpisodesRequest>,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(episodes::LIVE, req).await,
            None => self.get(episodes::LIVE).await,
        }
    }
}
