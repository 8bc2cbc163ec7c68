//! Recency feeds.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::recent;
use crate::types::{EpisodesResponse, RecentFeedsResponse, SoundbitesResponse};

/// Request parameters for recent episodes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEpisodesRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Skip episodes whose title or URL contains this string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_string: Option<String>,
    /// Only episodes older than this episode ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    /// Return full text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulltext: Option<bool>,
}

/// Request parameters for recently updated feeds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecentFeedsRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Only feeds updated since this unix time.
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

/// Request parameters for newly added feeds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecentNewFeedsRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Only feeds added since this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Start listing from this feed ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedid: Option<u64>,
    /// Newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<bool>,
}

/// Request parameters for feeds that recently gained a value block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecentNewValueFeedsRequest {
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Only feeds changed since this unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

impl PodcastIndexClient {
    /// Get the most recently published episodes across the index.
    pub async fn get_recent_episodes(
        &self,
        request: Option<&RecentEpisodesRequest>,
    ) -> Result<EpisodesResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(recent::EPISODES, req).await,
            None => self.get(recent::EPISODES).await,
        }
    }

    /// Get recently updated feeds.
    pub async fn get_recent_feeds(
        &self,
        request: Option<&RecentFeedsRequest>,
    ) -> Result<RecentFeedsResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(recent::FEEDS, req).await,
            None => self.get(recent::FEEDS).await,
        }
    }

    /// Get feeds newly added to the index.
    pub async fn get_recent_new_feeds(
        &self,
        request: Option<&RecentNewFeedsRequest>,
    ) -> Result<RecentFeedsResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(recent::NEW_FEEDS, req).await,
            None => self.get(recent::NEW_FEEDS).await,
        }
    }

    /// Get feeds that recently added a `<podcast:value>` block.
    pub async fn get_recent_new_value_feeds(
        &self,
        request: Option<&RecentNewValueFeedsRequest>,
    ) -> Result<RecentFeedsResponse, PodcastIndexError> {
        match request {
            Some(req) => self.get_with_params(recent::NEW_VALUE_FEEDS, req).await,
            None => self.get(recent::NEW_VALUE_FEEDS).await,
        }
    }

    /// Get recently found soundbites.
    pub async fn get_recent_soundbites(
        &self,
        max: Option<u32>,
    ) -> Result<SoundbitesResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params {
            #[serde(skip_serializing_if = "Option::is_none")]
            max: Option<u32>,
        }
        self.get_with_params(recent::SOUNDBITES, &Params { max })
            .await
    }
}
