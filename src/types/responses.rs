//! Response envelopes returned by the PodcastIndex endpoints.
//!
//! Every envelope carries the service's `status` (normally `"true"`) and a
//! human-readable `description` next to the resource-specific payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::serde_helpers::{default_on_error, lenient_i64, lenient_string, status_string};
use crate::types::{Category, Episode, Podcast, RecentSoundbite, ValueBlock};

/// A list of podcast feeds (search, tag, medium, trending, dead).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// Matching feeds.
    pub feeds: Vec<Podcast>,
    /// Number of feeds returned.
    pub count: u64,
    /// The query as understood by the service.
    #[serde(deserialize_with = "lenient_string")]
    pub query: Option<String>,
    /// Human-readable description.
    pub description: String,
}

/// The lookup key echoed back by single-podcast endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodcastQuery {
    /// Feed or iTunes ID.
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Feed URL.
    pub url: Option<String>,
    /// Podcast GUID.
    pub podcast_guid: Option<String>,
    /// Podcast GUID (by-guid lookups).
    pub guid: Option<String>,
}

/// A single podcast feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// The feed, `None` when the lookup missed.
    #[serde(deserialize_with = "default_on_error")]
    pub feed: Option<Podcast>,
    /// The lookup key.
    #[serde(deserialize_with = "default_on_error")]
    pub query: Option<PodcastQuery>,
    /// Human-readable description.
    pub description: String,
}

/// A list of episodes, or a single episode for by-id/by-guid lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodesResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// Matching episodes.
    pub items: Vec<Episode>,
    /// Single episode for by-id/by-guid lookups.
    #[serde(deserialize_with = "default_on_error")]
    pub episode: Option<Episode>,
    /// Number of episodes returned.
    pub count: u64,
    /// The query as understood by the service.
    pub query: Option<Value>,
    /// Human-readable description.
    pub description: String,
}

impl EpisodesResponse {
    /// All episodes in the response, whichever field carried them.
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.episode.iter().chain(self.items.iter())
    }
}

/// Recently updated or added feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentFeedsResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// Feeds, newest first.
    pub feeds: Vec<Podcast>,
    /// Number of feeds returned.
    pub count: u64,
    /// The `max` the service applied.
    #[serde(deserialize_with = "lenient_i64")]
    pub max: Option<i64>,
    /// The `since` the service applied.
    #[serde(deserialize_with = "lenient_i64")]
    pub since: Option<i64>,
    /// Human-readable description.
    pub description: String,
}

/// Recently found soundbites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundbitesResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// Soundbites, newest first.
    pub items: Vec<RecentSoundbite>,
    /// Number of soundbites returned.
    pub count: u64,
    /// Human-readable description.
    pub description: String,
}

/// A feed's value block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// The lookup key.
    pub query: Option<Value>,
    /// The value block, `None` when the feed has none.
    #[serde(deserialize_with = "default_on_error")]
    pub value: Option<ValueBlock>,
    /// Human-readable description.
    pub description: String,
}

/// Index-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    /// Total feeds.
    pub feed_count_total: u64,
    /// Total episodes.
    pub episode_count_total: u64,
    /// Feeds with a new episode in the last 3 days.
    pub feeds_with_new_episodes3days: u64,
    /// Feeds with a new episode in the last 10 days.
    pub feeds_with_new_episodes10days: u64,
    /// Feeds with a new episode in the last 30 days.
    pub feeds_with_new_episodes30days: u64,
    /// Feeds with a new episode in the last 90 days.
    pub feeds_with_new_episodes90days: u64,
    /// Feeds carrying a value block.
    pub feeds_with_value_blocks: u64,
}

/// Current index statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// The counters.
    pub stats: Stats,
    /// Human-readable description.
    pub description: String,
}

/// All categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// The categories (the service names this field `feeds`).
    pub feeds: Vec<Category>,
    /// Number of categories.
    pub count: u64,
    /// Human-readable description.
    pub description: String,
}

/// Result of a feed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddFeedResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// ID of the new or existing feed.
    pub feed_id: Option<u64>,
    /// True when the feed was already indexed.
    pub existed: Option<bool>,
    /// Human-readable description.
    pub description: String,
}

/// Result of a hub notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubNotifyResponse {
    /// Service status.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    /// Human-readable description.
    pub description: String,
}
