//! Podcast feed records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::ValueBlock;
use crate::types::serde_helpers::{null_as_default, one_or_many};

/// A podcast feed as indexed by PodcastIndex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Podcast {
    /// PodcastIndex feed ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// The `<podcast:guid>` of the feed.
    pub podcast_guid: Option<String>,
    /// Feed title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Current feed URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// URL the feed was first submitted with.
    pub original_url: Option<String>,
    /// Channel-level `<link>`.
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// Channel description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Channel author.
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// iTunes owner name.
    pub owner_name: Option<String>,
    /// Channel image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Best artwork URL found in the feed.
    #[serde(deserialize_with = "null_as_default")]
    pub artwork: String,
    /// Last time the feed content changed (unix seconds).
    #[serde(deserialize_with = "null_as_default")]
    pub last_update_time: i64,
    /// Last crawl (unix seconds).
    pub last_crawl_time: Option<i64>,
    /// Last parse (unix seconds).
    pub last_parse_time: Option<i64>,
    /// Last time the feed answered with a 2xx (unix seconds).
    pub last_good_http_status_time: Option<i64>,
    /// Last HTTP status code seen while crawling.
    pub last_http_status: Option<u16>,
    /// `Content-Type` of the feed document.
    pub content_type: Option<String>,
    /// iTunes ID, if known.
    pub itunes_id: Option<u64>,
    /// `<itunes:type>` (episodic or serial).
    pub itunes_type: Option<String>,
    /// `<generator>` of the feed.
    pub generator: Option<String>,
    /// Channel language.
    pub language: Option<String>,
    /// 0 = RSS, 1 = Atom.
    #[serde(rename = "type")]
    pub feed_type: Option<i64>,
    /// Non-zero when the feed is marked dead.
    pub dead: Option<i64>,
    /// Number of crawl errors.
    pub crawl_errors: Option<i64>,
    /// Number of parse errors.
    pub parse_errors: Option<i64>,
    /// Category ID to name.
    pub categories: Option<BTreeMap<String, String>>,
    /// `<podcast:locked>` status.
    pub locked: Option<i64>,
    /// `<itunes:explicit>`.
    pub explicit: Option<bool>,
    /// Number of episodes in the feed.
    pub episode_count: Option<u64>,
    /// Hash of the image URL.
    pub image_url_hash: Option<u64>,
    /// Publish time of the newest item (unix seconds).
    pub newest_item_publish_time: Option<i64>,
    /// `<podcast:medium>`.
    pub medium: Option<String>,
    /// `<podcast:funding>` entries.
    #[serde(deserialize_with = "one_or_many")]
    pub funding: Vec<Funding>,
    /// `<podcast:value>` block.
    pub value: Option<ValueBlock>,
}

impl Podcast {
    /// Check whether the index considers this feed dead.
    pub fn is_dead(&self) -> bool {
        self.dead.is_some_and(|dead| dead != 0)
    }
}

/// A `<podcast:funding>` link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Funding {
    /// Donation/support URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Call to action text.
    pub message: Option<String>,
}

/// A PodcastIndex category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Category name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
