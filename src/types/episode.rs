//! Episode records.

use serde::{Deserialize, Serialize};

use crate::types::ValueBlock;
use crate::types::serde_helpers::null_as_default;

/// A podcast episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    /// PodcastIndex episode ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Item `<guid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub guid: String,
    /// Item title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Item `<link>`.
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// Item description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Publish time (unix seconds).
    #[serde(deserialize_with = "null_as_default")]
    pub date_published: i64,
    /// Human-readable publish time.
    pub date_published_pretty: Option<String>,
    /// Time the item was first seen (unix seconds).
    #[serde(deserialize_with = "null_as_default")]
    pub date_crawled: i64,
    /// Media file URL.
    #[serde(deserialize_with = "null_as_default")]
    pub enclosure_url: String,
    /// Media MIME type.
    #[serde(deserialize_with = "null_as_default")]
    pub enclosure_type: String,
    /// Media size in bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub enclosure_length: i64,
    /// Duration in seconds.
    pub duration: Option<i64>,
    /// 0 = not explicit, 1 = explicit.
    pub explicit: Option<i64>,
    /// `<itunes:episode>`.
    pub episode: Option<i64>,
    /// `<itunes:episodeType>`.
    pub episode_type: Option<String>,
    /// `<itunes:season>`.
    pub season: Option<i64>,
    /// Item image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// iTunes ID of the parent feed.
    pub feed_itunes_id: Option<u64>,
    /// PodcastIndex ID of the parent feed.
    #[serde(deserialize_with = "null_as_default")]
    pub feed_id: u64,
    /// URL of the parent feed.
    pub feed_url: Option<String>,
    /// Image of the parent feed.
    pub feed_image: Option<String>,
    /// Language of the parent feed.
    pub feed_language: Option<String>,
    /// Non-zero when the parent feed is dead.
    pub feed_dead: Option<i64>,
    /// Feed ID this feed duplicates, if any.
    pub feed_duplicate_of: Option<u64>,
    /// `<podcast:chapters>` URL.
    pub chapters_url: Option<String>,
    /// `<podcast:transcript>` URL.
    pub transcript_url: Option<String>,
    /// `<podcast:person>` entries.
    pub persons: Option<Vec<Person>>,
    /// `<podcast:soundbite>` entries.
    pub soundbites: Option<Vec<Soundbite>>,
    /// `<podcast:value>` block.
    pub value: Option<ValueBlock>,
}

/// A `<podcast:person>` credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Person ID.
    pub id: Option<u64>,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Role, e.g. `host` or `guest`.
    pub role: Option<String>,
    /// Role group, e.g. `cast`.
    pub group: Option<String>,
    /// Picture URL.
    pub img: Option<String>,
    /// Profile URL.
    pub href: Option<String>,
}

/// A `<podcast:soundbite>` inside an episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Soundbite {
    /// Offset into the episode in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: f64,
    /// Length in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    /// Soundbite title.
    pub title: Option<String>,
}

/// A soundbite returned by the recent soundbites feed, with its episode context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentSoundbite {
    /// Media file URL of the episode.
    #[serde(deserialize_with = "null_as_default")]
    pub enclosure_url: String,
    /// Soundbite title.
    pub title: Option<String>,
    /// Offset into the episode in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: f64,
    /// Length in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    /// Episode ID.
    #[serde(deserialize_with = "null_as_default")]
    pub episode_id: u64,
    /// Episode title.
    pub episode_title: Option<String>,
    /// Feed title.
    pub feed_title: Option<String>,
    /// Feed URL.
    pub feed_url: Option<String>,
    /// Feed ID.
    #[serde(deserialize_with = "null_as_default")]
    pub feed_id: u64,
}
