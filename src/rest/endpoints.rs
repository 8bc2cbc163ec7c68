//! PodcastIndex REST API endpoint constants.

/// Base URL for the PodcastIndex REST API.
pub const PODCASTINDEX_BASE_URL: &str = "https://api.podcastindex.org/api/1.0";

/// Search endpoints.
pub mod search {
    /// Search podcasts by title, author or owner.
    pub const BY_TERM: &str = "/search/byterm";
    /// Search podcasts by title only.
    pub const BY_TITLE: &str = "/search/bytitle";
    /// Search episodes by person.
    pub const BY_PERSON: &str = "/search/byperson";
    /// Search music podcasts.
    pub const MUSIC_BY_TERM: &str = "/search/music/byterm";
}

/// Podcast lookup endpoints.
pub mod podcasts {
    /// Podcast by feed URL.
    pub const BY_FEED_URL: &str = "/podcasts/byfeedurl";
    /// Podcast by feed ID.
    pub const BY_FEED_ID: &str = "/podcasts/byfeedid";
    /// Podcast by podcast GUID.
    pub const BY_GUID: &str = "/podcasts/byguid";
    /// Podcast by iTunes ID.
    pub const BY_ITUNES_ID: &str = "/podcasts/byitunesid";
    /// Podcasts by tag.
    pub const BY_TAG: &str = "/podcasts/bytag";
    /// Podcasts by medium.
    pub const BY_MEDIUM: &str = "/podcasts/bymedium";
    /// Trending podcasts.
    pub const TRENDING: &str = "/podcasts/trending";
    /// Dead podcasts.
    pub const DEAD: &str = "/podcasts/dead";
}

/// Episode lookup endpoints.
pub mod episodes {
    /// Episode by ID.
    pub const BY_ID: &str = "/episodes/byid";
    /// Episode by GUID.
    pub const BY_GUID: &str = "/episodes/byguid";
    /// Episodes by feed ID.
    pub const BY_FEED_ID: &str = "/episodes/byfeedid";
    /// Episodes by feed URL.
    pub const BY_FEED_URL: &str = "/episodes/byfeedurl";
    /// Episodes by iTunes ID.
    pub const BY_ITUNES_ID: &str = "/episodes/byitunesid";
    /// Episodes by podcast GUID.
    pub const BY_PODCAST_GUID: &str = "/episodes/bypodcastguid";
    /// Random episodes.
    pub const RANDOM: &str = "/episodes/random";
    /// Live episodes.
    pub const LIVE: &str = "/episodes/live";
}

/// Recency feeds.
pub mod recent {
    /// Recently added episodes.
    pub const EPISODES: &str = "/recent/episodes";
    /// Recently updated feeds.
    pub const FEEDS: &str = "/recent/feeds";
    /// Newly added feeds.
    pub const NEW_FEEDS: &str = "/recent/newfeeds";
    /// Feeds that recently gained a value block.
    pub const NEW_VALUE_FEEDS: &str = "/recent/newvaluefeeds";
    /// Recently found soundbites.
    pub const SOUNDBITES: &str = "/recent/soundbites";
}

/// Value-for-value endpoints.
pub mod value {
    /// Value block by feed ID.
    pub const BY_FEED_ID: &str = "/value/byfeedid";
    /// Value block by feed URL.
    pub const BY_FEED_URL: &str = "/value/byfeedurl";
    /// Value block by podcast GUID.
    pub const BY_PODCAST_GUID: &str = "/value/bypodcastguid";
}

/// Index statistics.
pub mod stats {
    /// Current index stats.
    pub const CURRENT: &str = "/stats/current";
}

/// Category listing.
pub mod categories {
    /// All categories.
    pub const LIST: &str = "/categories/list";
}

/// Feed submission endpoints (write-scoped keys only).
pub mod add {
    /// Add a feed by URL.
    pub const BY_FEED_URL: &str = "/add/byfeedurl";
    /// Add a feed by iTunes ID.
    pub const BY_ITUNES_ID: &str = "/add/byitunesid";
}

/// PubSubHubbub endpoints.
pub mod hub {
    /// Notify the index that a feed changed.
    pub const PUB_NOTIFY: &str = "/hub/pubnotify";
}
