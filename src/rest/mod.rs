//! PodcastIndex REST API client.
//!
//! [`PodcastIndexClient`] owns the request pipeline (URL assembly, signing,
//! response interpretation). The endpoint methods are grouped by resource:
//!
//! - search: [`search`](PodcastIndexClient::search), [`search_by_title`](PodcastIndexClient::search_by_title),
//!   [`search_by_person`](PodcastIndexClient::search_by_person), [`search_music_by_term`](PodcastIndexClient::search_music_by_term)
//! - podcasts: lookups by feed URL, feed ID, GUID, iTunes ID, tag and medium; trending and dead feeds
//! - episodes: lookups by ID, GUID, feed, iTunes ID and podcast GUID; random and live episodes
//! - recent: episodes, feeds, new feeds, new value feeds, soundbites
//! - value, stats, categories
//! - add (write-scoped keys) and hub notification
//!
//! Paths live in [`endpoints`].

mod add;
mod client;
pub mod endpoints;
mod episodes;
mod hub;
mod podcasts;
mod recent;
mod search;
mod stats;
mod value;

pub use add::{AddByFeedUrlRequest, AddByItunesIdRequest};
pub use client::{PodcastIndexClient, PodcastIndexClientBuilder};
pub use endpoints::PODCASTINDEX_BASE_URL;
pub use episodes::{
    EpisodeByGuidRequest, EpisodeByIdRequest, EpisodesByFeedIdRequest, EpisodesByFeedUrlRequest,
    EpisodesByItunesIdRequest, EpisodesByPodcastGuidRequest, LiveEpisodesRequest,
    RandomEpisodesRequest,
};
pub use hub::HubNotifyRequest;
pub use podcasts::{PodcastsByMediumRequest, TrendingRequest};
pub use recent::{
    RecentEpisodesRequest, RecentFeedsRequest, RecentNewFeedsRequest, RecentNewValueFeedsRequest,
};
pub use search::{PersonSearchRequest, SearchRequest};
