//! Value-for-value endpoints.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::value;
use crate::types::ValueResponse;

impl PodcastIndexClient {
    /// Get the value block of a feed by feed ID.
    pub async fn get_value_by_feed_id(&self, id: u64) -> Result<ValueResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params {
            id: u64,
        }
        self.get_with_params(value::BY_FEED_ID, &Params { id })
            .await
    }

    /// Get the value block of a feed by feed URL.
    pub async fn get_value_by_feed_url(
        &self,
        url: &str,
    ) -> Result<ValueResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params<'a> {
            url: &'a str,
        }
        self.get_with_params(value::BY_FEED_URL, &Params { url })
            .await
    }

    /// Get the value block of a feed by `<podcast:guid>`.
    pub async fn get_value_by_podcast_guid(
        &self,
        guid: &str,
    ) -> Result<ValueResponse, PodcastIndexError> {
        #[derive(Serialize)]
        struct Params<'a> {
            guid: &'a str,
        }
        self.get_with_params(value::BY_PODCAST_GUID, &Params { guid })
            .await
    }
}
