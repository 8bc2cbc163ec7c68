//! PubSubHubbub notification.

use serde::Serialize;

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::hub;
use crate::types::HubNotifyResponse;

/// Request parameters for a hub notification. Set one of the two fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HubNotifyRequest {
    /// Feed ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<u64>,
    /// Feed URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
}

impl HubNotifyRequest {
    /// Notify about a feed by ID.
    pub fn feed_id(id: u64) -> Self {
        Self {
            feed_id: Some(id),
            feed_url: None,
        }
    }

    /// Notify about a feed by URL.
    pub fn feed_url(url: impl Into<String>) -> Self {
        Self {
            feed_id: None,
            feed_url: Some(url.into()),
        }
    }
}

impl PodcastIndexClient {
    /// Tell the index that a feed changed and should be re-crawled.
    pub async fn hub_notify(
        &self,
        request: &HubNotifyRequest,
    ) -> Result<HubNotifyResponse, PodcastIndexError> {
        self.get_with_params(hub::PUB_NOTIFY, request).await
    }
}
