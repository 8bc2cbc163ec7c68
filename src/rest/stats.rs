//! Index statistics and categories.

use crate::error::PodcastIndexError;
use crate::rest::PodcastIndexClient;
use crate::rest::endpoints::{categories, stats};
use crate::types::{CategoriesResponse, StatsResponse};

impl PodcastIndexClient {
    /// Get the current index statistics.
    pub async fn get_stats(&self) -> Result<StatsResponse, PodcastIndexError> {
        self.get(stats::CURRENT).await
    }

    /// Get every category the index knows about.
    pub async fn get_categories(&self) -> Result<CategoriesResponse, PodcastIndexError> {
        self.get(categories::LIST).await
    }
}
