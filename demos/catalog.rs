//! Example: Browsing the index.
//!
//! Walks a few lookup, recency and value endpoints for one feed.
//!
//! Run with: cargo run --example catalog

use podcastindex_api_client::rest::{
    EpisodesByFeedIdRequest, PodcastIndexClient, RecentFeedsRequest, TrendingRequest,
};

// Podcasting 2.0
const FEED_ID: u64 = 920666;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let client = PodcastIndexClient::from_env()?;

    println!("=== Index Stats ===");
    let stats = client.get_stats().await?;
    println!("Feeds: {}", stats.stats.feed_count_total);
    println!("Episodes: {}", stats.stats.episode_count_total);
    println!("With value blocks: {}", stats.stats.feeds_with_value_blocks);

    println!("\n=== Feed {FEED_ID} ===");
    let podcast = client.get_podcast_by_feed_id(FEED_ID).await?;
    match podcast.feed {
        Some(feed) => {
            println!("{} by {}", feed.title, feed.author);
            println!("URL: {}", feed.url);
            for funding in &feed.funding {
                println!("Funding: {}", funding.url);
            }
        }
        None => println!("{}", podcast.description),
    }

    println!("\n=== Latest Episodes ===");
    let request = EpisodesByFeedIdRequest {
        max: Some(5),
        ..EpisodesByFeedIdRequest::new(FEED_ID)
    };
    let episodes = client.get_episodes_by_feed_id(&request).await?;
    for episode in episodes.episodes() {
        let minutes = episode.duration.unwrap_or_default() / 60;
        println!("{} ({} min)", episode.title, minutes);
    }

    println!("\n=== Value Split ===");
    let value = client.get_value_by_feed_id(FEED_ID).await?;
    if let Some(block) = value.value {
        for dest in block.destinations.iter().flatten() {
            println!(
                "{}: {}",
                dest.name.as_deref().unwrap_or("?"),
                dest.split.unwrap_or_default()
            );
        }
    }

    println!("\n=== Trending (en) ===");
    let trending = TrendingRequest {
        max: Some(5),
        lang: Some("en".into()),
        ..Default::default()
    };
    for feed in client.get_trending_podcasts(Some(&trending)).await?.feeds {
        println!("{}: {}", feed.id, feed.title);
    }

    println!("\n=== Recently Updated ===");
    let recent = RecentFeedsRequest {
        max: Some(5),
        ..Default::default()
    };
    for feed in client.get_recent_feeds(Some(&recent)).await?.feeds {
        println!("{}: {}", feed.id, feed.title);
    }

    println!("\n=== Categories ===");
    let categories = client.get_categories().await?;
    for category in categories.feeds.iter().take(10) {
        println!("{}: {}", category.id, category.name);
    }

    Ok(())
}
