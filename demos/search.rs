//! Example: A minimal search relay.
//!
//! Reads credentials from the environment (or a `.env` file), searches the
//! index and prints the raw result as JSON. Any failure is reported as
//! `{"error": "..."}` with a non-zero exit code.
//!
//! Run with: cargo run --example search -- "no agenda" 5

use podcastindex_api_client::rest::{PodcastIndexClient, SearchRequest};
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX: u32 = 20;

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(q) = args.next().filter(|q| !q.is_empty()) else {
        fail("Query parameter 'q' is required");
    };
    let max = match args.next().map(|max| max.parse::<u32>()) {
        None => DEFAULT_MAX,
        Some(Ok(max)) => max,
        Some(Err(err)) => fail(&format!("Invalid 'max': {err}")),
    };

    let client = match PodcastIndexClient::from_env() {
        Ok(client) => client,
        Err(err) => fail(&err.to_string()),
    };

    match client.search(&SearchRequest::new(q).max(max)).await {
        Ok(results) => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => fail(&err.to_string()),
        },
        Err(err) => fail(&err.to_string()),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", serde_json::json!({ "error": message }));
    std::process::exit(1);
}
