//! # PodcastIndex Client
//!
//! An async Rust client library for the [PodcastIndex](https://podcastindex.org) REST API.
//!
//! ## Features
//!
//! - Every search, lookup, recency, value, stats, category, add and hub endpoint
//! - Per-request SHA-1 header signing
//! - Structured errors that keep the HTTP status and the service's own message
//! - Strong typing for all request/response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use podcastindex_api_client::rest::{PodcastIndexClient, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PodcastIndexClient::from_env()?;
//!     let results = client.search(&SearchRequest::new("no agenda")).await?;
//!     println!("Found {} feeds", results.count);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{ConfigError, PodcastIndexError, ServiceError};
pub use rest::PodcastIndexClient;

/// Result type alias using PodcastIndexError
pub type Result<T> = std::result::Result<T, PodcastIndexError>;
