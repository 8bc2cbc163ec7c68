//! Example: Working with PodcastIndexError and ServiceError.
//!
//! Run with: cargo run --example error_handling

use podcastindex_api_client::config::ClientConfig;
use podcastindex_api_client::error::{PodcastIndexError, ServiceError};

fn main() {
    let service_error = ServiceError::new(401, "Unauthorized")
        .with_service_fields(Some("false".into()), Some("Invalid API key".into()));
    println!("Service error: {}", service_error);
    println!("Transport status: {}", service_error.transport_status);
    println!("Is unauthorized: {}", service_error.is_unauthorized());

    let err = PodcastIndexError::Service(service_error);
    match err.as_service() {
        Some(inner) if inner.is_unauthorized() => {
            println!("Matched rejected credentials");
        }
        Some(inner) => {
            println!("Other service error: {}", inner);
        }
        None => {
            println!("Unexpected error type");
        }
    }

    // An empty lookup reports every missing variable at once.
    match ClientConfig::from_lookup(|_| None) {
        Ok(_) => println!("Unexpectedly configured"),
        Err(err) => {
            println!("Config error: {}", err);
            println!("Missing: {:?}", err.missing());
        }
    }
}
