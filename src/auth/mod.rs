//! Authentication module for the PodcastIndex API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - SHA-1 header signing for every outgoing request

mod credentials;
mod signature;

pub use credentials::{Credentials, validate_credentials};
pub use signature::{AuthHeaders, X_AUTH_DATE, X_AUTH_KEY, sign_request, unix_timestamp};
