//! Response types shared across the PodcastIndex endpoints.

pub mod episode;
pub mod podcast;
pub mod responses;
pub mod serde_helpers;
pub mod value;

pub use episode::{Episode, Person, RecentSoundbite, Soundbite};
pub use podcast::{Category, Funding, Podcast};
pub use responses::*;
pub use value::{ValueBlock, ValueDestination, ValueModel};
