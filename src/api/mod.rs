//! Nearby-places web API: wire model, injectable client, fetch lifecycle

pub mod types;
pub mod client;
pub mod feed;

pub use types::{NearbySearchResponse, Place, SearchResult};
pub use client::{HttpPlacesClient, PlacesClient};
pub use feed::PlacesFeed;
