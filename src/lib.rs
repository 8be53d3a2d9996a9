//! Geo-anchored AR marker placement
//!
//! Computes 3D placement transforms (position, rotation, scale) that make
//! renderable markers appear at the real-world bearing and distance of nearby
//! places, in an AR scene aligned with true-world heading at session start.
//! Also provides the nearby-places HTTP client the markers are fed from, and
//! the 2D map derivations that share the same result set.

pub mod core;
pub mod geometry;
pub mod api;
pub mod scene;
pub mod map;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use core::{GeoPoint, PlacementResult};
pub use geometry::{distance_m, initial_bearing, PlacementEngine};
pub use api::{HttpPlacesClient, NearbySearchResponse, Place, PlacesClient, PlacesFeed};
pub use scene::{is_tilted_up, MarkerBuilder, PlacedMarker};
pub use map::{annotations, MapAnnotation, MapRegion};
pub use validation::{validate_point, ValidationError};
pub use utils::config::{ConfigError, HeadingMode, PlacementConfig, SearchConfig};
