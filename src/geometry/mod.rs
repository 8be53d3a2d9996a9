//! Geometry: great-circle math and the placement engine

pub mod great_circle;
pub mod placement;

pub use great_circle::{distance_m, initial_bearing};
pub use placement::PlacementEngine;
