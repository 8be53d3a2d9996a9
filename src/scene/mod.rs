//! AR scene derivations: marker transforms and overlay visibility

pub mod markers;
pub mod visibility;

pub use markers::{MarkerBuilder, PlacedMarker, BILLBOARD_OFFSET_Y};
pub use visibility::{is_tilted_up, TILT_THRESHOLD_G};
