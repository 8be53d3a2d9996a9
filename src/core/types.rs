//! Core data types for geo-anchored marker placement

use nalgebra::Vector3;

/// Geographic point in WGS84 degrees
///
/// Immutable value type with no identity beyond value equality. Latitude and
/// longitude are expected to be in range (|lat| <= 90, |lon| <= 180); callers
/// are responsible for validating inputs before handing them to the geometry
/// layer (see [`crate::validation`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in radians
    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// 3D placement transform for one renderable marker
///
/// Computed fresh per target point; never mutated after construction. The
/// position is expressed in scene units relative to the AR session origin,
/// whose forward (-Z) axis is aligned with true north at session start.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementResult {
    /// Marker position in the scene frame (x east, y up, -z north)
    pub position: Vector3<f64>,
    /// Rotation about the vertical (Y) axis, radians
    pub rotation_radians: f64,
    /// Uniform scale factor, always within the configured clamp bounds
    pub scale: f64,
}
