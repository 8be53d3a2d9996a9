//! Physical constants and display tuning defaults

use std::f64::consts::PI;

/// Mean Earth radius in meters (spherical model used by the haversine formula)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default half-turn correction for marker model orientation (radians).
///
/// The reference marker asset is authored with its forward face pointing away
/// from the camera, so the placement rotation adds half a turn to show the
/// front. This is an asset convention, not a physical law; override it via
/// [`crate::utils::config::PlacementConfig`] for assets authored differently.
pub const MODEL_FORWARD_OFFSET_RAD: f64 = PI;

/// Default numerator of the inverse-distance scale falloff (scene units x meters)
pub const DEFAULT_SCALE_NUMERATOR: f64 = 1000.0;

/// Default lower clamp bound for marker scale, reached by distant markers
pub const DEFAULT_MIN_SCALE: f64 = 1.5;

/// Default upper clamp bound for marker scale, reached by nearby markers
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Approximate miles spanned by one degree of latitude at the equator
pub const MILES_PER_DEGREE: f64 = 69.0;
