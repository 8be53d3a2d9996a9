//! Great-circle bearing and distance on a spherical Earth model

use crate::core::{GeoPoint, EARTH_RADIUS_M};

/// Initial bearing from `origin` to `target`, in radians.
///
/// Uses the standard great-circle bearing formula. The result follows the
/// atan2 convention: 0 points toward geographic north, positive values rotate
/// toward east, range (-pi, pi]. The sign convention is load-bearing for the
/// placement transform and must not be flipped.
///
/// Coincident points have no defined bearing; this returns exactly 0.0 in
/// that case, since a marker at zero distance has no meaningful facing.
pub fn initial_bearing(origin: GeoPoint, target: GeoPoint) -> f64 {
    if origin == target {
        return 0.0;
    }

    let lat1 = origin.lat_radians();
    let lat2 = target.lat_radians();
    let delta_lon = (target.lon - origin.lon).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    y.atan2(x)
}

/// Haversine great-circle distance between two points, in meters.
///
/// Non-negative, symmetric, and 0 for coincident points. Computed on the
/// mean-radius sphere; the sub-0.5% error against a true geodesic is
/// irrelevant at marker-placement ranges.
pub fn distance_m(origin: GeoPoint, target: GeoPoint) -> f64 {
    let lat1 = origin.lat_radians();
    let lat2 = target.lat_radians();
    let d_lat = (target.lat - origin.lat).to_radians();
    let d_lon = (target.lon - origin.lon).to_radians();

    let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
