//! 2D map artifacts derived from the same result set as the AR scene

use crate::api::types::Place;
use crate::core::GeoPoint;
use crate::utils::units::span_degrees_from_miles;

/// A 2D map pin for one place
#[derive(Debug, Clone, PartialEq)]
pub struct MapAnnotation {
    pub position: GeoPoint,
    /// Pin title: the POI name, if present
    pub title: Option<String>,
    /// Pin subtitle: the first listed category, if present
    pub subtitle: Option<String>,
}

/// One annotation per place
pub fn annotations(places: &[Place]) -> Vec<MapAnnotation> {
    places
        .iter()
        .map(|place| MapAnnotation {
            position: place.position,
            title: place.name.clone(),
            subtitle: place.category.clone(),
        })
        .collect()
}

/// A square map region centered on the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: GeoPoint,
    /// Latitude/longitude span of the visible region, degrees
    pub span_degrees: f64,
}

impl MapRegion {
    /// Region around `center` sized for a search radius in miles.
    ///
    /// The visible span is a tenth of the search radius; the map shows the
    /// user's immediate surroundings while the search covers a wider area.
    pub fn around(center: GeoPoint, radius_miles: f64) -> Self {
        Self {
            center,
            span_degrees: span_degrees_from_miles(radius_miles / 10.0),
        }
    }
}
