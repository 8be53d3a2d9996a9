//! AR marker construction from fetched places

use nalgebra::Vector3;

use crate::api::types::Place;
use crate::core::{GeoPoint, PlacementResult};
use crate::geometry::PlacementEngine;

/// Vertical offset, in model-local scene units, of the overlay label
/// (billboard) anchored above each marker
pub const BILLBOARD_OFFSET_Y: f64 = 4.0;

/// A place paired with its computed scene transform
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub place: Place,
    pub placement: PlacementResult,
}

impl PlacedMarker {
    /// Local-frame anchor for the marker's overlay label.
    ///
    /// The label is a billboard child of the marker node, so the offset is in
    /// the model's local frame and inherits the marker's transform.
    pub fn billboard_offset(&self) -> Vector3<f64> {
        Vector3::new(0.0, BILLBOARD_OFFSET_Y, 0.0)
    }
}

/// Runs every fetched place through the placement engine
#[derive(Debug, Clone, Default)]
pub struct MarkerBuilder {
    engine: PlacementEngine,
}

impl MarkerBuilder {
    pub fn new(engine: PlacementEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Build one marker per place, relative to the user at `origin`.
    ///
    /// Places arriving here already carry a position (results without one
    /// were dropped during decoding), so nothing is skipped.
    pub fn build(
        &self,
        origin: GeoPoint,
        heading_rad: f64,
        places: &[Place],
    ) -> Vec<PlacedMarker> {
        places
            .iter()
            .map(|place| PlacedMarker {
                place: place.clone(),
                placement: self.engine.place(origin, heading_rad, place.position),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn place_at(lat: f64, lon: f64, name: &str) -> Place {
        Place {
            id: None,
            name: Some(name.to_string()),
            category: None,
            position: GeoPoint::new(lat, lon),
            distance_m: None,
        }
    }

    #[test]
    fn test_build_places_every_place() {
        let builder = MarkerBuilder::default();
        let origin = GeoPoint::new(0.0, 0.0);
        let places = vec![
            place_at(0.001, 0.0, "north"),
            place_at(0.0, 0.001, "east"),
            place_at(0.0, 0.0, "here"),
        ];

        let markers = builder.build(origin, 0.0, &places);
        assert_eq!(markers.len(), 3);

        // Markers keep their source places and get independent transforms.
        assert_eq!(markers[0].place, places[0]);
        assert!(markers[0].placement.position.z < 0.0);
        assert!(markers[1].placement.position.x > 0.0);
        assert_abs_diff_eq!(markers[2].placement.position.norm(), 0.0);
    }

    #[test]
    fn test_build_with_no_places_is_empty() {
        let builder = MarkerBuilder::default();
        assert!(builder.build(GeoPoint::new(0.0, 0.0), 0.0, &[]).is_empty());
    }

    #[test]
    fn test_billboard_offset_is_above_the_marker() {
        let builder = MarkerBuilder::default();
        let origin = GeoPoint::new(0.0, 0.0);
        let markers = builder.build(origin, 0.0, &[place_at(0.001, 0.0, "north")]);

        let offset = markers[0].billboard_offset();
        assert_eq!(offset, Vector3::new(0.0, BILLBOARD_OFFSET_Y, 0.0));
    }
}
