//! Wire data model for the nearby-search response
//!
//! The payload is optional-field-heavy: other than `position.lat`/`lon`
//! inside a usable result, any field may be absent, and absence is a
//! null-valued field rather than an error. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

/// Top-level nearby-search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl NearbySearchResponse {
    /// Distill the usable places: results carrying a position.
    ///
    /// Results without a position cannot be placed on a map or in a scene
    /// and are silently dropped.
    pub fn places(&self) -> Vec<Place> {
        self.results.iter().filter_map(SearchResult::to_place).collect()
    }
}

/// Response summary metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub query_type: Option<String>,
    pub query_time: Option<i64>,
    pub num_results: Option<i64>,
    pub offset: Option<i64>,
    pub total_results: Option<i64>,
    pub fuzzy_level: Option<i64>,
    pub geo_bias: Option<LatLon>,
}

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub id: Option<String>,
    pub score: Option<f64>,
    /// Distance from the search origin in meters, as reported by the service
    pub dist: Option<f64>,
    pub info: Option<String>,
    pub poi: Option<Poi>,
    pub address: Option<Address>,
    pub position: Option<LatLon>,
    pub viewport: Option<Viewport>,
    pub entry_points: Option<Vec<EntryPoint>>,
}

impl SearchResult {
    /// Distill this result into a [`Place`], or `None` if it has no position
    pub fn to_place(&self) -> Option<Place> {
        let position = self.position.as_ref()?;
        Some(Place {
            id: self.id.clone(),
            name: self.poi.as_ref().and_then(|poi| poi.name.clone()),
            category: self
                .poi
                .as_ref()
                .and_then(|poi| poi.categories.as_ref())
                .and_then(|categories| categories.first().cloned()),
            position: position.to_geo_point(),
            distance_m: self.dist,
        })
    }
}

/// Point-of-interest details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub category_set: Option<Vec<CategorySet>>,
    pub categories: Option<Vec<String>>,
    pub classifications: Option<Vec<Classification>>,
    pub url: Option<String>,
}

/// Category set entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySet {
    pub id: Option<i64>,
}

/// POI classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub code: Option<String>,
    pub names: Option<Vec<ClassificationName>>,
}

/// Localized classification name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationName {
    pub name_locale: Option<String>,
    pub name: Option<String>,
}

/// Structured address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub municipality: Option<String>,
    pub country_secondary_subdivision: Option<String>,
    pub country_subdivision: Option<String>,
    pub country_subdivision_name: Option<String>,
    pub postal_code: Option<String>,
    pub extended_postal_code: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "countryCodeISO3")]
    pub country_code_iso3: Option<String>,
    pub freeform_address: Option<String>,
    pub local_name: Option<String>,
}

/// Latitude/longitude pair as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn to_geo_point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Bounding viewport of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub top_left_point: Option<LatLon>,
    pub btm_right_point: Option<LatLon>,
}

/// Entry point (e.g. main entrance) of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub position: Option<LatLon>,
}

/// A usable nearby place distilled from one search result
///
/// This is the shape the placement engine and the map layer consume: a
/// guaranteed position plus the display fields that happen to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Option<String>,
    pub name: Option<String>,
    /// First listed POI category, if any
    pub category: Option<String>,
    pub position: GeoPoint,
    /// Service-reported distance from the search origin, meters
    pub distance_m: Option<f64>,
}
