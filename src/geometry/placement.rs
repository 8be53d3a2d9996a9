//! Placement transform construction for geo-anchored AR markers
//!
//! Converts a pair of geographic coordinates (origin = user, target = place)
//! plus the user's facing heading into a position/rotation/scale transform
//! for a scene whose frame is aligned with true-world heading at session
//! start: +X east, +Y up, -Z north.

use nalgebra::{Matrix4, Rotation3, Vector3};

use crate::core::{GeoPoint, PlacementResult};
use crate::utils::config::{ConfigError, PlacementConfig};

use super::great_circle;

/// Pure geometry engine turning geographic point pairs into scene transforms
///
/// Stateless apart from its immutable configuration: no I/O, no interior
/// mutability, safe to call from any thread, and deterministic. Every call
/// returns a fresh [`PlacementResult`] with no aliasing to engine state.
///
/// Latitude/longitude range checks are the caller's responsibility (see
/// [`crate::validation`]); all float inputs are assumed finite.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    config: PlacementConfig,
}

impl PlacementEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: PlacementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Place a marker for `target` relative to a user at `origin`.
    ///
    /// Equivalent to [`place_with_transform`](Self::place_with_transform)
    /// with the identity origin transform, i.e. the user is the AR session's
    /// reference origin.
    pub fn place(&self, origin: GeoPoint, heading_rad: f64, target: GeoPoint) -> PlacementResult {
        self.place_with_transform(&Matrix4::identity(), origin, heading_rad, target)
    }

    /// Place a marker, composing with an explicit origin transform.
    ///
    /// The marker ends up `distance` scene units from the origin, in the
    /// horizontal direction of the great-circle bearing from origin to
    /// target: the straight-ahead offset (0, 0, -distance) is swung around
    /// the vertical axis to the bearing, then composed with
    /// `origin_transform`.
    ///
    /// `heading_rad` is the live facing heading; whether it is honored or
    /// replaced by a fixed value is decided by the configured
    /// [`HeadingMode`](crate::utils::config::HeadingMode).
    pub fn place_with_transform(
        &self,
        origin_transform: &Matrix4<f64>,
        origin: GeoPoint,
        heading_rad: f64,
        target: GeoPoint,
    ) -> PlacementResult {
        let bearing = great_circle::initial_bearing(origin, target);
        let distance = great_circle::distance_m(origin, target);

        let heading = self.config.heading.resolve(heading_rad);
        let rotation_radians = -(heading - self.config.model_forward_offset_rad);

        // Swinging (0, 0, -d) to the bearing needs the inverse rotation:
        // bearing pi/2 (due east) must land on +X, not -X.
        let rotation = Matrix4::from(
            Rotation3::from_axis_angle(&Vector3::y_axis(), bearing).inverse(),
        );
        let translation = Matrix4::new_translation(&Vector3::new(0.0, 0.0, -distance));
        let transform = origin_transform * rotation * translation;

        let offset = transform.column(3);
        let position = Vector3::new(offset[0], offset[1], offset[2]);

        PlacementResult {
            position,
            rotation_radians,
            scale: self.marker_scale(distance),
        }
    }

    /// Scale factor for a marker at `distance_m` meters.
    ///
    /// Inverse-distance falloff clamped to the configured bounds, so nearby
    /// markers saturate at `max_scale` instead of ballooning and distant ones
    /// hold `min_scale` instead of shrinking to invisibility. Monotonically
    /// non-increasing in distance.
    pub fn marker_scale(&self, distance_m: f64) -> f64 {
        if distance_m <= 0.0 {
            return self.config.max_scale;
        }
        (self.config.scale_numerator / distance_m).clamp(self.config.min_scale, self.config.max_scale)
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self {
            config: PlacementConfig::default(),
        }
    }
}
