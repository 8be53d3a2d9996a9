//! Caller-side validation of geographic inputs
//!
//! The geometry engine assumes finite, in-range coordinates and does not
//! validate them itself; anything crossing a trust boundary (device location
//! updates, decoded API payloads) goes through here first.

use std::fmt;

use crate::core::GeoPoint;

/// Coordinate validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude outside [-90, 90] degrees
    LatitudeOutOfRange { value: f64 },
    /// Longitude outside [-180, 180] degrees
    LongitudeOutOfRange { value: f64 },
    /// A coordinate is NaN or infinite
    NonFiniteCoordinate { field: &'static str, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::LatitudeOutOfRange { value } => {
                write!(f, "Latitude out of range [-90, 90]: {}", value)
            }
            ValidationError::LongitudeOutOfRange { value } => {
                write!(f, "Longitude out of range [-180, 180]: {}", value)
            }
            ValidationError::NonFiniteCoordinate { field, value } => {
                write!(f, "Non-finite {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// True when `lat` is a finite latitude within [-90, 90] degrees
pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && lat.abs() <= 90.0
}

/// True when `lon` is a finite longitude within [-180, 180] degrees
pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && lon.abs() <= 180.0
}

/// Validate a geographic point for use as a geometry or search input
pub fn validate_point(point: &GeoPoint) -> Result<(), ValidationError> {
    if !point.lat.is_finite() {
        return Err(ValidationError::NonFiniteCoordinate {
            field: "latitude",
            value: point.lat,
        });
    }
    if !point.lon.is_finite() {
        return Err(ValidationError::NonFiniteCoordinate {
            field: "longitude",
            value: point.lon,
        });
    }
    if !is_valid_latitude(point.lat) {
        return Err(ValidationError::LatitudeOutOfRange { value: point.lat });
    }
    if !is_valid_longitude(point.lon) {
        return Err(ValidationError::LongitudeOutOfRange { value: point.lon });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_points_pass() {
        assert!(validate_point(&GeoPoint::new(0.0, 0.0)).is_ok());
        assert!(validate_point(&GeoPoint::new(47.4979, 19.0402)).is_ok());
        assert!(validate_point(&GeoPoint::new(-33.8688, 151.2093)).is_ok());
    }

    #[test]
    fn test_boundary_values_pass() {
        assert!(validate_point(&GeoPoint::new(90.0, 180.0)).is_ok());
        assert!(validate_point(&GeoPoint::new(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_fails() {
        assert_eq!(
            validate_point(&GeoPoint::new(90.0001, 0.0)),
            Err(ValidationError::LatitudeOutOfRange { value: 90.0001 })
        );
    }

    #[test]
    fn test_out_of_range_longitude_fails() {
        assert_eq!(
            validate_point(&GeoPoint::new(0.0, -180.5)),
            Err(ValidationError::LongitudeOutOfRange { value: -180.5 })
        );
    }

    #[test]
    fn test_non_finite_coordinates_fail() {
        assert!(matches!(
            validate_point(&GeoPoint::new(f64::NAN, 0.0)),
            Err(ValidationError::NonFiniteCoordinate {
                field: "latitude",
                ..
            })
        ));
        assert!(matches!(
            validate_point(&GeoPoint::new(0.0, f64::NEG_INFINITY)),
            Err(ValidationError::NonFiniteCoordinate {
                field: "longitude",
                ..
            })
        ));
    }
}
