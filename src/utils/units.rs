//! Unit conversions shared by the search radius and map span calculations

use crate::core::{METERS_PER_MILE, MILES_PER_DEGREE};

/// Convert statute miles to meters
pub fn meters_from_miles(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Convert a radius in miles to a map span in degrees
///
/// One degree of latitude is roughly 69 miles at the equator; this is a
/// display approximation for sizing a 2D map region, not survey math.
pub fn span_degrees_from_miles(miles: f64) -> f64 {
    miles / MILES_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_from_miles() {
        assert_relative_eq!(meters_from_miles(1.0), 1609.344);
        assert_relative_eq!(meters_from_miles(0.0), 0.0);
        assert_relative_eq!(meters_from_miles(5.0), 8046.72, epsilon = 1e-9);
    }

    #[test]
    fn test_span_degrees_from_miles() {
        assert_relative_eq!(span_degrees_from_miles(69.0), 1.0);
        assert_relative_eq!(span_degrees_from_miles(6.9), 0.1, epsilon = 1e-12);
    }
}
