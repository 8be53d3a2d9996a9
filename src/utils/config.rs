//! Process-wide configuration for search and placement
//!
//! All tunable constants (API key, search radius, scale clamp bounds, model
//! orientation offset, heading source) are supplied here at construction
//! time. There are no configuration files and no runtime mutation; configs
//! are validated once and then treated as immutable.

use std::fmt;

use crate::core::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE_NUMERATOR, MODEL_FORWARD_OFFSET_RAD,
};

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric parameter is NaN or infinite
    NonFinite { parameter: &'static str },
    /// A parameter that must be strictly positive is not
    NonPositive { parameter: &'static str, value: f64 },
    /// Scale clamp bounds are ordered backwards
    InvalidScaleClamp { min: f64, max: f64 },
    /// The search API key is empty
    MissingApiKey,
    /// The search endpoint URL is empty
    MissingBaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { parameter } => {
                write!(f, "Configuration parameter {} must be finite", parameter)
            }
            ConfigError::NonPositive { parameter, value } => {
                write!(
                    f,
                    "Configuration parameter {} must be positive, got {}",
                    parameter, value
                )
            }
            ConfigError::InvalidScaleClamp { min, max } => {
                write!(f, "Scale clamp bounds are backwards: min {} > max {}", min, max)
            }
            ConfigError::MissingApiKey => write!(f, "Search API key is empty"),
            ConfigError::MissingBaseUrl => write!(f, "Search endpoint URL is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Source of the user's facing heading for placement rotation
///
/// The reference implementation froze heading at 0 for the whole session,
/// which silently pinned AR rotation to the session-start orientation. That
/// behavior is preserved as the explicit [`HeadingMode::Fixed`] default;
/// callers with a live compass feed opt into [`HeadingMode::Live`] and pass
/// the current heading with every placement call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingMode {
    /// Ignore per-call headings and always use this value (radians)
    Fixed(f64),
    /// Use the heading supplied with each placement call
    Live,
}

impl HeadingMode {
    /// Effective heading for one placement call
    pub fn resolve(&self, live_heading_rad: f64) -> f64 {
        match self {
            HeadingMode::Fixed(heading) => *heading,
            HeadingMode::Live => live_heading_rad,
        }
    }
}

/// Placement engine tuning parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Numerator of the inverse-distance scale falloff (scene units x meters)
    pub scale_numerator: f64,
    /// Lower scale clamp bound, reached by distant markers
    pub min_scale: f64,
    /// Upper scale clamp bound, reached by nearby markers
    pub max_scale: f64,
    /// Rotation correction for the marker asset's authored orientation (radians)
    pub model_forward_offset_rad: f64,
    /// Heading source for placement rotation
    pub heading: HeadingMode,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            scale_numerator: DEFAULT_SCALE_NUMERATOR,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            model_forward_offset_rad: MODEL_FORWARD_OFFSET_RAD,
            heading: HeadingMode::Fixed(0.0),
        }
    }
}

impl PlacementConfig {
    /// Validate parameter ranges
    ///
    /// Rejects non-finite values, non-positive scale parameters, and clamp
    /// bounds ordered so that min exceeds max. The backwards ordering is a
    /// construction-time error here rather than a silent pin at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_params = [
            ("scale_numerator", self.scale_numerator),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("model_forward_offset_rad", self.model_forward_offset_rad),
        ];
        for (parameter, value) in finite_params {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { parameter });
            }
        }
        if let HeadingMode::Fixed(heading) = self.heading {
            if !heading.is_finite() {
                return Err(ConfigError::NonFinite { parameter: "heading" });
            }
        }

        for (parameter, value) in [
            ("scale_numerator", self.scale_numerator),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { parameter, value });
            }
        }

        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvalidScaleClamp {
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        Ok(())
    }
}

/// Nearby-search service parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Nearby-search endpoint URL
    pub base_url: String,
    /// Search radius in statute miles, converted to meters on the wire
    pub radius_miles: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.tomtom.com/search/2/nearbySearch/.json".to_string(),
            radius_miles: 5.0,
        }
    }
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !self.radius_miles.is_finite() {
            return Err(ConfigError::NonFinite {
                parameter: "radius_miles",
            });
        }
        if self.radius_miles <= 0.0 {
            return Err(ConfigError::NonPositive {
                parameter: "radius_miles",
                value: self.radius_miles,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placement_config_is_valid() {
        assert!(PlacementConfig::default().validate().is_ok());
    }

    #[test]
    fn test_backwards_scale_clamp_is_rejected() {
        // The clamp ordering the reference implementation shipped with:
        // a lower bound of 3 above an upper bound of 1.5 pins every marker
        // to the lower bound. It must fail validation, not render.
        let config = PlacementConfig {
            min_scale: 3.0,
            max_scale: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidScaleClamp { min: 3.0, max: 1.5 })
        );
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        let config = PlacementConfig {
            scale_numerator: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                parameter: "scale_numerator"
            })
        );

        let config = PlacementConfig {
            heading: HeadingMode::Fixed(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { parameter: "heading" })
        );
    }

    #[test]
    fn test_non_positive_scale_is_rejected() {
        let config = PlacementConfig {
            min_scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                parameter: "min_scale",
                ..
            })
        ));
    }

    #[test]
    fn test_heading_mode_resolution() {
        assert_eq!(HeadingMode::Fixed(1.25).resolve(0.5), 1.25);
        assert_eq!(HeadingMode::Live.resolve(0.5), 0.5);
    }

    #[test]
    fn test_search_config_requires_key_and_positive_radius() {
        assert_eq!(
            SearchConfig::default().validate(),
            Err(ConfigError::MissingApiKey)
        );

        let config = SearchConfig {
            radius_miles: -1.0,
            ..SearchConfig::new("test-key")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                parameter: "radius_miles",
                ..
            })
        ));

        assert!(SearchConfig::new("test-key").validate().is_ok());
    }
}
