//! Utility modules for configuration and unit conversion

pub mod config;
pub mod units;

pub use config::{ConfigError, HeadingMode, PlacementConfig, SearchConfig};
pub use units::{meters_from_miles, span_degrees_from_miles};
