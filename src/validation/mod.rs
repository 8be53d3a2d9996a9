//! Input validation for geographic data

pub mod coordinates;

pub use coordinates::{is_valid_latitude, is_valid_longitude, validate_point, ValidationError};
