//! Core types and constants for geo-anchored placement

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
