//! Geocoding

pub mod client;
pub mod errors;
pub mod models;
pub mod service;

pub use client::{DEFAULT_GEOCODING_BASE_URL, DistanceMatrixClient, GeocodingConfig};
pub use errors::GeocodingError;
pub use service::*;
