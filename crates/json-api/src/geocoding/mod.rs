//! Geocoding

pub(crate) mod errors;
pub(crate) mod search;
