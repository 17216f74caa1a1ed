//! Geocoding Models

use serde::Deserialize;

/// A resolved address.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,

    /// The provider's formatted, single-line address.
    pub display_name: String,

    /// Address parts as returned by the provider, most specific first.
    pub address: Vec<AddressComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,

    #[serde(default)]
    pub short_name: String,

    #[serde(default)]
    pub types: Vec<String>,
}
