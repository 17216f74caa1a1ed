//! Client Data

/// New Client Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub weight_kg: f64,
    pub address: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Client Patch Data
///
/// `None` and zero values (`""`, `0`, `0.0`) both leave the stored value untouched.
/// `complement` is the only optional column, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    pub complement: Option<Option<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
