//! Geocoding Config

use clap::Args;

use deliveries_app::domain::geocoding::{DEFAULT_GEOCODING_BASE_URL, GeocodingConfig};

/// Upstream geocoding API settings.
#[derive(Debug, Args)]
pub struct GeocodingApiConfig {
    /// Geocode endpoint URL
    #[arg(long, env = "GEOCODING_BASE_URL", default_value = DEFAULT_GEOCODING_BASE_URL)]
    pub geocoding_base_url: String,

    /// Geocoding API key
    #[arg(long, env = "GEOCODING_API_KEY", hide_env_values = true)]
    pub geocoding_api_key: String,
}

impl From<GeocodingApiConfig> for GeocodingConfig {
    fn from(config: GeocodingApiConfig) -> Self {
        Self {
            base_url: config.geocoding_base_url,
            api_key: config.geocoding_api_key,
        }
    }
}
