//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, geocoding::GeocodingApiConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod geocoding;
pub(crate) mod logging;
pub(crate) mod server;

/// Deliveries JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "deliveries-json", about = "Deliveries JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Upstream geocoding API settings.
    #[command(flatten)]
    pub geocoding: GeocodingApiConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "deliveries-json",
            "--database-url",
            "postgres://localhost/deliveries",
            "--geocoding-api-key",
            "secret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);
        assert_eq!(
            config.geocoding.geocoding_base_url,
            "https://api.distancematrix.ai/maps/api/geocode/json"
        );

        Ok(())
    }
}
