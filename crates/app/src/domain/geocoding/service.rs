//! Geocoding service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::geocoding::{
    client::DistanceMatrixClient, errors::GeocodingError, models::Location,
};

#[async_trait]
impl GeocodingService for DistanceMatrixClient {
    async fn search(&self, address: &str) -> Result<Location, GeocodingError> {
        let location = self.geocode(address).await?;

        info!(
            display_name = %location.display_name,
            latitude = location.latitude,
            longitude = location.longitude,
            "address geocoded"
        );

        Ok(location)
    }
}

#[automock]
#[async_trait]
pub trait GeocodingService: Send + Sync {
    /// Resolve a free-form address to coordinates and address components.
    async fn search(&self, address: &str) -> Result<Location, GeocodingError>;
}
