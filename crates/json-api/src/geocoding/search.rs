//! Geocoding Search Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use deliveries_app::domain::geocoding::models::{AddressComponent, Location};

use crate::{extensions::*, geocoding::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressComponentResponse {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

impl From<AddressComponent> for AddressComponentResponse {
    fn from(component: AddressComponent) -> Self {
        AddressComponentResponse {
            long_name: component.long_name,
            short_name: component.short_name,
            types: component.types,
        }
    }
}

/// A geocoded address
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,

    /// Formatted address reported by the provider
    pub display_name: String,

    pub address: Vec<AddressComponentResponse>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        LocationResponse {
            latitude: location.latitude,
            longitude: location.longitude,
            display_name: location.display_name,
            address: location.address.into_iter().map(Into::into).collect(),
        }
    }
}

/// Geocoding Search Handler
///
/// Resolves a free-form address (`endereco`) to coordinates.
#[endpoint(
    tags("geocoding"),
    summary = "Search Address",
    responses(
        (status_code = StatusCode::OK, description = "Address resolved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing address"),
        (status_code = StatusCode::NOT_FOUND, description = "No results for address"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Geocoding lookup failed"),
    ),
)]
pub(crate) async fn handler(
    endereco: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<LocationResponse>, StatusError> {
    let address = endereco
        .into_inner()
        .filter(|address| !address.trim().is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Missing endereco parameter"))?;

    let location = depot
        .state_or_500()?
        .app
        .geocoding
        .search(&address)
        .await
        .map_err(into_status_error)?;

    Ok(Json(location.into()))
}
