//! Geocoding Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use deliveries_app::domain::geocoding::GeocodingError;

pub(crate) fn into_status_error(error: GeocodingError) -> StatusError {
    match error {
        GeocodingError::NoResults => {
            warn!("no geocoding results for address");

            StatusError::not_found().brief("No results for address")
        }
        GeocodingError::UnexpectedStatus(_)
        | GeocodingError::MissingData(_)
        | GeocodingError::Http(_) => {
            error!("geocoding lookup failed: {error}");

            StatusError::internal_server_error().brief("Geocoding lookup failed")
        }
    }
}
