//! Geocoding errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("no results for address")]
    NoResults,

    #[error("unexpected geocoding status: {0}")]
    UnexpectedStatus(String),

    #[error("geocoding response is missing {0}")]
    MissingData(&'static str),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
