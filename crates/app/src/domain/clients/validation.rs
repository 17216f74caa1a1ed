//! Client validation rules.

use thiserror::Error;
use tracing::error;

use crate::domain::clients::{data::NewClient, records::ClientId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("weight_kg must be greater than 0")]
    InvalidWeight,

    #[error("{0} must be a valid coordinate")]
    InvalidCoordinate(&'static str),

    #[error("client id must be greater than 0, got {0}")]
    InvalidId(i64),
}

/// Check every field a new client needs before it is inserted.
///
/// Fields are checked in declaration order and the first failure wins.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first missing or out-of-range field.
pub fn validate_new_client(client: &NewClient) -> Result<(), ValidationError> {
    require_text("name", &client.name)?;

    if client.weight_kg <= 0.0 {
        error!(field = "weight_kg", value = client.weight_kg, "invalid weight value");

        return Err(ValidationError::InvalidWeight);
    }

    require_text("address", &client.address)?;
    require_text("street", &client.street)?;

    if client.number == 0 {
        error!(field = "number", value = client.number, "missing required field");

        return Err(ValidationError::MissingField("number"));
    }

    require_text("neighborhood", &client.neighborhood)?;
    require_text("city", &client.city)?;
    require_text("state", &client.state)?;
    require_text("country", &client.country)?;
    require_coordinate("latitude", client.latitude)?;
    require_coordinate("longitude", client.longitude)?;

    Ok(())
}

/// Updates only check the identity; field values are left to the table constraints.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidId`] when `id` is not positive.
pub fn validate_client_id(id: ClientId) -> Result<(), ValidationError> {
    if id.is_positive() {
        return Ok(());
    }

    error!(field = "id", value = id.into_i64(), "missing or invalid client id");

    Err(ValidationError::InvalidId(id.into_i64()))
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        error!(field, "missing required field");

        return Err(ValidationError::MissingField(field));
    }

    Ok(())
}

fn require_coordinate(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value == 0.0 || !value.is_finite() {
        error!(field, value, "invalid coordinate value");

        return Err(ValidationError::InvalidCoordinate(field));
    }

    Ok(())
}
