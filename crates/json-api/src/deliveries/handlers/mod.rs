//! Delivery Handlers

use salvo::prelude::StatusError;

use deliveries_app::domain::clients::records::ClientId;

use crate::extensions::*;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

/// Parse an `id` query value into a client identity greater than zero.
fn parse_client_id(value: &str) -> Result<ClientId, StatusError> {
    let id = value
        .trim()
        .parse::<i64>()
        .map(ClientId::from_i64)
        .or_400("Invalid client id")?;

    if !id.is_positive() {
        return Err(StatusError::bad_request().brief("Invalid client id"));
    }

    Ok(id)
}
