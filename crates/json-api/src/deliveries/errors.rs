//! Deliveries Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use deliveries_app::domain::clients::{ClientsServiceError, ValidationError};

pub(crate) fn into_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::Validation(source) => {
            warn!("client rejected: {source}");

            StatusError::bad_request().brief(validation_brief(&source))
        }
        ClientsServiceError::NoFieldsToUpdate => {
            StatusError::bad_request().brief("No valid fields to update")
        }
        ClientsServiceError::MissingRequiredData | ClientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid client payload")
        }
        ClientsServiceError::NotFound => StatusError::not_found().brief("Client not found"),
        ClientsServiceError::Sql(source) => {
            error!("client storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn validation_brief(error: &ValidationError) -> String {
    match error {
        ValidationError::InvalidId(_) => "Invalid client id".to_string(),
        ValidationError::MissingField(_)
        | ValidationError::InvalidWeight
        | ValidationError::InvalidCoordinate(_) => error.to_string(),
    }
}
