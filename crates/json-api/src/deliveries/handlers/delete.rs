//! Delete Delivery Handler

use salvo::{
    oapi::{ToParameters, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{deliveries::errors::into_status_error, extensions::*};

use super::parse_client_id;

/// Delete Delivery Parameters
///
/// Empty values count as absent.
#[derive(Debug, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct DeleteClientsParams {
    /// Identity of the client to delete
    pub id: Option<String>,
    /// `true` to delete every client
    pub delete_all: Option<String>,
}

impl DeleteClientsParams {
    fn into_parts(self) -> (Option<String>, Option<String>) {
        (
            self.id.filter(|id| !id.is_empty()),
            self.delete_all.filter(|flag| !flag.is_empty()),
        )
    }
}

/// Delete Delivery Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientsDeletedResponse {
    /// Number of clients archived and removed
    pub deleted: u64,
}

/// Delete Delivery Handler
///
/// Archives and removes one client (`id`) or every client (`deleteAll=true`).
#[endpoint(
    tags("deliveries"),
    summary = "Delete Deliveries",
    responses(
        (status_code = StatusCode::OK, description = "Clients deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    params: DeleteClientsParams,
    depot: &mut Depot,
) -> Result<Json<ClientsDeletedResponse>, StatusError> {
    let clients = &depot.state_or_500()?.app.clients;

    let deleted = match params.into_parts() {
        (Some(_), Some(_)) => {
            return Err(StatusError::bad_request().brief("Use either id or deleteAll, not both"));
        }
        (None, Some(flag)) if flag == "true" => clients
            .delete_all_clients()
            .await
            .map_err(into_status_error)?,
        (Some(id), None) => {
            clients
                .delete_client(parse_client_id(&id)?)
                .await
                .map_err(into_status_error)?;

            1
        }
        (None, _) => {
            return Err(StatusError::bad_request().brief("Provide id or deleteAll=true"));
        }
    };

    Ok(Json(ClientsDeletedResponse { deleted }))
}
