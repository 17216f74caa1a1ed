//! Update Delivery Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Deserializer, Serialize};

use deliveries_app::domain::clients::data::ClientPatch;

use crate::{
    deliveries::{errors::into_status_error, models::ClientResponse},
    extensions::*,
};

use super::parse_client_id;

/// Update Delivery Request
///
/// Absent fields and zero values leave the stored value unchanged. `complement`
/// may be set to `null` to clear it.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateClientRequest {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub complement: Option<Option<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Marks a field that appears in the payload as present, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateClientRequest> for ClientPatch {
    fn from(request: UpdateClientRequest) -> Self {

        ClientPatch {
            name: request.name,
            weight_kg: request.weight_kg,
            address: request.address,
            street: request.street,
            number: request.number,
            neighborhood: request.neighborhood,
            complement: request.complement,
            city: request.city,
            state: request.state,
            country: request.country,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Delivery Update Handler
#[endpoint(
    tags("deliveries"),
    summary = "Update Delivery",
    responses(
        (status_code = StatusCode::OK, description = "Client updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: QueryParam<String, false>,
    json: JsonBody<UpdateClientRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientResponse>, StatusError> {
    let Some(id) = id.into_inner() else {
        return Err(StatusError::bad_request().brief("Missing client id"));
    };

    let client = parse_client_id(&id)?;

    let updated = depot
        .state_or_500()?
        .app
        .clients
        .update_client(client, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
