//! Create Delivery Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use deliveries_app::domain::clients::data::NewClient;

use crate::{deliveries::errors::into_status_error, extensions::*};

/// Create Delivery Request
///
/// Omitted fields default to their zero value and fail validation, except `complement`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CreateClientRequest {
    pub name: String,
    pub weight_kg: f64,
    pub address: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CreateClientRequest> for NewClient {
    fn from(request: CreateClientRequest) -> Self {

        NewClient {
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

/// Create Delivery Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientCreatedResponse {
    /// Identity of the created client
    #[serde(rename = "operationID")]
    pub operation_id: i64,
}

/// Create Delivery Handler
#[endpoint(
    tags("deliveries"),
    summary = "Create Delivery",
    responses(
        (status_code = StatusCode::OK, description = "Client created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateClientRequest>,
    depot: &mut Depot,
) -> Result<Json<ClientCreatedResponse>, StatusError> {
    let client = depot
        .state_or_500()?
        .app
        .clients
        .create_client(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ClientCreatedResponse {
        operation_id: client.id.into_i64(),
    }))
}
