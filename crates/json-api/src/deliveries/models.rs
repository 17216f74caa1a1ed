//! Delivery response models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use deliveries_app::domain::clients::records::ClientRecord;

/// A stored delivery client, fields in table order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientResponse {
    /// Store-assigned identity
    pub id: i64,
    pub name: String,
    /// Weight in kilograms
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
    /// The date and time the client was created
    pub created_at: String,
    /// The date and time the client was last updated
    pub updated_at: String,
    /// The date and time the client was deleted
    pub deleted_at: Option<String>,
}

impl From<ClientRecord> for ClientResponse {
    fn from(client: ClientRecord) -> Self {
        ClientResponse {
            id: client.id.into_i64(),
            name: client.name,
            weight_kg: client.weight_kg,
            address: client.address,
            street: client.street,
            number: client.number,
            neighborhood: client.neighborhood,
            complement: client.complement,
            city: client.city,
            state: client.state,
            country: client.country,
            latitude: client.latitude,
            longitude: client.longitude,
            created_at: client.created_at.to_string(),
            updated_at: client.updated_at.to_string(),
            deleted_at: client.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}
