//! Client Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Client Id
pub type ClientId = TypedId<ClientRecord>;

/// Client Record
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub id: ClientId,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Archived Client Record
///
/// A copy of a live client taken just before it is purged from `clients`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedClientRecord {
    pub id: ClientId,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub archived_at: Timestamp,
}

impl ArchivedClientRecord {
    #[must_use]
    pub fn from_client(client: ClientRecord, archived_at: Timestamp) -> Self {
        Self {
            id: client.id,
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
            created_at: client.created_at,
            updated_at: client.updated_at,
            archived_at,
        }
    }
}
