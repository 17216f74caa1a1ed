//! Test Helpers

use crate::domain::clients::data::NewClient;

/// A client that passes every validation rule.
pub(crate) fn new_client() -> NewClient {
    NewClient {
        name: "A".to_string(),
        weight_kg: 10.0,
        address: "X".to_string(),
        street: "Y".to_string(),
        number: 1,
        neighborhood: "Z".to_string(),
        complement: "Apto 12".to_string(),
        city: "C".to_string(),
        state: "S".to_string(),
        country: "Br".to_string(),
        latitude: -1.0,
        longitude: -1.0,
    }
}
