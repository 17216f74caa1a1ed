//! Client change sets.

use smallvec::SmallVec;

use crate::domain::clients::data::ClientPatch;

/// The sparse set of column values a partial update writes.
///
/// Built one field at a time from a [`ClientPatch`]: a field lands here only when the
/// patch carries a non-zero value for it. Identity and timestamps are never part of a
/// patch, so they can never be written through this path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ClientChanges {
    #[must_use]
    pub fn from_patch(patch: ClientPatch) -> Self {
        Self {
            name: patch.name.and_then(non_empty),
            weight_kg: patch.weight_kg.and_then(non_zero),
            address: patch.address.and_then(non_empty),
            street: patch.street.and_then(non_empty),
            number: patch.number.filter(|number| *number != 0),
            neighborhood: patch.neighborhood.and_then(non_empty),
            complement: match patch.complement {
                Some(Some(complement)) => non_empty(complement),
                Some(None) => Some(String::new()),
                None => None,
            },
            city: patch.city.and_then(non_empty),
            state: patch.state.and_then(non_empty),
            country: patch.country.and_then(non_empty),
            latitude: patch.latitude.and_then(non_zero),
            longitude: patch.longitude.and_then(non_zero),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Column names present in this change set, in table order.
    #[must_use]
    pub fn changed_fields(&self) -> SmallVec<[&'static str; 12]> {
        [
            ("name", self.name.is_some()),
            ("weight_kg", self.weight_kg.is_some()),
            ("address", self.address.is_some()),
            ("street", self.street.is_some()),
            ("number", self.number.is_some()),
            ("neighborhood", self.neighborhood.is_some()),
            ("complement", self.complement.is_some()),
            ("city", self.city.is_some()),
            ("state", self.state.is_some()),
            ("country", self.country.is_some()),
            ("latitude", self.latitude.is_some()),
            ("longitude", self.longitude.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, changed)| changed.then_some(field))
        .collect()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn non_zero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}
