//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use deliveries_app::{
    context::AppContext,
    domain::{
        clients::{
            MockClientsService,
            records::{ClientId, ClientRecord},
        },
        geocoding::MockGeocodingService,
    },
};

use crate::state::State;

pub(crate) fn make_client(id: ClientId) -> ClientRecord {
    ClientRecord {
        id,
        name: "A".to_string(),
        weight_kg: 10.0,
        address: "X".to_string(),
        street: "Y".to_string(),
        number: 1,
        neighborhood: "Z".to_string(),
        complement: String::new(),
        city: "C".to_string(),
        state: "S".to_string(),
        country: "Br".to_string(),
        latitude: -1.0,
        longitude: -1.0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

fn strict_geocoding_mock() -> MockGeocodingService {
    let mut geocoding = MockGeocodingService::new();

    geocoding.expect_search().never();

    geocoding
}

fn strict_clients_mock() -> MockClientsService {
    let mut clients = MockClientsService::new();

    clients.expect_get_client().never();
    clients.expect_list_clients().never();
    clients.expect_create_client().never();
    clients.expect_update_client().never();
    clients.expect_delete_client().never();
    clients.expect_delete_all_clients().never();

    clients
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn clients_service(clients: MockClientsService, route: Router) -> Service {
    service_with(
        AppContext::new(Arc::new(clients), Arc::new(strict_geocoding_mock())),
        route,
    )
}

pub(crate) fn geocoding_service(geocoding: MockGeocodingService, route: Router) -> Service {
    service_with(
        AppContext::new(Arc::new(strict_clients_mock()), Arc::new(geocoding)),
        route,
    )
}
