//! Delivery Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use deliveries_app::domain::clients::pagination::{ClientsQuery, PageRequest};

use crate::{
    deliveries::{errors::into_status_error, models::ClientResponse},
    extensions::*,
};

use super::parse_client_id;

/// A single client, looked up by identity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientEnvelope {
    pub client: ClientResponse,
}

/// One page of clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientsPageResponse {
    pub clients: Vec<ClientResponse>,

    /// Number of clients matching the filter, across all pages
    pub total: i64,

    pub total_pages: i64,

    /// 1-based page number of this page
    pub current_page: i64,

    /// Link to the following page, absent on the last one
    #[serde(rename = "nextPageURL")]
    pub next_page_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum DeliveriesResponse {
    Client(ClientEnvelope),
    Page(ClientsPageResponse),
}

/// Delivery Index Handler
///
/// Returns one client when `id` is given, otherwise a page of clients.
#[endpoint(
    tags("deliveries"),
    summary = "Get or List Deliveries",
    responses(
        (status_code = StatusCode::OK, description = "Client or page of clients"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    offset: QueryParam<String, false>,
    city: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DeliveriesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    if let Some(id) = id.into_inner() {
        let client = state
            .app
            .clients
            .get_client(parse_client_id(&id)?)
            .await
            .map_err(into_status_error)?;

        return Ok(Json(DeliveriesResponse::Client(ClientEnvelope {
            client: client.into(),
        })));
    }

    let query = ClientsQuery::new(
        PageRequest::new(lenient_i64(limit.into_inner()), lenient_i64(offset.into_inner())),
        city.into_inner(),
    );

    let page = state
        .app
        .clients
        .list_clients(query)
        .await
        .map_err(into_status_error)?;

    let path = req.uri().path();

    Ok(Json(DeliveriesResponse::Page(ClientsPageResponse {
        clients: page.clients.into_iter().map(Into::into).collect(),
        total: page.info.total,
        total_pages: page.info.total_pages,
        current_page: page.info.current_page,
        next_page_url: page.info.next.map(|next| page_url(path, &next)),
    })))
}

/// Unparsable paging values fall back to the defaults rather than failing the request.
fn lenient_i64(value: Option<String>) -> Option<i64> {
    value.and_then(|value| value.trim().parse().ok())
}

fn page_url(path: &str, query: &ClientsQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    params
        .append_pair("limit", &query.page.limit().to_string())
        .append_pair("offset", &query.page.offset().to_string());

    if let Some(city) = &query.city {
        params.append_pair("city", city);
    }

    format!("{path}?{}", params.finish())
}
