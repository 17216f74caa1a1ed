//! App Router

use salvo::{
    Router,
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, ORIGIN},
    },
};

use crate::{deliveries, geocoding, healthcheck};

/// Every API route, without middleware or documentation.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("deliveries")
                .get(deliveries::index::handler)
                .post(deliveries::create::handler)
                .put(deliveries::update::handler)
                .delete(deliveries::delete::handler)
                .push(
                    Router::with_path("geoconding/search").get(geocoding::search::handler),
                ),
        )
}

/// Browser access from any origin.
pub(crate) fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![
            CONTENT_TYPE,
            AUTHORIZATION,
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .into_handler()
}
