//! Deliveries JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use deliveries_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod config;
mod deliveries;
mod extensions;
mod geocoding;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Deliveries JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        #[expect(clippy::exit, reason = "configuration errors are fatal at startup")]
        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        #[expect(clippy::exit, reason = "logging errors are fatal at startup")]
        process::exit(1);
    }

    let addr = config.socket_addr();

    let app = match AppContext::from_config(
        &config.database.database_url,
        config.geocoding.into(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            #[expect(clippy::exit, reason = "startup errors are fatal")]
            process::exit(1);
        }
    };

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(observability::request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app.clone())))
        .push(router::app_router());

    let doc = OpenApi::new("Deliveries API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server
        .serve(Service::new(router).hoop(router::cors()))
        .await;

    app.shutdown().await;

    info!("server stopped");
}
