//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    database::{self, Db},
    domain::{
        clients::{ClientsService, PgClientsService},
        geocoding::{DistanceMatrixClient, GeocodingConfig, GeocodingService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub clients: Arc<dyn ClientsService>,
    pub geocoding: Arc<dyn GeocodingService>,
    db: Option<Db>,
}

impl AppContext {
    /// Build a context around already-constructed services, with no pool to close.
    #[must_use]
    pub fn new(clients: Arc<dyn ClientsService>, geocoding: Arc<dyn GeocodingService>) -> Self {
        Self {
            clients,
            geocoding,
            db: None,
        }
    }

    /// Build application context from a database URL and geocoding settings.
    ///
    /// Pending migrations are applied before any service is handed out.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_config(
        database_url: &str,
        geocoding: GeocodingConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!("database migrations applied");

        let db = Db::new(pool);

        Ok(Self {
            clients: Arc::new(PgClientsService::new(db.clone())),
            geocoding: Arc::new(DistanceMatrixClient::new(geocoding)),
            db: Some(db),
        })
    }

    /// Whether the owned pool can reach the database.
    ///
    /// `None` when the context was built without a pool.
    pub async fn database_reachable(&self) -> Option<bool> {
        let db = self.db.as_ref()?;

        match db.ping().await {
            Ok(()) => Some(true),
            Err(error) => {
                warn!(%error, "database ping failed");

                Some(false)
            }
        }
    }

    /// Release the database pool, if this context owns one.
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            db.close().await;

            info!("database pool closed");
        }
    }
}
