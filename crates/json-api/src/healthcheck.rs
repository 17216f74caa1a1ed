//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Database reachability as seen by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseHealth {
    /// The pool answered a trivial query
    Up,
    /// The pool could not reach the database
    Down,
    /// The server runs without an owned pool
    NotConfigured,
}

impl From<Option<bool>> for DatabaseHealth {
    fn from(reachable: Option<bool>) -> Self {
        match reachable {
            Some(true) => Self::Up,
            Some(false) => Self::Down,
            None => Self::NotConfigured,
        }
    }
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Database status
    pub database: DatabaseHealth,
}

/// Healthcheck handler
///
/// Answers `503` while the database is unreachable.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service healthy", body = HealthResponse),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Database unreachable", body = HealthResponse),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let database = DatabaseHealth::from(depot.state_or_500()?.app.database_reachable().await);

    let status = if database == DatabaseHealth::Down {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);

        "degraded"
    } else {
        "ok"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        database,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use deliveries_app::domain::clients::MockClientsService;

    use crate::test_helpers::clients_service;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_without_pool() -> TestResult {
        let route = Router::with_path("healthcheck").get(handler);

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&clients_service(MockClientsService::new(), route))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: HealthResponse = res.take_json().await?;

        assert_eq!(body.status, "ok");
        assert_eq!(body.database, DatabaseHealth::NotConfigured);

        Ok(())
    }

    #[test]
    fn reachability_maps_to_health() {
        assert_eq!(DatabaseHealth::from(Some(true)), DatabaseHealth::Up);
        assert_eq!(DatabaseHealth::from(Some(false)), DatabaseHealth::Down);
        assert_eq!(DatabaseHealth::from(None), DatabaseHealth::NotConfigured);
    }
}
