//! Liveness and readiness probes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// `GET /health` - the process is up.
pub async fn health() -> &'static str {
    "The server is healthy!"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub database: bool,
    pub migrations_applied: usize,
    pub migrations_total: usize,
}

/// `GET /health/ready` - the database answers and is fully migrated.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let database = state.db().health_check().await;

    let (applied, total, current) = match state.db().migration_status().await {
        Ok(status) => (status.applied, status.total, status.is_current()),
        Err(err) => {
            warn!(error = %err, "Could not read migration status");
            (0, 0, false)
        }
    };

    let code = if database && current {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(Readiness {
            database,
            migrations_applied: applied,
            migrations_total: total,
        }),
    )
}
