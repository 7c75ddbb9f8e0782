//! Health check handler

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckResponse {
    /// `ok`, or `degraded` when the database check fails
    pub status: String,
    /// `ok` or `error`
    pub database: String,
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthCheckResponse),
        (status = 503, description = "Database unreachable", body = HealthCheckResponse)
    )
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    let database_ok = match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, state.videos.ping()).await
    {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
        Err(_) => {
            tracing::warn!("Database health check timed out");
            false
        }
    };

    let (status_code, status) = if database_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthCheckResponse {
            status: status.to_string(),
            database: if database_ok { "ok" } else { "error" }.to_string(),
            storage: state.storage.backend_type().to_string(),
        }),
    )
}
