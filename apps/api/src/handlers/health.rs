//! Health check endpoint for monitoring.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`
    pub status: &'static str,
    /// `up` or `down`
    pub database: &'static str,
    pub migrations: Option<MigrationCounts>,
}

#[derive(Debug, Serialize)]
pub struct MigrationCounts {
    pub total: usize,
    pub applied: usize,
}

/// `GET /api/health`: 200 when the database answers, 503 otherwise.
pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if !state.db.health_check().await {
        warn!("Health check: database unreachable");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable",
                database: "down",
                migrations: None,
            }),
        );
    }

    let migrations = match state.db.migration_status().await {
        Ok(status) => Some(MigrationCounts {
            total: status.total,
            applied: status.applied,
        }),
        Err(e) => {
            warn!(error = %e, "Health check: migration status unavailable");
            None
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            database: "up",
            migrations,
        }),
    )
}
