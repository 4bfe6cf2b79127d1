//! System API endpoints: liveness, readiness and catalog status.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::{ApiError, ApiResponse, AppState, CatalogCountsDto, SystemStatus};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthLiveResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReadinessChecks {
    pub database: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub checks: HealthReadinessChecks,
}

/// Returns version, uptime and entity counts.
#[utoipa::path(
    get,
    path = "/api/system/status",
    tag = "system",
    responses(
        (status = 200, description = "Version, uptime and entity counts", body = ApiResponse<SystemStatus>)
    )
)]
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let counts = state
        .store()
        .counts()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        catalog: CatalogCountsDto {
            characters: counts.characters,
            movies: counts.movies,
            franchises: counts.franchises,
        },
    })))
}

/// Lightweight liveness probe to indicate the API process is running.
#[utoipa::path(
    get,
    path = "/api/system/health/live",
    tag = "system",
    responses(
        (status = 200, description = "Process is running", body = ApiResponse<HealthLiveResponse>)
    )
)]
pub async fn health_live() -> impl IntoResponse {
    Json(ApiResponse::success(HealthLiveResponse { status: "alive" }))
}

/// Readiness probe that checks database connectivity.
#[utoipa::path(
    get,
    path = "/api/system/health/ready",
    tag = "system",
    responses(
        (status = 200, description = "Database reachable", body = ApiResponse<HealthReadyResponse>),
        (status = 503, description = "Database unreachable", body = ApiResponse<HealthReadyResponse>)
    )
)]
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let db_ready = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            false
        }
    };

    let status = if db_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::success(HealthReadyResponse {
            ready: db_ready,
            checks: HealthReadinessChecks { database: db_ready },
        })),
    )
        .into_response()
}
