//! Readiness probe backed by a real PostgreSQL round trip.

use crate::state::AppState;
use axum::{Json, extract::State};
use axum_helpers::AppError;
use axum_helpers::errors::responses::ServiceUnavailableResponse;
use database::postgres::check_health_detailed;
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// OpenAPI tag for the operational endpoints
pub const TAG: &str = "health";

/// Body of a successful readiness check
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "status": "ready",
    "database": "connected",
    "response_time_ms": 2
}))]
pub struct ReadyResponse {
    pub status: String,
    pub database: String,
    /// Round trip of `SELECT 1`
    pub response_time_ms: u64,
}

/// Readiness check
///
/// 200 when `SELECT 1` succeeds, 503 otherwise.
#[utoipa::path(
    get,
    path = "/ready",
    tag = TAG,
    responses(
        (status = 200, description = "Database reachable", body = ReadyResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, AppError> {
    let status = check_health_detailed(&state.db).await;

    if status.healthy {
        return Ok(Json(ReadyResponse {
            status: "ready".to_string(),
            database: "connected".to_string(),
            response_time_ms: status.response_time_ms,
        }));
    }

    Err(AppError::ServiceUnavailable {
        message: status
            .message
            .unwrap_or_else(|| "Database health check failed".to_string()),
        details: Some(json!({
            "database": "unavailable",
            "response_time_ms": status.response_time_ms,
        })),
    })
}
