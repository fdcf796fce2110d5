//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    pub message: Option<String>,
}

/// Returns service health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: link store reachable
/// - **503 Service Unavailable**: link store unreachable
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_ok = state.store.health_check().await;

    let response = HealthResponse {
        status: if store_ok { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: CheckStatus {
                status: if store_ok { "ok" } else { "error" }.to_string(),
                message: Some(
                    if store_ok {
                        "Link store reachable"
                    } else {
                        "Link store unreachable"
                    }
                    .to_string(),
                ),
            },
        },
    };

    if store_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
