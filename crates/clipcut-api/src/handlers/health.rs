//! Health check handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub metadata_provider: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl CheckStatus {
    fn ok(provider: &str, latency_ms: u64) -> Self {
        Self {
            status: "ok".to_string(),
            provider: Some(provider.to_string()),
            error: None,
            latency_ms: Some(latency_ms),
        }
    }

    fn error(provider: &str, msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            provider: Some(provider.to_string()),
            error: Some(msg.into()),
            latency_ms: None,
        }
    }
}

/// Readiness check endpoint.
/// Checks that the metadata provider can serve requests.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let provider = state.metadata.name();
    let start = Instant::now();
    let metadata_check = match state.metadata.check_available().await {
        Ok(()) => CheckStatus::ok(provider, start.elapsed().as_millis() as u64),
        Err(e) => CheckStatus::error(provider, e.to_string()),
    };

    let all_ok = metadata_check.status == "ok";

    let response = ReadinessResponse {
        status: if all_ok { "ready" } else { "degraded" }.to_string(),
        checks: ReadinessChecks {
            metadata_provider: metadata_check,
        },
    };

    if all_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
