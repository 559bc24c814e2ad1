//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;
use std::time::Instant;

use crate::app::AppState;
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: StorageHealth,
}

/// Record storage health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageHealth {
    /// `postgres` or `memory`
    pub backend: &'static str,
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Body of the liveness and readiness endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

async fn ping(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

async fn storage_health(state: &AppState) -> StorageHealth {
    match &state.pool {
        Some(pool) => {
            let start = Instant::now();
            let connected = ping(pool).await;
            let latency_ms = start.elapsed().as_millis() as u64;
            persistence::metrics::record_pool_metrics(pool);

            StorageHealth {
                backend: "postgres",
                connected,
                latency_ms: connected.then_some(latency_ms),
            }
        }
        None => StorageHealth {
            backend: "memory",
            connected: true,
            latency_ms: None,
        },
    }
}

/// Full health check endpoint.
///
/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let storage = storage_health(&state).await;

    if !storage.connected {
        tracing::warn!(backend = storage.backend, "Health check failed: storage unreachable");
        return Err(ApiError::ServiceUnavailable(format!(
            "Storage backend {} is unreachable",
            storage.backend
        )));
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
    }))
}

/// Liveness endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness endpoint.
///
/// Returns 200 OK if the service can accept traffic (storage reachable).
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let connected = match &state.pool {
        Some(pool) => ping(pool).await,
        None => true,
    };

    if connected {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        tracing::warn!("Readiness check failed: storage unreachable");
        Err(ApiError::ServiceUnavailable("Storage is not ready".into()))
    }
}
