// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service discovery, liveness, and the fallback for unknown routes.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service name, version and endpoint listing
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Restaurant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "restaurants": "/restaurants[/:id] (protected)",
            "search": "/search?term=&location= (protected)",
        }
    }))
}

/// GET /health - store connectivity check
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.health_check().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::service_unavailable(e.to_string())
    })?;

    Ok(Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "store": "ok"
    })))
}

/// Router fallback so unknown paths answer in the same JSON shape as every
/// other failure
pub async fn not_found() -> ApiError {
    ApiError::not_found("route")
}
