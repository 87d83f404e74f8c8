use axum::response::Json;
use tracing::debug;

use crate::models::HealthResponse;

/// Liveness probe. Fixed payload, no dependencies checked.
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::healthy())
}
