use axum::Json;

/// GET /health - Basic liveness probe.
///
/// Returns 200 immediately without touching the cache or the store; a
/// degraded cache never makes the service unhealthy.
#[axum::debug_handler]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "folio",
    }))
}
