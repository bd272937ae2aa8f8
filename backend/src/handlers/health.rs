use axum::Json;
use serde_json::{Value, json};

// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
