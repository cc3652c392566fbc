use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. Touches neither the model nor the database.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
