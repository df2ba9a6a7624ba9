use axum::{http::StatusCode, Json};
use serde_json::json;

// Liveness probe; answers without touching the installer.
pub async fn ping_handler() -> (StatusCode, Json<serde_json::Value>) {
    let data = json!({ "message": "pong" });
    (StatusCode::OK, Json(data))
}
