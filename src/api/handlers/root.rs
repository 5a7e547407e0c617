//! Handler for the service root.

use axum::Json;
use serde_json::{Value, json};

/// `GET /` liveness banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "URL shortener API is running" }))
}
