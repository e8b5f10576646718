use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Terminal handler for any path or method no route accepts.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
