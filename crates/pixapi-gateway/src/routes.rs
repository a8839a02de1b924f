//! Informational JSON routes.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn index() -> impl IntoResponse {
    Json(json!({ "message": "API Pix Rodando!" }))
}

pub async fn hello() -> impl IntoResponse {
    Json(json!({ "message": "Olá do endpoint /hello" }))
}

/// Fallback for unmatched paths. A miss is an expected outcome, not a fault.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
