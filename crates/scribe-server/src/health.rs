use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness handler, answers `ok` while the service is up
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
