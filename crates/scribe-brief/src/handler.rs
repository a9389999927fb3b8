//! Axum route handlers for the brief endpoint

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use http::StatusCode;

use crate::error::BriefError;
use crate::state::BriefState;

/// Build the brief router
///
/// `POST /` runs the brief pipeline; every other method on the endpoint is
/// answered with a 405 JSON body.
pub fn brief_router(state: BriefState) -> Router {
    Router::new()
        .route(
            "/",
            routing::post(generate_brief).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Handle `POST /`
///
/// The body is taken as raw bytes so that malformed JSON flows through the
/// pipeline and surfaces as a 500 detail instead of an extractor rejection.
async fn generate_brief(State(state): State<BriefState>, body: Bytes) -> Response {
    match state.generate(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => error_response(e),
    }
}

/// Reject non-POST methods on the brief endpoint
async fn method_not_allowed() -> Response {
    let body = serde_json::json!({ "detail": "Method Not Allowed" });
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

/// Convert a brief error to the service's JSON error shape
#[allow(clippy::needless_pass_by_value)]
fn error_response(error: BriefError) -> Response {
    let body = serde_json::json!({ "detail": error.to_string() });
    (error.status_code(), Json(body)).into_response()
}
