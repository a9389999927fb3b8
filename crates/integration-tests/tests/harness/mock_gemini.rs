//! Mock Generative Language backend for integration tests
//!
//! Implements a minimal `generateContent` endpoint that returns canned
//! responses and records what the service sent it

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock Gemini backend that returns predictable responses
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    request_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Artificial latency before responding
    delay: Option<Duration>,
    response: ResponseMode,
    captured: Mutex<Option<CapturedRequest>>,
}

enum ResponseMode {
    /// Wrap the text in a well-formed `generateContent` response
    Brief(String),
    /// Return this JSON body verbatim
    Raw(serde_json::Value),
}

/// What the backend saw for the most recent request
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The `{model}:generateContent` path segment
    pub model_action: String,
    /// Raw query string, where the API key rides
    pub query: Option<String>,
    /// Request body as sent
    pub body: serde_json::Value,
}

impl MockGemini {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, None, ResponseMode::Brief("Mock brief.".to_owned())).await
    }

    /// Start a mock server that answers with the given brief text
    pub async fn start_with_brief(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, None, ResponseMode::Brief(content.to_owned())).await
    }

    /// Start a mock server that answers with the given JSON body verbatim
    pub async fn start_with_response(body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(0, None, ResponseMode::Raw(body)).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, None, ResponseMode::Brief("Mock brief.".to_owned())).await
    }

    /// Start a mock server that sleeps before every response
    pub async fn start_with_delay(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(0, Some(delay), ResponseMode::Brief("Mock brief.".to_owned())).await
    }

    async fn start_inner(
        fail_count: u32,
        delay: Option<Duration>,
        response: ResponseMode,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            delay,
            response,
            captured: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1beta/models/{model_action}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of generate requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// The most recent request the backend saw
    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockGeminiState>>,
    Path(model_action): Path<String>,
    RawQuery(query): RawQuery,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.captured.lock().unwrap() = Some(CapturedRequest {
        model_action,
        query,
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    // If fail_count > 0, decrement and return 500
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "code": 500,
                    "message": "mock backend intentional failure",
                    "status": "INTERNAL"
                }
            })),
        )
            .into_response();
    }

    let body = match &state.response {
        ResponseMode::Brief(text) => serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": text}]
                },
                "finishReason": "STOP"
            }]
        }),
        ResponseMode::Raw(value) => value.clone(),
    };

    Json(body).into_response()
}
