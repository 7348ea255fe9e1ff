//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handler::handle_events;
use crate::line::WebhookRequest;
use crate::line::signature::{self, SIGNATURE_HEADER, SignatureError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// LINE webhook endpoint.
///
/// Verifies the signature over the raw body before parsing it, then
/// handles all events concurrently. Responds 500 with an empty body if
/// any event failed, after every event has finished.
async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(SignatureError::Missing)?;

    signature::verify(&state.channel_secret, &body, signature)?;

    let request: WebhookRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "unparseable webhook body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let count = request.events.len();
    let outcome = handle_events(&state, request.events).await;

    info!(
        events = count,
        succeeded = outcome.succeeded,
        failed = outcome.failed,
        "webhook handled"
    );

    if !outcome.is_success() {
        return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }

    Ok(Json(WebhookAck::ok()).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
}

impl From<SignatureError> for AppError {
    fn from(e: SignatureError) -> Self {
        AppError::Unauthorized {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
        };

        warn!(%status, %message, "rejected webhook delivery");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
