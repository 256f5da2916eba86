//! LINE webhook handler.
//!
//! Verifies the request signature, decodes the event batch and handles each
//! event in turn. The response is only sent once every event is processed.
//! - 400 when the signature is missing or wrong
//! - 500 when the body cannot be decoded
//! - 200 otherwise, whatever happened to individual events

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use line::{LineError, SIGNATURE_HEADER};
use thiserror::Error;

use crate::kernel::ServerDeps;

use super::handler::{handle_event, EventOutcome};

/// State shared with the webhook handler.
#[derive(Clone)]
pub struct WebhookState {
    pub deps: ServerDeps,
}

/// Errors that reject a whole webhook batch
#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Failed to parse webhook: {0}")]
    Parse(LineError),
}

impl From<LineError> for CallbackError {
    fn from(err: LineError) -> Self {
        match err {
            LineError::InvalidSignature => CallbackError::InvalidSignature,
            other => CallbackError::Parse(other),
        }
    }
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let status = match self {
            CallbackError::InvalidSignature => StatusCode::BAD_REQUEST,
            CallbackError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        status.into_response()
    }
}

/// Build the axum router for webhook endpoints.
pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/callback", post(handle_callback))
        .with_state(state)
}

/// Handle a LINE webhook callback.
async fn handle_callback(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, CallbackError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    let events = state.deps.line.parse_request(signature, &body).map_err(|e| {
        let err = CallbackError::from(e);
        tracing::warn!(error = %err, "Rejected webhook request");
        err
    })?;

    tracing::debug!(events = events.len(), "Webhook batch received");

    // Events are independent; a failure in one never stops the rest
    let mut replied = 0;
    for event in &events {
        if let EventOutcome::Replied { .. } = handle_event(&state.deps, event).await {
            replied += 1;
        }
    }

    tracing::debug!(events = events.len(), replied, "Webhook batch processed");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_errors_map_to_status() {
        let invalid: CallbackError = LineError::InvalidSignature.into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let parse: CallbackError = LineError::Parse(json_err).into();
        assert_eq!(
            parse.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
