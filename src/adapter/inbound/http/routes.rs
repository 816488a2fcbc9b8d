//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use tracing::{debug, warn};

use crate::adapter::inbound::line::{parse_events, SIGNATURE_HEADER};

use super::server::WebhookState;

pub(super) async fn home() -> &'static str {
    "Line Bot is running!"
}

pub(super) async fn health() -> &'static str {
    "OK"
}

/// LINE webhook: verify, then answer every text message in the envelope.
pub(super) async fn callback(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, StatusCode> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = state.verifier.verify(&body, signature) {
        warn!(error = %e, "Rejected webhook request");
        return Err(StatusCode::BAD_REQUEST);
    }

    debug!(body = %String::from_utf8_lossy(&body), "Webhook request body");

    let messages = parse_events(&body).map_err(|e| {
        warn!(error = %e, "Malformed webhook body");
        StatusCode::BAD_REQUEST
    })?;

    for message in messages {
        // Reply failures are logged by the dispatcher; LINE still gets a 200.
        let _ = state.dispatcher.handle(message).await;
    }

    Ok("OK")
}
