//! Webhook handler for inbound chat messages
//!
//! The messaging channel (or a relay in front of it) POSTs each message here
//! and sends whatever comes back to the chat.

use super::dispatcher::handle_message;
use super::models::{BotReply, IncomingMessage};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

/// Creates routes for the chat webhook
pub fn routes() -> Router<SharedState> {
    Router::new().route("/message", post(receive_message))
}

/// Endpoint: POST /message
/// Runs one message through the dispatcher and returns the reply.
async fn receive_message(
    State(state): State<SharedState>,
    body: Result<Json<IncomingMessage>, JsonRejection>,
) -> impl IntoResponse {
    let message = match body {
        Ok(Json(message)) => message,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected inbound message");
            return (
                rejection.status(),
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let reply: BotReply = handle_message(&state, &message);
    (StatusCode::OK, Json(reply)).into_response()
}
