//! POST /api/chat: validates the message and hands it to the active responder.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use folio_core::RequestContext;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct ChatReply {
    message: String,
}

/// An unparsable body, a missing field, a non-string or an empty string all count as "no message".
pub(crate) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let message = match payload {
        Ok(Json(req)) => req.message.filter(|m| !m.is_empty()),
        Err(JsonRejection::BytesRejection(rejection)) => {
            tracing::warn!(target: "folio::chat", "chat body could not be read: {}", rejection);
            None
        }
        Err(rejection) => {
            tracing::debug!(target: "folio::chat", "rejected chat body: {}", rejection);
            None
        }
    }
    .ok_or(ApiError::MessageRequired)?;

    let ctx = RequestContext::new();
    tracing::info!(
        target: "folio::chat",
        correlation_id = %ctx.correlation_id,
        responder = state.responder.name(),
        "chat request received: {} chars",
        message.len()
    );

    let reply = state
        .responder
        .respond(&ctx, &message)
        .await
        .map_err(|e| {
            tracing::error!(
                target: "folio::chat",
                correlation_id = %ctx.correlation_id,
                "chat responder failed: {}",
                e
            );
            ApiError::ChatFailed(e)
        })?;

    Ok(Json(ChatReply { message: reply }))
}
