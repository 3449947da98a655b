//! API errors and their fixed HTTP representations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_core::{ClassifierError, ResponderError};
use thiserror::Error;

/// Everything a handler can fail with. The `Display` text is the client-facing message,
/// so dependency details stay in the `#[source]` and in server logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Message required")]
    MessageRequired,

    #[error("text required")]
    TextRequired,

    #[error("Failed to fetch response")]
    ChatFailed(#[source] ResponderError),

    #[error("Failed to analyze emotion")]
    EmotionFailed(#[source] ClassifierError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MessageRequired | ApiError::TextRequired => StatusCode::BAD_REQUEST,
            ApiError::ChatFailed(_) | ApiError::EmotionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}
