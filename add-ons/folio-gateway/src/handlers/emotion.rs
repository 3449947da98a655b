//! POST /api/emotion: relays the external classifier's JSON verdict.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use folio_core::{EmotionClassifier, RequestContext};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;

#[derive(Deserialize)]
pub(crate) struct EmotionRequest {
    #[serde(default)]
    text: Option<String>,
}

pub(crate) async fn emotion(
    State(classifier): State<Arc<dyn EmotionClassifier>>,
    payload: Result<Json<EmotionRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = match payload {
        Ok(Json(req)) => req.text.filter(|t| !t.is_empty()),
        Err(JsonRejection::BytesRejection(rejection)) => {
            tracing::warn!(target: "folio::emotion", "emotion body could not be read: {}", rejection);
            None
        }
        Err(rejection) => {
            tracing::debug!(target: "folio::emotion", "rejected emotion body: {}", rejection);
            None
        }
    }
    .ok_or(ApiError::TextRequired)?;

    let ctx = RequestContext::new();
    let verdict = classifier.classify(&ctx, &text).await.map_err(|e| {
        tracing::error!(
            target: "folio::emotion",
            correlation_id = %ctx.correlation_id,
            classifier = classifier.name(),
            "emotion classification failed: {}",
            e
        );
        ApiError::EmotionFailed(e)
    })?;

    Ok(Json(verdict))
}
