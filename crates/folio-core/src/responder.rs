//! Capability traits the gateway dispatches to.

use crate::error::{ClassifierError, ResponderError};
use crate::shared::RequestContext;

/// Produces a reply for a single chat message. Implementations hold no conversation state.
#[async_trait::async_trait]
pub trait ChatResponder: Send + Sync {
    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Answers `message`. The caller guarantees it is non-empty.
    async fn respond(&self, ctx: &RequestContext, message: &str) -> Result<String, ResponderError>;
}

/// A classifier that takes text and returns label scores as an opaque JSON value.
#[async_trait::async_trait]
pub trait EmotionClassifier: Send + Sync {
    fn name(&self) -> &str;

    async fn classify(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> Result<serde_json::Value, ClassifierError>;
}
