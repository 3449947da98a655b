//! Chat responders and the emotion classifier, plus factories that pick them from config.

pub use folio_core::{ChatResponder, EmotionClassifier};

mod emotion_classifier;
mod keyword_responder;
mod model_router;
mod profile;

pub use emotion_classifier::ProcessClassifier;
pub use keyword_responder::{KeywordResponder, KeywordRule, FALLBACK_REPLY, KEYWORD_RULES};
pub use model_router::ModelRouter;
pub use profile::PROFILE_FACT_SHEET;

use folio_core::{CoreConfig, ResponderMode, SetupError};
use std::sync::Arc;

/// Builds the single responder selected by `responder_mode`.
/// Upstream mode without an API key is a startup error.
pub fn build_responder(config: &CoreConfig) -> Result<Arc<dyn ChatResponder>, SetupError> {
    match config.responder_mode {
        ResponderMode::Keyword => Ok(Arc::new(KeywordResponder::new())),
        ResponderMode::Upstream => {
            let api_key = config.api_key().ok_or(SetupError::Missing("openai_api_key"))?;
            let router = ModelRouter::new(&config.openai_api_url, api_key, &config.openai_model)?;
            Ok(Arc::new(router))
        }
    }
}

/// Builds the emotion classifier if `emotion_command` is set.
pub fn build_classifier(
    config: &CoreConfig,
) -> Result<Option<Arc<dyn EmotionClassifier>>, SetupError> {
    match config.emotion_command_parts() {
        None => Ok(None),
        Some(parts) => {
            let (program, args) = parts?;
            Ok(Some(Arc::new(ProcessClassifier::new(program, args))))
        }
    }
}
