//! Error types shared by responders, classifiers and startup wiring.

use thiserror::Error;

/// Failure of a chat responder. The detail is for server logs only.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
}

/// Failure of an emotion classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to start classifier `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("classifier exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },

    #[error("classifier output is not usable: {0}")]
    Output(String),
}

/// Configuration problems detected at startup. Always fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("config load failed: {0}")]
    Config(#[from] config::ConfigError),

    #[error("missing required setting `{0}`")]
    Missing(&'static str),

    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
