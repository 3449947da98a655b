//! Shared types used across the folio crates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SetupError;

/// Config file looked up when `FOLIO_CONFIG` is not set. Extension is optional.
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway";

const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG";
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Per-request context handed to responders and classifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlation id for request tracing.
    pub correlation_id: String,
}

impl RequestContext {
    /// Context with a fresh v4 correlation id.
    pub fn new() -> Self {
        Self {
            correlation_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Which chat strategy the process runs. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderMode {
    /// Canned answers from the keyword rule table.
    #[default]
    Keyword,
    /// Delegate to the hosted chat-completion API.
    Upstream,
}

impl ResponderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderMode::Keyword => "keyword",
            ResponderMode::Upstream => "upstream",
        }
    }
}

impl fmt::Display for ResponderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gateway configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Name used in startup logs.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Active chat strategy.
    pub responder_mode: ResponderMode,

    /// Credential for the chat-completion API. Falls back to `OPENAI_API_KEY`.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub openai_api_url: String,
    pub openai_model: String,

    /// Whitespace-separated command line of the emotion classifier. Unset disables `/api/emotion`.
    #[serde(default)]
    pub emotion_command: Option<String>,

    /// If true, the gateway serves the built site from `frontend_dir`.
    #[serde(default)]
    pub frontend_enabled: bool,
    pub frontend_dir: String,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `FOLIO_*` > file at
    /// `FOLIO_CONFIG` (or `config/gateway`) > defaults.
    pub fn load() -> Result<Self, SetupError> {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit config file path. A missing file is not an error.
    pub fn load_from(config_path: &str) -> Result<Self, SetupError> {
        let built = config::Config::builder()
            .set_default("app_name", "Folio Gateway")?
            .set_default("port", 5000_i64)?
            .set_default("responder_mode", "keyword")?
            .set_default("openai_api_url", "https://api.openai.com/v1")?
            .set_default("openai_model", "gpt-3.5-turbo")?
            .set_default("frontend_enabled", false)?
            .set_default("frontend_dir", "dist/public")?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut cfg: CoreConfig = built.try_deserialize()?;
        if cfg.api_key().is_none() {
            cfg.openai_api_key = std::env::var(ENV_OPENAI_API_KEY).ok();
        }
        Ok(cfg)
    }

    /// The API key if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// The classifier command split into program and arguments. `None` when not configured.
    pub fn emotion_command_parts(&self) -> Option<Result<(String, Vec<String>), SetupError>> {
        let raw = self.emotion_command.as_deref()?;
        let mut parts = raw.split_whitespace().map(str::to_string);
        Some(match parts.next() {
            Some(program) => Ok((program, parts.collect())),
            None => Err(SetupError::Invalid {
                key: "emotion_command",
                reason: "command is blank".to_string(),
            }),
        })
    }
}
