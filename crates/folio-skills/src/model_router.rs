//! Model Router: forwards a chat message to an OpenAI-compatible chat-completion API
//! with the profile fact sheet as system prompt, and relays the reply.
//!
//! Every call is a fresh two-message conversation. One attempt per request, no retry.

use folio_core::{ChatResponder, RequestContext, ResponderError, SetupError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::profile::PROFILE_FACT_SHEET;

const RESPONDER_NAME: &str = "upstream";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Routes a message to the hosted completion API.
pub struct ModelRouter {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    system_prompt: &'static str,
}

impl ModelRouter {
    /// `api_url` is the API base, e.g. `https://api.openai.com/v1`.
    pub fn new(api_url: &str, api_key: &str, model: &str) -> Result<Self, SetupError> {
        if api_key.trim().is_empty() {
            return Err(SetupError::Missing("openai_api_key"));
        }
        let client = Client::builder().build().map_err(|e| SetupError::Invalid {
            key: "openai_api_url",
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", api_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_prompt: PROFILE_FACT_SHEET,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, message: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
        }
    }

    /// Content of the first choice, or empty when the API returned none.
    fn first_content(response: CompletionResponse) -> String {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }

    async fn complete(&self, message: &str) -> Result<String, ResponderError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(message))
            .send()
            .await
            .map_err(|e| ResponderError::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ResponderError::Upstream(format!("{status}: {body}")));
        }

        let parsed: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| ResponderError::Decode(e.to_string()))?;
        Ok(Self::first_content(parsed))
    }
}

#[async_trait::async_trait]
impl ChatResponder for ModelRouter {
    fn name(&self) -> &str {
        RESPONDER_NAME
    }

    async fn respond(&self, ctx: &RequestContext, message: &str) -> Result<String, ResponderError> {
        tracing::info!(
            target: "folio::chat",
            correlation_id = %ctx.correlation_id,
            model = %self.model,
            "forwarding {} chars upstream",
            message.len()
        );
        self.complete(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_system_then_user_turn() {
        let router = ModelRouter::new("https://api.openai.com/v1/", "sk-test", "gpt-3.5-turbo").unwrap();
        assert_eq!(router.endpoint(), "https://api.openai.com/v1/chat/completions");

        let body = serde_json::to_value(router.request_body("hello")).unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], PROFILE_FACT_SHEET);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "hello");
    }

    #[test]
    fn first_choice_content_is_relayed() {
        let parsed: CompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "He lives in Dallas." } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();
        assert_eq!(ModelRouter::first_content(parsed), "He lives in Dallas.");
    }

    #[test]
    fn missing_content_becomes_empty_string() {
        for raw in [
            serde_json::json!({ "choices": [] }),
            serde_json::json!({}),
            serde_json::json!({ "choices": [ { "message": { "content": null } } ] }),
            serde_json::json!({ "choices": [ { "finish_reason": "stop" } ] }),
        ] {
            let parsed: CompletionResponse = serde_json::from_value(raw).unwrap();
            assert_eq!(ModelRouter::first_content(parsed), "");
        }
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            ModelRouter::new("https://api.openai.com/v1", " ", "gpt-3.5-turbo"),
            Err(SetupError::Missing("openai_api_key"))
        ));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_error() {
        // Port 1 on loopback refuses connections.
        let router = ModelRouter::new("http://127.0.0.1:1/v1", "sk-test", "gpt-3.5-turbo").unwrap();
        let err = router
            .respond(&RequestContext::new(), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ResponderError::Upstream(_)));
    }
}
