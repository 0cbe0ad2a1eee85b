//! Content sources
//!
//! A [`ContentSource`] turns a prompt into raw report text. The production
//! implementation, [`HttpContentSource`], calls an OpenAI-compatible chat
//! completions endpoint; tests substitute scripted sources.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BackendSettings;
use crate::error::ContentError;

/// Minimum length, after normalization, of usable generated text
pub const MIN_CONTENT_CHARS: usize = 8000;

/// A text generator keyed by prompt
pub trait ContentSource: Send + Sync {
    /// Generate raw report text for `prompt`
    fn generate(&self, prompt: &str) -> Result<String, ContentError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

/// Client for an OpenAI-compatible chat completions backend
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    settings: BackendSettings,
    /// HTTP client; `None` when it could not be built
    client: Option<Client>,
}

impl HttpContentSource {
    /// Create a source from backend settings
    ///
    /// Client construction failures are deferred: every `generate` call then
    /// reports the backend as unavailable, which triggers the fallback text.
    pub fn new(settings: BackendSettings) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| warn!(error = %e, "failed to build HTTP client"))
            .ok();

        Self { settings, client }
    }

    /// Backend settings in use
    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }
}

impl ContentSource for HttpContentSource {
    fn generate(&self, prompt: &str) -> Result<String, ContentError> {
        let api_key = self.settings.resolve_api_key().ok_or_else(|| {
            ContentError::BackendUnavailable("API key is not configured".to_string())
        })?;
        let client = self.client.as_ref().ok_or_else(|| {
            ContentError::BackendUnavailable("HTTP client unavailable".to_string())
        })?;

        info!(
            model = %self.settings.model,
            prompt_chars = prompt.chars().count(),
            "requesting report content"
        );

        let body = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            stream: false,
        };

        let response = client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| ContentError::BackendUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ContentError::BackendUnavailable(format!(
                "server error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let reply: ChatResponse = response
            .json()
            .map_err(|e| ContentError::BackendUnavailable(format!("unexpected response: {e}")))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                ContentError::BackendUnavailable("response has no choices".to_string())
            })?;

        debug!(chars = content.chars().count(), "received report content");
        Ok(content)
    }
}

/// Check that normalized generated text is usable as a report
pub fn check_sufficient(text: &str) -> Result<(), ContentError> {
    let length = text.chars().count();
    if !text.to_lowercase().contains("## conclusion") {
        return Err(ContentError::BackendInsufficient(format!(
            "no conclusion section ({length} characters)"
        )));
    }
    if length < MIN_CONTENT_CHARS {
        return Err(ContentError::BackendInsufficient(format!(
            "{length} characters, need at least {MIN_CONTENT_CHARS}"
        )));
    }
    Ok(())
}
