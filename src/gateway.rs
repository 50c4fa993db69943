// src/gateway.rs
//! Boundary to the remote generative model. Everything past this module sees either
//! reply text or a `GatewayError`; nothing here panics or propagates transport errors raw.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::gemini_client::{GeminiClient, GenerateContentResponse};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed reply: {0}")]
    MalformedReply(String),
    #[error("Gemini API error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl GatewayError {
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Authentication(_) => "authentication",
            GatewayError::Transport(_) => "transport",
            GatewayError::MalformedReply(_) => "malformed_reply",
            GatewayError::Upstream { .. } => "upstream",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::MalformedReply(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// Model metadata as exposed by `GET /list-models`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub generation_methods: Vec<String>,
}

/// A remote text-completion service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError>;

    /// Identity of the configured model, for status reporting.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.generate_text(prompt).await
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let models = GeminiClient::list_models(self).await?;
        Ok(models
            .into_iter()
            .map(|m| ModelInfo {
                name: m.name,
                generation_methods: m.supported_generation_methods,
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        self.model()
    }
}

type ExtractionStrategy = fn(&GenerateContentResponse) -> Option<String>;

/// Tried in order; the first one yielding non-empty text wins.
const EXTRACTION_STRATEGIES: &[(&str, ExtractionStrategy)] = &[
    ("top_level_text", top_level_text),
    ("first_candidate_part", first_candidate_part),
];

fn top_level_text(reply: &GenerateContentResponse) -> Option<String> {
    reply.text.clone()
}

fn first_candidate_part(reply: &GenerateContentResponse) -> Option<String> {
    reply
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .clone()
}

pub fn extract_reply_text(reply: &GenerateContentResponse) -> Result<String, GatewayError> {
    for (name, strategy) in EXTRACTION_STRATEGIES {
        if let Some(text) = strategy(reply).filter(|t| !t.trim().is_empty()) {
            tracing::debug!(strategy = *name, "extracted reply text");
            return Ok(text);
        }
    }

    let tried: Vec<&str> = EXTRACTION_STRATEGIES.iter().map(|(name, _)| *name).collect();
    let mut detail = format!("no reply text found (tried: {})", tried.join(", "));
    if let Some(reason) = reply
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        detail.push_str(&format!("; prompt blocked: {}", reason));
    } else if let Some(reason) = reply
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
    {
        detail.push_str(&format!("; finish reason: {}", reason));
    }
    Err(GatewayError::MalformedReply(detail))
}
