use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::gateway::{extract_reply_text, GatewayError};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Only the text of a part matters here; other part kinds deserialize with `text: None`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Upstream reply. Some gateways in front of the API flatten the answer into a
/// top-level `text` field, the REST API proper nests it under `candidates`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<RemoteModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteModel {
    pub name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    pub supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone(), config.model.clone()).with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Authentication("GOOGLE_API_KEY is not configured".to_string()))
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(model = %self.model, contents = request.contents.len(), "sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.key()?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(classify_api_error(status.as_u16(), &response_text));
        }

        tracing::debug!(
            "Gemini API response (truncated): {}...",
            truncate_chars(&response_text, 500)
        );

        serde_json::from_str::<GenerateContentResponse>(&response_text).map_err(|parse_error| {
            tracing::error!("Failed to parse Gemini response: {}", parse_error);
            GatewayError::MalformedReply(format!("error decoding response body: {}", parse_error))
        })
    }

    /// Single-prompt convenience over `generate_content`, returning the reply text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
                role: Some("user".to_string()),
            }],
        };

        let response = self.generate_content(&request).await?;
        extract_reply_text(&response)
    }

    pub async fn list_models(&self) -> Result<Vec<RemoteModel>, GatewayError> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", self.key()?)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(classify_api_error(status.as_u16(), &response_text));
        }

        let parsed: ListModelsResponse = serde_json::from_str(&response_text).map_err(|e| {
            GatewayError::MalformedReply(format!("error decoding model list: {}", e))
        })?;
        Ok(parsed.models)
    }
}

/// Turns a non-2xx reply into the matching error kind.
pub(crate) fn classify_api_error(status: u16, body: &str) -> GatewayError {
    let (message, api_status) = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.message, envelope.error.status),
        Err(_) => (truncate_chars(body, 300).to_string(), None),
    };

    let api_status = api_status.unwrap_or_default();
    let auth_failure = matches!(status, 401 | 403)
        || api_status == "UNAUTHENTICATED"
        || api_status == "PERMISSION_DENIED"
        || message.contains("API key not valid");

    if auth_failure {
        GatewayError::Authentication(message)
    } else {
        GatewayError::Upstream { status, message }
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_bare_contents() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some("hello".to_string()),
                }],
                role: Some("user".to_string()),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_reply_with_non_text_parts_still_parses() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AA=="}}], "role": "model"},
                "finishReason": "STOP"
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        assert!(parsed.text.is_none());
    }

    #[test]
    fn test_api_errors_are_classified() {
        let invalid_key = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            classify_api_error(400, invalid_key),
            GatewayError::Authentication(_)
        ));

        let denied = r#"{"error": {"code": 403, "message": "denied", "status": "PERMISSION_DENIED"}}"#;
        assert!(matches!(classify_api_error(403, denied), GatewayError::Authentication(_)));

        match classify_api_error(503, "upstream overloaded") {
            GatewayError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_models_reply_parses() {
        let body = r#"{"models": [
            {"name": "models/gemini-2.5-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]},
            {"name": "models/text-embedding-004", "supportedGenerationMethods": ["embedContent"]}
        ]}"#;
        let parsed: ListModelsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.models.len(), 2);
        assert_eq!(parsed.models[0].supported_generation_methods, vec!["generateContent", "countTokens"]);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = GeminiClient::new(None, "gemini-2.5-flash").with_base_url("http://127.0.0.1:1");
        let err = client.generate_text("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_a_transport_error() {
        let client = GeminiClient::new(Some("test-key".to_string()), "gemini-2.5-flash")
            .with_base_url("http://127.0.0.1:1");
        let err = client.generate_text("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
