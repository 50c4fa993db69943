// src/models/mood.rs
use serde::{Deserialize, Serialize};

use crate::gateway::{GatewayError, ModelInfo};
use crate::sentiment::SentimentLabel;

/// Body of `POST /generate-response/`. Only presence and JSON types are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
    pub age: i64,
    pub gender: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResponse {
    pub message: String,
    pub sentiment: SentimentLabel,
}

/// Failure payload. Served with HTTP 200; callers look for the `error` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&GatewayError> for ErrorResponse {
    fn from(err: &GatewayError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}

/// A past mood entry. `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub emotion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelListResponse {
    pub available_models: Vec<ModelInfo>,
}
