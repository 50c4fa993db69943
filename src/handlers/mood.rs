// src/handlers/mood.rs
//! Mood text in, supportive message out: classify, compose, ask the model.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::gateway::{GatewayError, TextGenerator};
use crate::models::mood::{ErrorResponse, MoodRequest, MoodResponse};
use crate::prompts::compose;
use crate::sentiment::SentimentClassifier;
use crate::middleware::logging::ReplyOutcome;
use crate::AppState;

/// Runs the whole pipeline for one request. Errors only come from the gateway.
pub async fn respond_to_mood(
    classifier: &SentimentClassifier,
    generator: &dyn TextGenerator,
    request: &MoodRequest,
) -> Result<MoodResponse, GatewayError> {
    let sentiment = classifier.classify(&request.mood);
    let prompt = compose(sentiment, &request.mood, request.age, &request.gender);
    tracing::debug!(prompt = %prompt, "composed prompt");

    let message = generator.generate(&prompt).await?;
    Ok(MoodResponse { message, sentiment })
}

/// POST /generate-response/ - Classify the mood and return a supportive message
pub async fn generate_response(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<MoodRequest>,
) -> impl IntoResponse {
    tracing::info!(
        session_id = %request.session_id,
        age = request.age,
        gender = %request.gender,
        mood_len = request.mood.len(),
        "incoming mood"
    );

    match respond_to_mood(&state.classifier, state.generator.as_ref(), &request).await {
        Ok(response) => (StatusCode::OK, Extension(ReplyOutcome::OK), Json(response)).into_response(),
        Err(e) => {
            tracing::error!(kind = e.kind(), "Gemini error: {}", e);
            (
                StatusCode::OK,
                Extension(ReplyOutcome(e.kind())),
                Json(ErrorResponse::from(&e)),
            )
                .into_response()
        }
    }
}

pub fn mood_routes() -> Router {
    Router::new()
        .route("/generate-response/", post(generate_response))
        .route("/generate-response", post(generate_response))
}
