// src/handlers/models_list.rs
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::models::mood::{ErrorResponse, ModelListResponse};
use crate::middleware::logging::ReplyOutcome;
use crate::AppState;

/// GET /list-models - Models visible to the configured API key
pub async fn list_models(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    match state.generator.list_models().await {
        Ok(models) => (
            StatusCode::OK,
            Extension(ReplyOutcome::OK),
            Json(ModelListResponse { available_models: models }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(kind = e.kind(), "Failed to list models: {}", e);
            (
                StatusCode::OK,
                Extension(ReplyOutcome(e.kind())),
                Json(ErrorResponse::from(&e)),
            )
                .into_response()
        }
    }
}

pub fn models_routes() -> Router {
    Router::new().route("/list-models", get(list_models))
}
