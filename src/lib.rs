// lib.rs - Mood companion service: sentiment, prompt templating and the Gemini gateway
pub mod config;
pub mod gateway;
pub mod gemini_client;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod prompts;
pub mod sentiment;

use axum::{http::HeaderValue, Extension, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsPolicy;
use crate::gateway::TextGenerator;
use crate::sentiment::SentimentClassifier;

// Read-only after startup; shared by every request.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub classifier: SentimentClassifier,
    pub api_key_configured: bool,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, api_key_configured: bool) -> Self {
        Self {
            generator,
            classifier: SentimentClassifier::default(),
            api_key_configured,
            started_at: Utc::now(),
        }
    }
}

pub fn build_router(state: Arc<AppState>, cors: &CorsPolicy) -> Router {
    Router::new()
        .merge(handlers::session::session_routes())
        .merge(handlers::mood::mood_routes())
        .merge(handlers::history::history_routes())
        .merge(handlers::models_list::models_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(cors_layer(cors))
        .layer(Extension(state))
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
