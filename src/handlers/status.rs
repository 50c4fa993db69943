// src/handlers/status.rs
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// GET /api/status - Health check and configuration summary
pub async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let uptime = chrono::Utc::now().signed_duration_since(state.started_at);

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.generator.model_name(),
        "gemini_configured": state.api_key_configured,
        "started_at": state.started_at.to_rfc3339(),
        "uptime_seconds": uptime.num_seconds(),
    }))
}

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}
