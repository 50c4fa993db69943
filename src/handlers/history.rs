// src/handlers/history.rs
//! Mood history. Nothing is stored yet, so every session sees the same entries.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::models::mood::MoodEntry;

const PLACEHOLDER_ENTRIES: [(&str, &str); 3] = [("1", "Happy"), ("2", "Sad"), ("3", "Happy")];

pub fn mood_entries(_session_id: &str) -> Vec<MoodEntry> {
    PLACEHOLDER_ENTRIES
        .iter()
        .map(|(id, emotion)| MoodEntry {
            id: id.to_string(),
            emotion: emotion.to_string(),
        })
        .collect()
}

/// GET /entries/:session_id - Mood history for a session
pub async fn get_entries(Path(session_id): Path<String>) -> Json<Vec<MoodEntry>> {
    tracing::debug!(session_id = %session_id, "serving placeholder history");
    Json(mood_entries(&session_id))
}

pub fn history_routes() -> Router {
    Router::new().route("/entries/:session_id", get(get_entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_ignore_the_session() {
        let registered = mood_entries("0b5c8f8e-3f5e-4c1a-9d57-1f3f6f0d2a11");
        let never_seen = mood_entries("definitely-not-a-session");
        assert_eq!(registered, never_seen);
        assert_eq!(registered.len(), 3);
        assert_eq!(registered[0].emotion, "Happy");
        assert_eq!(registered[1].emotion, "Sad");
        assert_eq!(registered[2].id, "3");
    }

    #[test]
    fn test_entry_id_serializes_with_underscore() {
        let value = serde_json::to_value(&mood_entries("x")[0]).unwrap();
        assert_eq!(value, serde_json::json!({"_id": "1", "emotion": "Happy"}));
    }
}
