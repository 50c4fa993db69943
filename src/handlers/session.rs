// src/handlers/session.rs
use axum::{response::Json, routing::post, Router};
use uuid::Uuid;

use crate::models::session::{RegisterResponse, UserInfo};

/// Mints a fresh random session id. The user info is not kept anywhere and the id
/// is never checked again.
pub fn register_session(_info: &UserInfo) -> String {
    Uuid::new_v4().to_string()
}

/// POST /register - Issue a session id
pub async fn register_user(Json(info): Json<UserInfo>) -> Json<RegisterResponse> {
    let session_id = register_session(&info);
    tracing::info!(session_id = %session_id, "registered session");
    Json(RegisterResponse { session_id })
}

pub fn session_routes() -> Router {
    Router::new().route("/register", post(register_user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_session_ids_are_valid_uuids() {
        let info = UserInfo { age: 20, gender: "female".to_string() };
        let id = register_session(&info);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_ten_thousand_registrations_are_distinct() {
        let info = UserInfo { age: 20, gender: "male".to_string() };
        let ids: HashSet<String> = (0..10_000).map(|_| register_session(&info)).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
