// src/models/session.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /register`. Accepted and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub age: i64,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub session_id: String,
}
