// src/handlers/mod.rs
pub mod history;
pub mod mood;
pub mod models_list;
pub mod session;
pub mod status;
