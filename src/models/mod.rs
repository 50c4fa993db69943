// src/models/mod.rs
pub mod mood;
pub mod session;
