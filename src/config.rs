// src/config.rs
//! Process configuration, read once at startup from the environment (and `.env`).

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("Invalid boolean for {name}: '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

/// Which origins the CORS layer lets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Permissive,
    AllowList(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub cors: CorsPolicy,
    pub list_models_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. `from_env` is the
    /// production entry point; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let model = lookup("GEMINI_MODEL")
            .map(|m| normalize_model_name(&m))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("GEMINI_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let cors = parse_cors(lookup("CORS_ALLOWED_ORIGINS").as_deref());

        let list_models_on_startup = match lookup("LIST_MODELS_ON_STARTUP") {
            Some(value) => parse_bool("LIST_MODELS_ON_STARTUP", &value)?,
            None => true,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            bind_addr,
            cors,
            list_models_on_startup,
        })
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Accepts both `gemini-pro` and the fully-qualified `models/gemini-pro`.
fn normalize_model_name(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix("models/").unwrap_or(trimmed).to_string()
}

fn parse_cors(raw: Option<&str>) -> CorsPolicy {
    let Some(raw) = raw else {
        return CorsPolicy::Permissive;
    };

    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsPolicy::Permissive
    } else {
        CorsPolicy::AllowList(origins)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
