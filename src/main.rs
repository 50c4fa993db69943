use anyhow::Context;
use std::sync::Arc;

use mood_companion::config::{AppConfig, CorsPolicy};
use mood_companion::gateway::TextGenerator;
use mood_companion::gemini_client::GeminiClient;
use mood_companion::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    init_logging(&config).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if config.api_key_configured() {
        tracing::info!("Initializing Gemini AI client ({})...", config.model);
    } else {
        tracing::warn!("GOOGLE_API_KEY not found. Mood responses will fail until it is set.");
    }

    let gemini_client = GeminiClient::from_config(&config);

    if config.api_key_configured() && config.list_models_on_startup {
        log_available_models(&gemini_client).await;
    }

    let shared_state = Arc::new(AppState::new(
        Arc::new(gemini_client),
        config.api_key_configured(),
    ));

    let app = build_router(shared_state, &config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn log_available_models(client: &GeminiClient) {
    match TextGenerator::list_models(client).await {
        Ok(models) => {
            tracing::info!("Available models: {}", models.len());
            for model in models {
                tracing::info!("- {}: {:?}", model.name, model.generation_methods);
            }
        }
        Err(e) => tracing::warn!(kind = e.kind(), "Could not list Gemini models: {}", e),
    }
}

fn init_logging(config: &AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Request lines and classified moods at info; prompts and raw replies only at debug.
    let default_directives = if cfg!(debug_assertions) {
        "info,mood_companion=debug,reqwest=info,hyper=warn"
    } else {
        "warn,mood_companion=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))?;

    let fmt_layer = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => fmt::layer().json().with_current_span(false).with_target(true).boxed(),
        _ => fmt::layer().with_target(false).compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    let cors = match &config.cors {
        CorsPolicy::Permissive => "any origin".to_string(),
        CorsPolicy::AllowList(origins) => origins.join(", "),
    };
    let gemini_key = if config.api_key_configured() { "set" } else { "missing" };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.model,
        gemini_key,
        cors = %cors,
        "mood companion starting"
    );

    Ok(())
}
