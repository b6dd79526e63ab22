//! Raise Eligibility Engine HTTP server.

use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use raise_engine::api::{AppState, create_router};
use raise_engine::config::ConfigLoader;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // RAISE_ENGINE_LOG_FORMAT=json for structured logs, pretty otherwise
    let log_format =
        std::env::var("RAISE_ENGINE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("raise_engine=info"));

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init(),
    }

    info!("Raise Eligibility Engine v{} starting...", VERSION);

    let config_dir =
        std::env::var("RAISE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?.into_config();
    info!(config_dir = %config_dir, "Configuration loaded");

    let bind_address = config.server.bind_address.clone();
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(bind_address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
