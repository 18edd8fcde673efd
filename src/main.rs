//! SkillBridge activity feed server.
//!
//! Main entry point that loads configuration, opens the notification store,
//! and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use skillbridge_core::config::{AppConfig, LogFormat};
use skillbridge_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SKILLBRIDGE_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("SKILLBRIDGE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.logging.filter_directive()));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting SkillBridge activity feed"
    );

    let store = skillbridge_database::open_store(&config.database).await?;
    tracing::info!("Notification store ready");

    skillbridge_api::run_server(config, store).await?;

    tracing::info!("SkillBridge shut down gracefully");
    Ok(())
}
