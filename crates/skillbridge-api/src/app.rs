//! Application builder: wires router and state into an Axum app and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::{info, warn};

use skillbridge_core::config::AppConfig;
use skillbridge_core::error::{AppError, ErrorKind};
use skillbridge_database::NotificationStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application for an opened store.
pub fn build_app(config: AppConfig, store: Arc<dyn NotificationStore>) -> Router {
    build_router(AppState::new(config, store))
}

/// Serves the API until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, store: Arc<dyn NotificationStore>) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(config, store);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, format!("Failed to bind {addr}"), e)
    })?;

    info!(address = %addr, "SkillBridge activity API listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    // In-flight requests get at most `shutdown_grace_seconds` to finish.
    let drain = async {
        server
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))
    };
    tokio::select! {
        result = drain => result?,
        _ = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed");
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
