//! PostgreSQL pool for the notification store.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use skillbridge_core::config::DatabaseConfig;
use skillbridge_core::error::{AppError, ErrorKind};

/// Connection pool backing [`NotificationRepository`](crate::NotificationRepository).
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Connects eagerly so a bad URL or unreachable server fails at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options: PgConnectOptions = config.url.parse().map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid database.url", e)
        })?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or("<default>"),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL notification store"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Notification store is unreachable",
                    e,
                )
            })?;

        info!(connections = pool.size(), "PostgreSQL notification store ready");
        Ok(Self { pool })
    }

    /// Borrow the pool, e.g. for migrations.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Give up the wrapper and keep the pool.
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}
