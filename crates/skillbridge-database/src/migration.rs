//! Schema migrations for the notification store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use skillbridge_core::error::{AppError, ErrorKind};

/// Migrations embedded from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// One known migration and whether it has been applied.
#[derive(Debug, Clone)]
pub struct MigrationState {
    /// Timestamp prefix of the migration file.
    pub version: i64,
    /// Human-readable name taken from the file name.
    pub description: String,
    /// Whether the database records it as successfully applied.
    pub applied: bool,
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(known = MIGRATOR.iter().count(), "Applying notification schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::StoreUnavailable,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Notification schema is up to date");
    Ok(())
}

/// Lists the bundled migrations against the versions recorded in the database.
///
/// A database that has never been migrated reports everything as pending.
pub async fn migration_status(pool: &PgPool) -> Result<Vec<MigrationState>, AppError> {
    let applied: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = TRUE")
            .fetch_all(pool)
            .await
            .or_else(|e| {
                // 42P01: the history table does not exist yet
                let never_migrated = matches!(
                    &e,
                    sqlx::Error::Database(db) if db.code().as_deref() == Some("42P01")
                );
                if never_migrated {
                    Ok(Vec::new())
                } else {
                    Err(AppError::with_source(
                        ErrorKind::StoreUnavailable,
                        "Failed to read migration history",
                        e,
                    ))
                }
            })?;

    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationState {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}
