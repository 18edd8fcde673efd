//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use skillbridge_core::config::{AppConfig, StoreBackend};
use skillbridge_core::error::AppError;
use skillbridge_database::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show which bundled migrations have been applied
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend == StoreBackend::Memory {
        output::print_warning("The memory backend has no schema; nothing to migrate.");
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            skillbridge_database::migration::run_migrations(pool.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let states = skillbridge_database::migration::migration_status(pool.pool()).await?;
            for state in &states {
                let mark = if state.applied { "applied" } else { "pending" };
                output::print_kv(&state.version.to_string(), &format!("{mark}  {}", state.description));
            }
            if states.iter().all(|s| s.applied) {
                output::print_success("Schema is up to date.");
            }
        }
    }

    Ok(())
}
