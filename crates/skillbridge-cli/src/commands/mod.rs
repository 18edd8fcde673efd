//! CLI command definitions and dispatch.

pub mod emit;
pub mod feed;
pub mod migrate;
pub mod token;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use skillbridge_core::config::AppConfig;
use skillbridge_core::error::AppError;
use skillbridge_database::NotificationStore;

/// SkillBridge activity feed administration
#[derive(Debug, Parser)]
#[command(name = "skillbridge", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, env = "SKILLBRIDGE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Record a domain event in a user's feed
    Emit(emit::EmitArgs),
    /// List a user's feed
    Feed(feed::FeedArgs),
    /// Issue a development bearer token
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Emit(args) => emit::execute(args, &config, self.format).await,
            Commands::Feed(args) => feed::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }
}

/// Helper: open the configured store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn NotificationStore>, AppError> {
    tracing::debug!(backend = ?config.database.backend, "Opening notification store");
    skillbridge_database::open_store(&config.database).await
}
