//! Development bearer token issuing.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use skillbridge_auth::JwtEncoder;
use skillbridge_core::config::AppConfig;
use skillbridge_core::error::AppError;
use skillbridge_core::types::UserId;

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// User id to put in `sub`; a random id is used when omitted
    #[arg(short, long)]
    pub user: Option<UserId>,
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    user_id: UserId,
    token: String,
    expires_at: chrono::DateTime<chrono::Utc>,
}

/// Execute the token command
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let user_id = args.user.unwrap_or_default();
    let (token, expires_at) = JwtEncoder::new(&config.auth).issue(user_id)?;

    match format {
        OutputFormat::Json => output::print_json(&IssuedToken {
            user_id,
            token,
            expires_at,
        }),
        OutputFormat::Table => {
            output::print_kv("User", &user_id.to_string());
            output::print_kv("Expires", &expires_at.to_rfc3339());
            output::print_kv("Token", &token);
        }
    }
    Ok(())
}
