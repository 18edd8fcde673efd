//! Inspect a user's activity feed.

use clap::Args;

use crate::output::{self, OutputFormat};
use skillbridge_core::config::AppConfig;
use skillbridge_core::error::AppError;
use skillbridge_core::types::UserId;
use skillbridge_service::{FeedService, RequestContext};

/// Arguments for the feed command
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Whose feed to list
    pub user: UserId,
    /// Page size
    #[arg(short, long)]
    pub limit: Option<u64>,
    /// Records to skip
    #[arg(short, long, default_value_t = 0)]
    pub skip: u64,
    /// Only unread records
    #[arg(long)]
    pub unread_only: bool,
}

/// Execute the feed command
pub async fn execute(args: &FeedArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let service = FeedService::new(store, config.feed.clone());
    let ctx = RequestContext::new(args.user);

    let page = service
        .get_feed(&ctx, args.limit, args.skip, args.unread_only)
        .await?;

    output::print_activities(&page.items, format);
    if format == OutputFormat::Table {
        output::print_kv("Shown", &page.items.len().to_string());
        output::print_kv("Total", &page.total.to_string());
        output::print_kv("Unread", &page.unread_count.to_string());
    }
    Ok(())
}
