//! Record a domain event from the command line.
//!
//! Useful for seeding a development database and for checking how an
//! event kind is presented without going through the domain handlers.

use clap::Args;

use crate::output::{self, OutputFormat};
use skillbridge_core::config::AppConfig;
use skillbridge_core::error::AppError;
use skillbridge_core::types::{ApplicationId, MessageId, OpportunityId, UserId};
use skillbridge_entity::notification::{EventKind, RelatedRefs};
use skillbridge_entity::opportunity::OpportunityStatus;
use skillbridge_service::{NotificationEvent, NotificationService};

/// Arguments for the emit command
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Event kind, e.g. `application_accepted`
    pub kind: String,
    /// Whose feed receives the entry
    #[arg(long)]
    pub recipient: UserId,
    /// Who caused the event; defaults to the recipient
    #[arg(long)]
    pub actor: Option<UserId>,
    /// Actor display name
    #[arg(long)]
    pub actor_name: String,
    /// Related opportunity
    #[arg(long)]
    pub opportunity: Option<OpportunityId>,
    /// Opportunity title snapshot
    #[arg(long, requires = "opportunity")]
    pub opportunity_title: Option<String>,
    /// Related application
    #[arg(long)]
    pub application: Option<ApplicationId>,
    /// Related message
    #[arg(long)]
    pub message: Option<MessageId>,
    /// New status, for `opportunity_status_changed`
    #[arg(long)]
    pub status: Option<OpportunityStatus>,
}

impl EmitArgs {
    fn refs(&self) -> RelatedRefs {
        let mut refs = match self.opportunity {
            Some(id) => {
                RelatedRefs::opportunity(id, self.opportunity_title.clone().unwrap_or_default())
            }
            None => RelatedRefs::default(),
        };
        if let Some(id) = self.application {
            refs = refs.with_application(id);
        }
        if let Some(id) = self.message {
            refs = refs.with_message(id);
        }
        refs
    }
}

/// Execute the emit command
pub async fn execute(args: &EmitArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let service = NotificationService::new(store);

    let is_status_change = args.kind == EventKind::OpportunityStatusChanged.as_str();
    let record = match (is_status_change, args.status, args.opportunity) {
        (true, Some(status), Some(opportunity_id)) => {
            service
                .notify_opportunity_status(
                    args.recipient,
                    &args.actor_name,
                    opportunity_id,
                    args.opportunity_title.as_deref().unwrap_or_default(),
                    status,
                )
                .await
        }
        (true, Some(_), None) => {
            return Err(AppError::validation(
                "--status requires --opportunity for a status change",
            ));
        }
        _ => {
            service
                .notify(NotificationEvent::new(
                    args.recipient,
                    args.actor.unwrap_or(args.recipient),
                    &args.actor_name,
                    &args.kind,
                    args.refs(),
                ))
                .await
        }
    };

    match record {
        Some(record) => {
            output::print_activity(&record, format);
            output::print_success("Activity recorded");
            Ok(())
        }
        None => Err(AppError::validation(format!(
            "Activity '{}' was not recorded; see the log for details",
            args.kind
        ))),
    }
}
