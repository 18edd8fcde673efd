//! Best-effort notification creation for domain events.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use skillbridge_core::types::{OpportunityId, UserId};
use skillbridge_database::NotificationStore;
use skillbridge_entity::notification::{
    ActivityRegistry, EventKind, NewNotification, NotificationRecord, RelatedRefs,
};
use skillbridge_entity::opportunity::OpportunityStatus;

/// A domain event to be recorded in a recipient's feed.
///
/// `kind` is the raw event kind string emitted by the triggering handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Whose feed receives the entry.
    pub recipient_id: UserId,
    /// Who caused the event.
    pub actor_id: UserId,
    /// The actor's display name right now.
    pub actor_display_name: String,
    /// Raw event kind, e.g. `application_accepted`.
    pub kind: String,
    /// Optional references.
    #[serde(default)]
    pub refs: RelatedRefs,
}

impl NotificationEvent {
    /// Create an event.
    pub fn new(
        recipient_id: UserId,
        actor_id: UserId,
        actor_display_name: impl Into<String>,
        kind: impl Into<String>,
        refs: RelatedRefs,
    ) -> Self {
        Self {
            recipient_id,
            actor_id,
            actor_display_name: actor_display_name.into(),
            kind: kind.into(),
            refs,
        }
    }
}

/// Records domain events as feed entries.
///
/// Every operation here is a side effect of some other user action, so
/// failures are logged and swallowed rather than returned.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification store.
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Record `event` in the recipient's feed.
    ///
    /// Returns `None` if the kind is unknown or the store rejects the record.
    pub async fn notify(&self, event: NotificationEvent) -> Option<NotificationRecord> {
        let kind = match ActivityRegistry::lookup(&event.kind) {
            Ok((kind, _)) => kind,
            Err(e) => {
                error!(
                    recipient_id = %event.recipient_id,
                    kind = %event.kind,
                    error = %e,
                    "Dropping notification with unknown activity type"
                );
                return None;
            }
        };

        let new = NewNotification::new(
            event.recipient_id,
            event.actor_id,
            event.actor_display_name,
            kind,
            None,
            event.refs,
        );
        self.persist(new).await
    }

    /// Record an opportunity's open/closed transition in its owner's feed.
    ///
    /// The owner is both recipient and actor.
    pub async fn notify_opportunity_status(
        &self,
        recipient_id: UserId,
        actor_display_name: &str,
        opportunity_id: OpportunityId,
        opportunity_title: &str,
        new_status: OpportunityStatus,
    ) -> Option<NotificationRecord> {
        let new = NewNotification::new(
            recipient_id,
            recipient_id,
            actor_display_name,
            EventKind::OpportunityStatusChanged,
            Some(new_status),
            RelatedRefs::opportunity(opportunity_id, opportunity_title),
        );
        self.persist(new).await
    }

    /// Remove every feed entry that references `opportunity_id`.
    ///
    /// Returns the number removed, or 0 if the store failed.
    pub async fn purge_opportunity(&self, opportunity_id: OpportunityId) -> u64 {
        match self.store.delete_by_opportunity(opportunity_id).await {
            Ok(removed) => {
                info!(
                    opportunity_id = %opportunity_id,
                    removed,
                    "Purged opportunity notifications"
                );
                removed
            }
            Err(e) => {
                warn!(
                    opportunity_id = %opportunity_id,
                    error = %e,
                    "Failed to purge opportunity notifications"
                );
                0
            }
        }
    }

    async fn persist(&self, new: NewNotification) -> Option<NotificationRecord> {
        let recipient_id = new.recipient_id();
        let kind = new.event_kind();

        match self.store.create(new).await {
            Ok(record) => {
                info!(
                    notification_id = %record.id,
                    recipient_id = %recipient_id,
                    kind = %kind,
                    "Notification created"
                );
                Some(record)
            }
            Err(e) => {
                error!(
                    recipient_id = %recipient_id,
                    kind = %kind,
                    error = %e,
                    "Failed to create notification"
                );
                None
            }
        }
    }
}
