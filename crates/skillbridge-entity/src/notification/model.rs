//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use skillbridge_core::error::AppError;
use skillbridge_core::types::{ApplicationId, MessageId, NotificationId, OpportunityId, UserId};

use super::kind::EventKind;
use super::presentation::{IconKind, Presentation, StatusLabel};
use super::registry::ActivityRegistry;
use crate::opportunity::OpportunityStatus;

/// A single feed entry representing one past event for one recipient.
///
/// `actor_display_name` and `related_opportunity_title` are snapshots taken
/// when the record was created. They are not refreshed when the actor or
/// opportunity is renamed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NotificationRecord {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The only user allowed to see or change this record.
    pub recipient_id: UserId,
    /// Who caused the event.
    pub actor_id: UserId,
    /// The actor's display name at creation time.
    pub actor_display_name: String,
    /// What happened.
    pub event_kind: EventKind,
    /// Opportunity the event concerns, if any.
    pub related_opportunity_id: Option<OpportunityId>,
    /// The opportunity's title at creation time.
    pub related_opportunity_title: Option<String>,
    /// Application the event concerns, if any.
    pub related_application_id: Option<ApplicationId>,
    /// Message the event concerns, if any.
    pub related_message_id: Option<MessageId>,
    /// Label resolved from `event_kind` at creation.
    pub status_label: StatusLabel,
    /// Icon resolved from `event_kind` at creation.
    pub icon_kind: IconKind,
    /// Whether the recipient has read this record. Only ever goes false to true.
    pub is_read: bool,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    /// Materialize a stored record from its creation input.
    pub fn from_new(
        id: NotificationId,
        new: NewNotification,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipient_id: new.recipient_id,
            actor_id: new.actor_id,
            actor_display_name: new.actor_display_name,
            event_kind: new.event_kind,
            related_opportunity_id: new.refs.opportunity_id,
            related_opportunity_title: new.refs.opportunity_title,
            related_application_id: new.refs.application_id,
            related_message_id: new.refs.message_id,
            status_label: new.presentation.status_label,
            icon_kind: new.presentation.icon_kind,
            is_read: false,
            created_at,
        }
    }

    /// Check if the record is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Check whether `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.recipient_id == user_id
    }
}

/// Optional references carried by a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRefs {
    /// Related opportunity.
    #[serde(default)]
    pub opportunity_id: Option<OpportunityId>,
    /// Opportunity title snapshot.
    #[serde(default)]
    pub opportunity_title: Option<String>,
    /// Related application.
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
    /// Related message.
    #[serde(default)]
    pub message_id: Option<MessageId>,
}

impl RelatedRefs {
    /// References for an opportunity-scoped event.
    pub fn opportunity(id: OpportunityId, title: impl Into<String>) -> Self {
        Self {
            opportunity_id: Some(id),
            opportunity_title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Attach an application reference.
    pub fn with_application(mut self, id: ApplicationId) -> Self {
        self.application_id = Some(id);
        self
    }

    /// Attach a message reference.
    pub fn with_message(mut self, id: MessageId) -> Self {
        self.message_id = Some(id);
        self
    }

    /// Blank titles are stored as absent.
    fn normalized(mut self) -> Self {
        self.opportunity_title = self
            .opportunity_title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

/// Creation input for a notification record.
///
/// The only constructor resolves the presentation through
/// [`ActivityRegistry`], so a label or icon cannot be chosen by the caller.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewNotification {
    #[validate(custom(function = "validate_user_id"))]
    recipient_id: UserId,
    #[validate(custom(function = "validate_user_id"))]
    actor_id: UserId,
    #[validate(length(min = 1, message = "actor display name is required"))]
    actor_display_name: String,
    event_kind: EventKind,
    refs: RelatedRefs,
    presentation: Presentation,
}

impl NewNotification {
    /// Build a creation input, resolving label and icon from `event_kind`.
    pub fn new(
        recipient_id: UserId,
        actor_id: UserId,
        actor_display_name: impl Into<String>,
        event_kind: EventKind,
        status: Option<OpportunityStatus>,
        refs: RelatedRefs,
    ) -> Self {
        Self {
            recipient_id,
            actor_id,
            actor_display_name: actor_display_name.into().trim().to_string(),
            event_kind,
            refs: refs.normalized(),
            presentation: ActivityRegistry::resolve(event_kind, status),
        }
    }

    /// Check required fields, mapping failures to a `Validation` error.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid notification: {e}")))
    }

    /// Recipient.
    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    /// Actor.
    pub fn actor_id(&self) -> UserId {
        self.actor_id
    }

    /// Actor display name snapshot.
    pub fn actor_display_name(&self) -> &str {
        &self.actor_display_name
    }

    /// Event kind.
    pub fn event_kind(&self) -> EventKind {
        self.event_kind
    }

    /// Optional references.
    pub fn refs(&self) -> &RelatedRefs {
        &self.refs
    }

    /// Resolved label and icon.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }
}

fn validate_user_id(id: &UserId) -> Result<(), ValidationError> {
    if id.as_uuid().is_nil() {
        return Err(ValidationError::new("missing_user_id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_core::error::ErrorKind;

    fn posted(name: &str) -> NewNotification {
        NewNotification::new(
            UserId::new(),
            UserId::new(),
            name,
            EventKind::OpportunityPosted,
            None,
            RelatedRefs::opportunity(OpportunityId::new(), "Clean Park"),
        )
    }

    #[test]
    fn test_presentation_is_resolved_on_construction() {
        let new = posted("Green Org");
        assert_eq!(new.presentation().status_label, StatusLabel::Posted);
        assert_eq!(new.presentation().icon_kind, IconKind::Plus);
        assert!(new.check().is_ok());
    }

    #[test]
    fn test_blank_actor_name_fails_validation() {
        let err = posted("   ").check().unwrap_err();
        assert!(err.is(ErrorKind::Validation));
    }

    #[test]
    fn test_nil_recipient_fails_validation() {
        let new = NewNotification::new(
            UserId::from_uuid(uuid::Uuid::nil()),
            UserId::new(),
            "Org",
            EventKind::MessageReceived,
            None,
            RelatedRefs::default(),
        );
        assert!(new.check().unwrap_err().is(ErrorKind::Validation));
    }

    #[test]
    fn test_long_snapshots_are_accepted() {
        let title = "A".repeat(300);
        let new = NewNotification::new(
            UserId::new(),
            UserId::new(),
            "N".repeat(257),
            EventKind::OpportunityPosted,
            None,
            RelatedRefs::opportunity(OpportunityId::new(), title.clone()),
        );
        assert!(new.check().is_ok());
        assert_eq!(new.refs().opportunity_title.as_deref(), Some(title.as_str()));
    }

    #[test]
    fn test_blank_title_is_dropped() {
        let new = NewNotification::new(
            UserId::new(),
            UserId::new(),
            "Org",
            EventKind::OpportunityPosted,
            None,
            RelatedRefs::opportunity(OpportunityId::new(), "  "),
        );
        assert_eq!(new.refs().opportunity_title, None);
    }

    #[test]
    fn test_from_new_starts_unread() {
        let new = posted("Green Org");
        let recipient = new.recipient_id();
        let record = NotificationRecord::from_new(NotificationId::new(), new, Utc::now());
        assert!(record.is_unread());
        assert!(record.is_owned_by(recipient));
        assert_eq!(record.related_opportunity_title.as_deref(), Some("Clean Park"));
    }
}
