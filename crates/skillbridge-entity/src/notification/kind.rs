//! Event kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use skillbridge_core::AppError;

/// What happened, from the point of view of the notification's recipient.
///
/// The set is closed: anything outside it is rejected when a notification
/// is created. Volunteer-facing kinds come first, NGO-facing kinds after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_event_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The volunteer's application was submitted and awaits review.
    ApplicationPending,
    /// The volunteer's application was accepted.
    ApplicationAccepted,
    /// The volunteer's application was rejected.
    ApplicationRejected,
    /// An NGO opened the volunteer's application.
    ApplicationViewed,
    /// A direct message arrived.
    MessageReceived,
    /// An NGO received a new application.
    ApplicationReceived,
    /// The NGO accepted an application.
    ApplicationAcceptedByNgo,
    /// The NGO rejected an application.
    ApplicationRejectedByNgo,
    /// The NGO posted an opportunity.
    OpportunityPosted,
    /// The NGO opened or closed one of its opportunities.
    OpportunityStatusChanged,
}

impl EventKind {
    /// Every member of the enumeration, in declaration order.
    pub const ALL: [EventKind; 10] = [
        Self::ApplicationPending,
        Self::ApplicationAccepted,
        Self::ApplicationRejected,
        Self::ApplicationViewed,
        Self::MessageReceived,
        Self::ApplicationReceived,
        Self::ApplicationAcceptedByNgo,
        Self::ApplicationRejectedByNgo,
        Self::OpportunityPosted,
        Self::OpportunityStatusChanged,
    ];

    /// Return the wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationPending => "application_pending",
            Self::ApplicationAccepted => "application_accepted",
            Self::ApplicationRejected => "application_rejected",
            Self::ApplicationViewed => "application_viewed",
            Self::MessageReceived => "message_received",
            Self::ApplicationReceived => "application_received",
            Self::ApplicationAcceptedByNgo => "application_accepted_by_ngo",
            Self::ApplicationRejectedByNgo => "application_rejected_by_ngo",
            Self::OpportunityPosted => "opportunity_posted",
            Self::OpportunityStatusChanged => "opportunity_status_changed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::not_found(format!("Unknown activity type: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_core::error::ErrorKind;

    #[test]
    fn test_wire_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_matches_wire_name() {
        let json = serde_json::to_string(&EventKind::ApplicationAcceptedByNgo).unwrap();
        assert_eq!(json, "\"application_accepted_by_ngo\"");
    }

    #[test]
    fn test_unknown_kind_is_not_found() {
        let err = "application_withdrawn".parse::<EventKind>().unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Opportunity_Posted".parse::<EventKind>().is_err());
        assert!(" opportunity_posted".parse::<EventKind>().is_err());
    }
}
