//! Static mapping from event kinds to display metadata.
//!
//! This table is the only place a status label or icon is chosen. Records
//! store the resolved pair at creation time and never recompute it.

use skillbridge_core::AppResult;

use super::kind::EventKind;
use super::presentation::{IconKind, Presentation, StatusLabel};
use crate::opportunity::OpportunityStatus;

/// Lookup table for [`EventKind`] presentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityRegistry;

impl ActivityRegistry {
    /// Resolve a raw event kind string.
    ///
    /// Fails with `NotFound` for anything outside the closed enumeration.
    pub fn lookup(raw: &str) -> AppResult<(EventKind, Presentation)> {
        let kind: EventKind = raw.parse()?;
        Ok((kind, Self::resolve(kind, None)))
    }

    /// Resolve a typed event kind.
    ///
    /// `status` only matters for [`EventKind::OpportunityStatusChanged`],
    /// whose label follows the new opportunity status; without it the
    /// label is `Open`.
    pub const fn resolve(kind: EventKind, status: Option<OpportunityStatus>) -> Presentation {
        use IconKind as I;
        use StatusLabel as L;

        match kind {
            EventKind::ApplicationPending => Presentation::new(L::Pending, I::Clock),
            EventKind::ApplicationAccepted => Presentation::new(L::Accepted, I::Check),
            EventKind::ApplicationRejected => Presentation::new(L::Rejected, I::X),
            EventKind::ApplicationViewed => Presentation::new(L::Viewed, I::Eye),
            EventKind::MessageReceived => Presentation::new(L::Message, I::Envelope),
            EventKind::ApplicationReceived => Presentation::new(L::Pending, I::Clock),
            EventKind::ApplicationAcceptedByNgo => Presentation::new(L::Accepted, I::Check),
            EventKind::ApplicationRejectedByNgo => Presentation::new(L::Rejected, I::X),
            EventKind::OpportunityPosted => Presentation::new(L::Posted, I::Plus),
            EventKind::OpportunityStatusChanged => match status {
                Some(OpportunityStatus::Closed) => Presentation::new(L::Closed, I::Edit),
                Some(OpportunityStatus::Open) | None => Presentation::new(L::Open, I::Edit),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_core::error::ErrorKind;

    #[test]
    fn test_table_matches_published_mapping() {
        let expected = [
            ("application_pending", "Pending", "clock"),
            ("application_accepted", "Accepted", "check"),
            ("application_rejected", "Rejected", "x"),
            ("application_viewed", "Viewed", "eye"),
            ("message_received", "Message", "envelope"),
            ("application_received", "Pending", "clock"),
            ("application_accepted_by_ngo", "Accepted", "check"),
            ("application_rejected_by_ngo", "Rejected", "x"),
            ("opportunity_posted", "Posted", "plus"),
            ("opportunity_status_changed", "Open", "edit"),
        ];

        for (raw, label, icon) in expected {
            let (_, presentation) = ActivityRegistry::lookup(raw).unwrap();
            assert_eq!(presentation.status_label.as_str(), label, "label for {raw}");
            assert_eq!(presentation.icon_kind.as_str(), icon, "icon for {raw}");
        }
    }

    #[test]
    fn test_status_change_follows_new_status() {
        let closed = ActivityRegistry::resolve(
            EventKind::OpportunityStatusChanged,
            Some(OpportunityStatus::Closed),
        );
        assert_eq!(closed.status_label, StatusLabel::Closed);
        assert_eq!(closed.icon_kind, IconKind::Edit);

        let open = ActivityRegistry::resolve(
            EventKind::OpportunityStatusChanged,
            Some(OpportunityStatus::Open),
        );
        assert_eq!(open.status_label, StatusLabel::Open);
    }

    #[test]
    fn test_status_hint_ignored_for_other_kinds() {
        let presentation =
            ActivityRegistry::resolve(EventKind::OpportunityPosted, Some(OpportunityStatus::Closed));
        assert_eq!(presentation.status_label, StatusLabel::Posted);
    }

    #[test]
    fn test_unknown_kind() {
        let err = ActivityRegistry::lookup("volunteer_hours_logged").unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
