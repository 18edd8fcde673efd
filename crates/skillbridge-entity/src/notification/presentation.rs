//! Display metadata attached to every notification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable status shown next to a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status_label")]
pub enum StatusLabel {
    Pending,
    Accepted,
    Rejected,
    Viewed,
    Message,
    Posted,
    Open,
    Closed,
}

impl StatusLabel {
    /// Return the label text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Viewed => "Viewed",
            Self::Message => "Message",
            Self::Posted => "Posted",
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symbolic icon identifier understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_icon", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Clock,
    Check,
    X,
    Eye,
    Envelope,
    Plus,
    Edit,
}

impl IconKind {
    /// Return the icon name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Check => "check",
            Self::X => "x",
            Self::Eye => "eye",
            Self::Envelope => "envelope",
            Self::Plus => "plus",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The pair stored on a record at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Status label.
    pub status_label: StatusLabel,
    /// Icon identifier.
    pub icon_kind: IconKind,
}

impl Presentation {
    /// Pair a label with an icon.
    pub const fn new(status_label: StatusLabel, icon_kind: IconKind) -> Self {
        Self {
            status_label,
            icon_kind,
        }
    }
}
