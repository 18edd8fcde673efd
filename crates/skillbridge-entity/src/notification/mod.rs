//! Notification domain entities.

pub mod kind;
pub mod model;
pub mod presentation;
pub mod registry;

pub use kind::EventKind;
pub use model::{NewNotification, NotificationRecord, RelatedRefs};
pub use presentation::{IconKind, Presentation, StatusLabel};
pub use registry::ActivityRegistry;
