//! Notification creation and the per-user feed.

pub mod feed;
pub mod service;

pub use feed::{FeedPage, FeedService};
pub use service::{NotificationEvent, NotificationService};
