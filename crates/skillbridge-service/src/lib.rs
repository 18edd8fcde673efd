//! # skillbridge-service
//!
//! Business logic for the SkillBridge activity feed. Domain handlers call
//! [`NotificationService`] to record events; the HTTP layer calls
//! [`FeedService`] on behalf of an authenticated user.
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn NotificationStore>`.

pub mod context;
pub mod notification;

pub use context::RequestContext;
pub use notification::{FeedPage, FeedService, NotificationEvent, NotificationService};
