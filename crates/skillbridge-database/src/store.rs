//! The notification store abstraction.

use async_trait::async_trait;

use skillbridge_core::result::AppResult;
use skillbridge_core::types::pagination::{Page, PageRequest};
use skillbridge_core::types::{NotificationId, OpportunityId, UserId};
use skillbridge_entity::notification::{NewNotification, NotificationRecord};

/// Filters applied to a recipient's feed before pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// Only return records with `is_read = false`.
    pub unread_only: bool,
}

impl FeedFilter {
    /// Filter to unread records only.
    pub fn unread() -> Self {
        Self { unread_only: true }
    }
}

/// CRUD over notification records.
///
/// Implementations do not check ownership. Callers that act on behalf of a
/// user must compare `recipient_id` before calling `mark_read` or `delete`.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new record, assigning its id and creation time.
    ///
    /// Fails with `Validation` if a required field is missing.
    async fn create(&self, new: NewNotification) -> AppResult<NotificationRecord>;

    /// Load a single record.
    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<NotificationRecord>>;

    /// List a recipient's records, newest first.
    ///
    /// `page` applies after ordering; `Page::total` counts every record
    /// matching `filter`.
    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
        filter: FeedFilter,
    ) -> AppResult<Page<NotificationRecord>>;

    /// Count a recipient's unread records.
    async fn count_unread(&self, recipient_id: UserId) -> AppResult<u64>;

    /// Set `is_read` on one record. Fails with `NotFound` if it does not exist.
    async fn mark_read(&self, id: NotificationId) -> AppResult<NotificationRecord>;

    /// Set `is_read` on every unread record of a recipient, returning how
    /// many were changed.
    async fn mark_all_read(&self, recipient_id: UserId) -> AppResult<u64>;

    /// Remove one record. Fails with `NotFound` if it does not exist.
    async fn delete(&self, id: NotificationId) -> AppResult<()>;

    /// Remove every record referencing an opportunity.
    async fn delete_by_opportunity(&self, opportunity_id: OpportunityId) -> AppResult<u64>;

    /// Check that the store can serve requests.
    async fn health_check(&self) -> AppResult<bool>;
}
