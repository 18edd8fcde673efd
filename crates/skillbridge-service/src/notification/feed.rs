//! Read and manage the authenticated user's activity feed.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use skillbridge_core::config::FeedConfig;
use skillbridge_core::error::AppError;
use skillbridge_core::types::NotificationId;
use skillbridge_core::types::pagination::PageRequest;
use skillbridge_database::{FeedFilter, NotificationStore};
use skillbridge_entity::notification::NotificationRecord;

use crate::context::RequestContext;

/// One page of a user's feed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    /// Records in this page, newest first.
    pub items: Vec<NotificationRecord>,
    /// Number of records matching the filter, ignoring pagination.
    pub total: u64,
    /// The user's unread count, regardless of filter.
    pub unread_count: u64,
}

/// Feed queries scoped to the calling user.
///
/// A user can only see or change records addressed to them.
#[derive(Debug, Clone)]
pub struct FeedService {
    /// Notification store.
    store: Arc<dyn NotificationStore>,
    /// Page size limits.
    config: FeedConfig,
}

impl FeedService {
    /// Creates a new feed service.
    pub fn new(store: Arc<dyn NotificationStore>, config: FeedConfig) -> Self {
        Self { store, config }
    }

    /// Lists the caller's feed.
    ///
    /// A missing `limit` uses the configured default; any limit is clamped
    /// into `1..=max_limit`.
    pub async fn get_feed(
        &self,
        ctx: &RequestContext,
        limit: Option<u64>,
        offset: u64,
        unread_only: bool,
    ) -> Result<FeedPage, AppError> {
        let page = PageRequest::new(
            limit.unwrap_or(self.config.default_limit),
            offset,
            self.config.max_limit,
        );
        let filter = FeedFilter { unread_only };

        let result = self
            .store
            .find_by_recipient(ctx.user_id, page, filter)
            .await?;
        let unread_count = self.store.count_unread(ctx.user_id).await?;

        debug!(
            user_id = %ctx.user_id,
            limit = page.limit(),
            offset = page.offset(),
            unread_only,
            "Feed served"
        );

        Ok(FeedPage {
            items: result.items,
            total: result.total,
            unread_count,
        })
    }

    /// Counts the caller's unread records.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.store.count_unread(ctx.user_id).await
    }

    /// Marks one of the caller's records as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: NotificationId,
    ) -> Result<NotificationRecord, AppError> {
        self.load_owned(ctx, notification_id).await?;
        self.store.mark_read(notification_id).await
    }

    /// Marks all of the caller's records as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.store.mark_all_read(ctx.user_id).await
    }

    /// Deletes one of the caller's records.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        notification_id: NotificationId,
    ) -> Result<(), AppError> {
        self.load_owned(ctx, notification_id).await?;
        self.store.delete(notification_id).await
    }

    async fn load_owned(
        &self,
        ctx: &RequestContext,
        notification_id: NotificationId,
    ) -> Result<NotificationRecord, AppError> {
        let record = self
            .store
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))?;

        if !record.is_owned_by(ctx.user_id) {
            warn!(
                user_id = %ctx.user_id,
                notification_id = %notification_id,
                "Rejected access to another user's activity"
            );
            return Err(AppError::forbidden("Access denied. This activity does not belong to you."));
        }
        Ok(record)
    }
}
