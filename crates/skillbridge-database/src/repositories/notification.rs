//! PostgreSQL notification repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use skillbridge_core::error::{AppError, ErrorKind};
use skillbridge_core::result::AppResult;
use skillbridge_core::types::pagination::{Page, PageRequest};
use skillbridge_core::types::{NotificationId, OpportunityId, UserId};
use skillbridge_entity::notification::{NewNotification, NotificationRecord};

use crate::store::{FeedFilter, NotificationStore};

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::StoreUnavailable, message, e)
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, new: NewNotification) -> AppResult<NotificationRecord> {
        new.check()?;

        let record = NotificationRecord::from_new(NotificationId::new_time_ordered(), new, Utc::now());

        sqlx::query_as::<_, NotificationRecord>(
            "INSERT INTO notifications (id, recipient_id, actor_id, actor_display_name, event_kind, \
             related_opportunity_id, related_opportunity_title, related_application_id, related_message_id, \
             status_label, icon_kind, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING *",
        )
        .bind(record.id)
        .bind(record.recipient_id)
        .bind(record.actor_id)
        .bind(&record.actor_display_name)
        .bind(record.event_kind)
        .bind(record.related_opportunity_id)
        .bind(&record.related_opportunity_title)
        .bind(record.related_application_id)
        .bind(record.related_message_id)
        .bind(record.status_label)
        .bind(record.icon_kind)
        .bind(record.is_read)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("Failed to create notification"))
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<NotificationRecord>> {
        sqlx::query_as::<_, NotificationRecord>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("Failed to find notification"))
    }

    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
        filter: FeedFilter,
    ) -> AppResult<Page<NotificationRecord>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications \
             WHERE recipient_id = $1 AND ($2 = FALSE OR is_read = FALSE)",
        )
        .bind(recipient_id)
        .bind(filter.unread_only)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("Failed to count notifications"))?;

        let items = sqlx::query_as::<_, NotificationRecord>(
            "SELECT * FROM notifications \
             WHERE recipient_id = $1 AND ($2 = FALSE OR is_read = FALSE) \
             ORDER BY created_at DESC, id DESC LIMIT $3 OFFSET $4",
        )
        .bind(recipient_id)
        .bind(filter.unread_only)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(store_error("Failed to list notifications"))?;

        debug!(
            recipient_id = %recipient_id,
            returned = items.len(),
            total,
            "Loaded feed page"
        );

        Ok(Page::new(items, total.max(0) as u64))
    }

    async fn count_unread(&self, recipient_id: UserId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("Failed to count unread"))?;
        Ok(count.max(0) as u64)
    }

    async fn mark_read(&self, id: NotificationId) -> AppResult<NotificationRecord> {
        sqlx::query_as::<_, NotificationRecord>(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error("Failed to mark read"))?
        .ok_or_else(|| AppError::not_found("Activity not found"))
    }

    async fn mark_all_read(&self, recipient_id: UserId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(recipient_id)
        .execute(&self.pool)
        .await
        .map_err(store_error("Failed to mark all read"))?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: NotificationId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to delete notification"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Activity not found"));
        }
        Ok(())
    }

    async fn delete_by_opportunity(&self, opportunity_id: OpportunityId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE related_opportunity_id = $1")
            .bind(opportunity_id)
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to purge opportunity notifications"))?;
        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(store_error("Database health check failed"))
    }
}
