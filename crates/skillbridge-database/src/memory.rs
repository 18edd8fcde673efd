//! Process-local notification store backed by a concurrent map.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use skillbridge_core::error::AppError;
use skillbridge_core::result::AppResult;
use skillbridge_core::types::pagination::{Page, PageRequest};
use skillbridge_core::types::{NotificationId, OpportunityId, UserId};
use skillbridge_entity::notification::{NewNotification, NotificationRecord};

use crate::store::{FeedFilter, NotificationStore};

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion sequence, used as the ordering tie-breaker.
    seq: u64,
    record: NotificationRecord,
}

/// In-memory notification store.
///
/// Records are lost on restart. Used for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationStore {
    records: Arc<DashMap<NotificationId, Entry>>,
    seq: Arc<AtomicU64>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching(&self, recipient_id: UserId, filter: FeedFilter) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .records
            .iter()
            .filter(|e| e.record.recipient_id == recipient_id)
            .filter(|e| !filter.unread_only || e.record.is_unread())
            .map(|e| e.value().clone())
            .collect();

        entries.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        entries
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, new: NewNotification) -> AppResult<NotificationRecord> {
        new.check()?;

        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        let record = NotificationRecord::from_new(NotificationId::new_time_ordered(), new, Utc::now());
        self.records.insert(
            record.id,
            Entry {
                seq,
                record: record.clone(),
            },
        );
        Ok(record)
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<NotificationRecord>> {
        Ok(self.records.get(&id).map(|e| e.record.clone()))
    }

    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
        filter: FeedFilter,
    ) -> AppResult<Page<NotificationRecord>> {
        let entries = self.matching(recipient_id, filter);
        let total = entries.len() as u64;

        let items: Vec<NotificationRecord> = entries
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .map(|e| e.record)
            .collect();

        debug!(
            recipient_id = %recipient_id,
            returned = items.len(),
            total,
            "Loaded feed page"
        );

        Ok(Page::new(items, total))
    }

    async fn count_unread(&self, recipient_id: UserId) -> AppResult<u64> {
        let count = self
            .records
            .iter()
            .filter(|e| e.record.recipient_id == recipient_id && e.record.is_unread())
            .count();
        Ok(count as u64)
    }

    async fn mark_read(&self, id: NotificationId) -> AppResult<NotificationRecord> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        entry.record.is_read = true;
        Ok(entry.record.clone())
    }

    async fn mark_all_read(&self, recipient_id: UserId) -> AppResult<u64> {
        let mut modified = 0u64;
        for mut entry in self.records.iter_mut() {
            if entry.record.recipient_id == recipient_id && entry.record.is_unread() {
                entry.record.is_read = true;
                modified += 1;
            }
        }
        Ok(modified)
    }

    async fn delete(&self, id: NotificationId) -> AppResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Activity not found"))
    }

    async fn delete_by_opportunity(&self, opportunity_id: OpportunityId) -> AppResult<u64> {
        let before = self.records.len();
        self.records
            .retain(|_, e| e.record.related_opportunity_id != Some(opportunity_id));
        Ok(before.saturating_sub(self.records.len()) as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
