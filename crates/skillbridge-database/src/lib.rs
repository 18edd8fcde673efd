//! # skillbridge-database
//!
//! Persistence for notification records. The [`NotificationStore`] trait is
//! the seam the service layer depends on; it is implemented by a PostgreSQL
//! repository and by a process-local in-memory store.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use tracing::info;

use skillbridge_core::config::{DatabaseConfig, StoreBackend};
use skillbridge_core::result::AppResult;

pub use connection::DatabasePool;
pub use memory::MemoryNotificationStore;
pub use repositories::NotificationRepository;
pub use store::{FeedFilter, NotificationStore};

/// Open the store selected by `config.backend`.
///
/// For PostgreSQL this connects the pool and, when enabled, applies
/// pending migrations before returning.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn NotificationStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory notification store");
            Ok(Arc::new(MemoryNotificationStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                migration::run_migrations(pool.pool()).await?;
            }
            Ok(Arc::new(NotificationRepository::new(pool.into_pool())))
        }
    }
}
