//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use skillbridge_auth::JwtDecoder;
use skillbridge_core::config::AppConfig;
use skillbridge_database::NotificationStore;
use skillbridge_service::{FeedService, NotificationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Notification store (PostgreSQL or in-memory)
    pub store: Arc<dyn NotificationStore>,
    /// Bearer token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Records domain events as feed entries
    pub notification_service: Arc<NotificationService>,
    /// Per-user feed queries
    pub feed_service: Arc<FeedService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wires services around an opened store.
    pub fn new(config: AppConfig, store: Arc<dyn NotificationStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let notification_service = Arc::new(NotificationService::new(Arc::clone(&store)));
        let feed_service = Arc::new(FeedService::new(Arc::clone(&store), config.feed.clone()));

        Self {
            config: Arc::new(config),
            store,
            jwt_decoder,
            notification_service,
            feed_service,
            started_at: Instant::now(),
        }
    }
}
