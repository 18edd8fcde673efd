//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use skillbridge_api::AppState;
use skillbridge_api::router::build_router;
use skillbridge_auth::JwtEncoder;
use skillbridge_core::config::{AppConfig, StoreBackend};
use skillbridge_core::error::AppError;
use skillbridge_core::result::AppResult;
use skillbridge_core::types::pagination::{Page, PageRequest};
use skillbridge_core::types::{NotificationId, OpportunityId, UserId};
use skillbridge_database::{FeedFilter, MemoryNotificationStore, NotificationStore};
use skillbridge_entity::notification::{NewNotification, NotificationRecord, RelatedRefs};
use skillbridge_service::NotificationEvent;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding records through the services
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by the in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryNotificationStore::new()))
    }

    /// Create a test application over an explicit store
    pub fn with_store(store: Arc<dyn NotificationStore>) -> Self {
        let config = test_config();
        let state = AppState::new(config.clone(), store);
        let router = build_router(state.clone());

        Self {
            router,
            state,
            config,
        }
    }

    /// Issue a bearer token for `user`
    pub fn token_for(&self, user: UserId) -> String {
        let (token, _) = JwtEncoder::new(&self.config.auth)
            .issue(user)
            .expect("Failed to issue token");
        token
    }

    /// Record an event for `recipient` and return the stored record
    pub async fn seed(&self, recipient: UserId, kind: &str) -> NotificationRecord {
        self.seed_with(recipient, kind, RelatedRefs::default()).await
    }

    /// Record an event with references for `recipient`
    pub async fn seed_with(
        &self,
        recipient: UserId,
        kind: &str,
        refs: RelatedRefs,
    ) -> NotificationRecord {
        self.state
            .notification_service
            .notify(NotificationEvent::new(
                recipient,
                UserId::new(),
                "Green Org",
                kind,
                refs,
            ))
            .await
            .expect("Failed to seed notification")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, token: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A store whose backend is permanently down
#[derive(Debug)]
pub struct UnavailableStore;

fn down<T>() -> AppResult<T> {
    Err(AppError::store_unavailable("connection refused by 10.0.0.5:5432"))
}

#[async_trait]
impl NotificationStore for UnavailableStore {
    async fn create(&self, _new: NewNotification) -> AppResult<NotificationRecord> {
        down()
    }

    async fn find_by_id(&self, _id: NotificationId) -> AppResult<Option<NotificationRecord>> {
        down()
    }

    async fn find_by_recipient(
        &self,
        _recipient_id: UserId,
        _page: PageRequest,
        _filter: FeedFilter,
    ) -> AppResult<Page<NotificationRecord>> {
        down()
    }

    async fn count_unread(&self, _recipient_id: UserId) -> AppResult<u64> {
        down()
    }

    async fn mark_read(&self, _id: NotificationId) -> AppResult<NotificationRecord> {
        down()
    }

    async fn mark_all_read(&self, _recipient_id: UserId) -> AppResult<u64> {
        down()
    }

    async fn delete(&self, _id: NotificationId) -> AppResult<()> {
        down()
    }

    async fn delete_by_opportunity(&self, _opportunity_id: OpportunityId) -> AppResult<u64> {
        down()
    }

    async fn health_check(&self) -> AppResult<bool> {
        down()
    }
}
