//! Response DTOs.

use serde::{Deserialize, Serialize};

use skillbridge_entity::notification::NotificationRecord;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of `GET /api/activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of activities in this page.
    pub count: usize,
    /// Number of activities matching the filter.
    pub total: u64,
    /// Unread activities, regardless of filter.
    #[serde(rename = "unreadCount")]
    pub unread_count: u64,
    /// The page, newest first.
    pub activities: Vec<NotificationRecord>,
}

/// Body of `GET /api/activities/unread-count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Always `true`.
    pub success: bool,
    /// Unread activities.
    #[serde(rename = "unreadCount")]
    pub unread_count: u64,
}

/// Body returned after a single activity was updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
    /// The updated activity.
    pub activity: NotificationRecord,
}

/// Body of `PATCH /api/activities/read-all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllReadResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
    /// Records changed by this call.
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful message response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Whether the store answered its health check.
    pub store: String,
}
