//! Activity feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::request::FeedQuery;
use crate::dto::response::{
    ActivityResponse, FeedResponse, MarkAllReadResponse, MessageResponse, UnreadCountResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_activity_id};
use crate::state::AppState;

/// GET /api/activities
pub async fn list_activities(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, ApiError> {
    let params = query.parse()?;
    let page = state
        .feed_service
        .get_feed(&auth, params.limit, params.skip, params.unread_only)
        .await?;

    Ok(Json(FeedResponse {
        success: true,
        count: page.items.len(),
        total: page.total,
        unread_count: page.unread_count,
        activities: page.items,
    }))
}

/// GET /api/activities/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread_count = state.feed_service.unread_count(&auth).await?;
    Ok(Json(UnreadCountResponse {
        success: true,
        unread_count,
    }))
}

/// PATCH /api/activities/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let id = parse_activity_id(&id)?;
    let activity = state.feed_service.mark_read(&auth, id).await?;
    Ok(Json(ActivityResponse {
        success: true,
        message: "Activity marked as read".to_string(),
        activity,
    }))
}

/// PATCH /api/activities/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    let modified_count = state.feed_service.mark_all_read(&auth).await?;
    Ok(Json(MarkAllReadResponse {
        success: true,
        message: "All activities marked as read".to_string(),
        modified_count,
    }))
}

/// DELETE /api/activities/{id}
pub async fn delete_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_activity_id(&id)?;
    state.feed_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::ok("Activity deleted successfully")))
}
