//! Integration tests for the activity feed HTTP API.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;

use skillbridge_core::types::{NotificationId, OpportunityId, UserId};
use skillbridge_entity::notification::RelatedRefs;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/activities", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let mut token = app.token_for(UserId::new());
    token.push('x');

    let response = app
        .request("GET", "/api/activities/unread-count", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "ok");
}

#[tokio::test]
async fn test_feed_shape_and_counts() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);

    let opportunity = OpportunityId::new();
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(app.seed(user, "message_received").await.id);
    }
    let posted = app
        .seed_with(
            user,
            "opportunity_posted",
            RelatedRefs::opportunity(opportunity, "Clean Park"),
        )
        .await;
    app.seed(UserId::new(), "message_received").await;

    app.request(
        "PATCH",
        &format!("/api/activities/{}/read", ids[0]),
        Some(&token),
    )
    .await;
    app.request(
        "PATCH",
        &format!("/api/activities/{}/read", ids[1]),
        Some(&token),
    )
    .await;

    let response = app.request("GET", "/api/activities", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["count"], 5);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["unreadCount"], 3);

    let first = &response.body["activities"][0];
    assert_eq!(first["id"], posted.id.to_string());
    assert_eq!(first["event_kind"], "opportunity_posted");
    assert_eq!(first["status_label"], "Posted");
    assert_eq!(first["icon_kind"], "plus");
    assert_eq!(first["actor_display_name"], "Green Org");
    assert_eq!(first["related_opportunity_title"], "Clean Park");
    assert_eq!(first["is_read"], false);

    let unread = app
        .request("GET", "/api/activities?unread_only=true", Some(&token))
        .await;
    assert_eq!(unread.body["count"], 3);
    assert_eq!(unread.body["total"], 3);
}

#[tokio::test]
async fn test_feed_pagination_uses_limit_and_skip() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(app.seed(user, "application_viewed").await.id);
    }

    let response = app
        .request("GET", "/api/activities?limit=2&skip=1", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 2);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["activities"][0]["id"], ids[3].to_string());
    assert_eq!(response.body["activities"][1]["id"], ids[2].to_string());
}

#[tokio::test]
async fn test_skip_past_i64_range_is_an_empty_page() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);
    app.seed(user, "message_received").await;

    let response = app
        .request(
            "GET",
            "/api/activities?skip=9223372036854775808",
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 0);
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn test_bad_limit_is_a_validation_error() {
    let app = helpers::TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app
        .request("GET", "/api/activities?limit=lots", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_mark_read_returns_the_activity() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);
    let record = app.seed(user, "application_accepted").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/activities/{}/read", record.id),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Activity marked as read");
    assert_eq!(response.body["activity"]["is_read"], true);
    assert_eq!(response.body["activity"]["status_label"], "Accepted");

    let count = app
        .request("GET", "/api/activities/unread-count", Some(&token))
        .await;
    assert_eq!(count.body["unreadCount"], 0);
}

#[tokio::test]
async fn test_non_owner_patch_is_forbidden() {
    let app = helpers::TestApp::new();
    let owner = UserId::new();
    let record = app.seed(owner, "message_received").await;
    let intruder = app.token_for(UserId::new());

    let response = app
        .request(
            "PATCH",
            &format!("/api/activities/{}/read", record.id),
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/activities/{}", record.id),
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let owner_token = app.token_for(owner);
    let count = app
        .request("GET", "/api/activities/unread-count", Some(&owner_token))
        .await;
    assert_eq!(count.body["unreadCount"], 1);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let app = helpers::TestApp::new();
    let token = app.token_for(UserId::new());

    let unknown = app
        .request(
            "PATCH",
            &format!("/api/activities/{}/read", NotificationId::new()),
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["message"], "Activity not found");

    let malformed = app
        .request("DELETE", "/api/activities/not-an-id", Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_all_then_again_modifies_nothing() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);
    app.seed(user, "application_received").await;
    app.seed(user, "application_rejected_by_ngo").await;

    let first = app
        .request("PATCH", "/api/activities/read-all", Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "All activities marked as read");
    assert_eq!(first.body["modifiedCount"], 2);

    let second = app
        .request("PATCH", "/api/activities/read-all", Some(&token))
        .await;
    assert_eq!(second.body["modifiedCount"], 0);
}

#[tokio::test]
async fn test_delete_then_mark_read_is_not_found() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    let token = app.token_for(user);
    let record = app.seed(user, "message_received").await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/activities/{}", record.id),
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Activity deleted successfully");

    let again = app
        .request(
            "PATCH",
            &format!("/api/activities/{}/read", record.id),
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_outage_is_a_generic_503() {
    let app = helpers::TestApp::with_store(Arc::new(helpers::UnavailableStore));
    let token = app.token_for(UserId::new());

    let response = app.request("GET", "/api/activities", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "STORE_UNAVAILABLE");
    let message = response.body["message"].as_str().unwrap_or_default();
    assert!(!message.contains("10.0.0.5"));

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["store"], "unavailable");
}
