//! API integration tests
//!
//! Each test spawns its own server on the in-process store, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use hourboard_core::Role;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "healthy");
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_first_login_provisions_member() {
    let server = TestServer::start().await.unwrap();
    let uid = unique_uid("newcomer");
    let token = server.token_for(&uid).unwrap();

    let response = server.post_empty_auth("/session", &token).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(session.user.id, uid);
    assert_eq!(session.user.role, "member");
    assert_eq!(session.user.hours, 0);
    assert_eq!(session.view, "member");
    assert_eq!(session.available_views, vec!["member".to_string()]);

    // Logging in again keeps the same record
    let response = server.post_empty_auth("/session", &token).await.unwrap();
    let again: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(again.user.id, uid);
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/leaderboard").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Hour Addition Tests
// ============================================================================

#[tokio::test]
async fn test_advisor_adds_hours() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 10).await.unwrap();

    let response = server
        .post_auth("/hours", &advisor, &AddHoursRequest::new("u1", 5))
        .await
        .unwrap();
    let added: AddHoursResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(added.total_hours, 15);
    assert_eq!(added.event.user_id, "u1");
    assert_eq!(added.event.hours, Some(5));
    assert_eq!(added.event.date.as_deref(), Some("2025-03-01"));

    let response = server.get_auth("/events?userId=u1", &advisor).await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Food drive");
}

#[tokio::test]
async fn test_non_positive_hours_write_nothing() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 10).await.unwrap();

    for hours in [json!(0), json!(-1), json!("abc")] {
        let response = server
            .post_auth("/hours", &advisor, &AddHoursRequest::new("u1", hours))
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_HOURS");
    }

    let response = server.get_auth("/events?userId=u1", &advisor).await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());

    let response = server.get_auth("/leaderboard", &advisor).await.unwrap();
    let board: Vec<LeaderboardEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let u1 = board.iter().find(|e| e.id == "u1").unwrap();
    assert_eq!(u1.hours, 10);
}

#[tokio::test]
async fn test_unknown_tag_rejected() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 0).await.unwrap();

    let response = server
        .post_auth(
            "/hours",
            &advisor,
            &AddHoursRequest::new("u1", 2).tagged("Sports"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TAG");
}

#[tokio::test]
async fn test_member_cannot_add_hours() {
    let server = TestServer::start().await.unwrap();
    let member = server.seed_user("m1", Role::Member, 0).await.unwrap();

    let response = server
        .post_auth("/hours", &member, &AddHoursRequest::new("m1", 3))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "MISSING_CAPABILITY");
}

#[tokio::test]
async fn test_legacy_update_mode_adds_hours() {
    let config = test_config(&[("ATOMIC_UPDATES", "false")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 10).await.unwrap();

    let response = server
        .post_auth("/hours", &advisor, &AddHoursRequest::new("u1", "4"))
        .await
        .unwrap();
    let added: AddHoursResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(added.total_hours, 14);
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_sorted_descending() {
    let server = TestServer::start().await.unwrap();
    let member = server.seed_user("a", Role::Member, 5).await.unwrap();
    server.seed_user("b", Role::Member, 12).await.unwrap();
    server.seed_user("c", Role::Officer, 8).await.unwrap();

    let response = server.get_auth("/leaderboard", &member).await.unwrap();
    let board: Vec<LeaderboardEntry> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = board.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
    assert_eq!(board[0].rank, 1);
}

#[tokio::test]
async fn test_member_dashboard_scopes() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    let member = server.seed_user("m1", Role::Member, 0).await.unwrap();
    let officer = server.seed_user("o1", Role::Officer, 0).await.unwrap();

    for request in [
        AddHoursRequest::new("m1", 3),
        AddHoursRequest::new("m1", 2).tagged("Non-NHS"),
    ] {
        let response = server.post_auth("/hours", &advisor, &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth("/dashboard", &member).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["totalHours"], 5);
    assert_eq!(body["hoursByTag"]["NHS"], 3);
    assert_eq!(body["hoursByTag"]["Non-NHS"], 2);
    assert_eq!(body["primarySplit"]["matching"], 3);
    assert_eq!(body["primarySplit"]["nonMatching"], 2);

    // Filters narrow the breakdown, not the total
    let response = server
        .get_auth("/dashboard?tag=NHS", &member)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
    assert_eq!(body["totalHours"], 5);

    // Members cannot look at someone else; officers can
    let response = server
        .get_auth("/dashboard?userId=o1", &member)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth("/dashboard?userId=m1", &officer)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["id"], "m1");
}

// ============================================================================
// Archival & History Tests
// ============================================================================

#[tokio::test]
async fn test_archive_school_year() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 0).await.unwrap();
    server.seed_user("u2", Role::Member, 0).await.unwrap();

    for uid in ["u1", "u2"] {
        let response = server
            .post_auth("/hours", &advisor, &AddHoursRequest::new(uid, 4))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .post_auth("/archive", &advisor, &ArchiveRequest::new("2024-2025"))
        .await
        .unwrap();
    let run: ArchivalResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(run.school_year, "2024-2025");
    assert_eq!(run.events_archived, 2);
    assert_eq!(run.status, "completed");

    let response = server.get_auth("/events", &advisor).await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());

    let response = server
        .get_auth("/history?year=2024-2025", &advisor)
        .await
        .unwrap();
    let archived: Vec<HistoricalEventResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(archived.len(), 2);
    assert!(archived.iter().all(|e| e.school_year == "2024-2025"));

    let response = server.get_auth("/leaderboard", &advisor).await.unwrap();
    let board: Vec<LeaderboardEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(board.iter().all(|e| e.hours == 0));

    // The same label cannot be archived twice
    let response = server
        .post_auth("/archive", &advisor, &ArchiveRequest::new("2024-2025"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ARCHIVE_ALREADY_COMPLETED");
}

#[tokio::test]
async fn test_archive_requires_label() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();

    let response = server
        .post_auth("/archive", &advisor, &ArchiveRequest::new("  "))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_SCHOOL_YEAR");
}

#[tokio::test]
async fn test_delete_history_for_year() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("u1", Role::Member, 0).await.unwrap();

    let response = server
        .post_auth("/hours", &advisor, &AddHoursRequest::new("u1", 1))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth("/archive", &advisor, &ArchiveRequest::new("2023-2024"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth("/history?year=2023-2024", &advisor)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], 1);

    let response = server.get_auth("/history", &advisor).await.unwrap();
    let archived: Vec<HistoricalEventResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(archived.is_empty());
}

// ============================================================================
// Advisor Request Tests
// ============================================================================

#[tokio::test]
async fn test_request_approval_flow() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    let officer = server.seed_user("o1", Role::Officer, 0).await.unwrap();

    let response = server
        .post_empty_auth("/advisor-requests", &officer)
        .await
        .unwrap();
    let request: AdvisorRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.user_id, "o1");
    assert_eq!(request.status, "pending");

    let response = server
        .post_empty_auth("/advisor-requests", &officer)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PENDING_REQUEST_EXISTS");

    let response = server.get_auth("/advisor-requests", &advisor).await.unwrap();
    let pending: Vec<AdvisorRequestResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);

    let response = server
        .post_empty_auth(&format!("/advisor-requests/{}/approve", request.id), &advisor)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/advisor-requests", &advisor).await.unwrap();
    let pending: Vec<AdvisorRequestResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());

    // The officer now holds advisor capabilities
    let response = server.post_empty_auth("/session", &officer).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(session.user.temporary_advisor);
    assert!(session.capabilities.iter().any(|c| c == "ADD_HOURS"));
}

#[tokio::test]
async fn test_members_cannot_request_access() {
    let server = TestServer::start().await.unwrap();
    let member = server.seed_user("m1", Role::Member, 0).await.unwrap();

    let response = server
        .post_empty_auth("/advisor-requests", &member)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_toggle_temporary_advisor_detects_stale_value() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("o1", Role::Officer, 0).await.unwrap();

    let response = server
        .post_auth(
            "/users/o1/temporary-advisor",
            &advisor,
            &json!({ "currentValue": false }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(user.temporary_advisor);

    // A second panel still showing the old value loses
    let response = server
        .post_auth(
            "/users/o1/temporary-advisor",
            &advisor,
            &json!({ "currentValue": false }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "STALE_TEMPORARY_ADVISOR_FLAG");
}

// ============================================================================
// User Management Tests
// ============================================================================

#[tokio::test]
async fn test_change_role_and_delete_user() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();
    server.seed_user("m1", Role::Member, 0).await.unwrap();

    let response = server
        .patch_auth("/users/m1/role", &advisor, &json!({ "role": "officer" }))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.role, "officer");

    let response = server.get_auth("/users/officers", &advisor).await.unwrap();
    let officers: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(officers.iter().any(|u| u.id == "m1"));

    let response = server.delete_auth("/users/m1", &advisor).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth("/users/m1", &advisor).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_user_validates_email() {
    let server = TestServer::start().await.unwrap();
    let advisor = server.seed_user("advisor", Role::Advisor, 0).await.unwrap();

    let response = server
        .post_auth(
            "/users",
            &advisor,
            &json!({ "name": "Nora", "email": "not-an-email" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_auth(
            "/users",
            &advisor,
            &json!({ "name": "Nora", "email": "nora@example.com" }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.role, "member");
}
