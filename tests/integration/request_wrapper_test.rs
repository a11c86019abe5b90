//! Token refresh and retry behavior of the authenticated request wrapper.

mod helpers;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use talentgate_core::error::ErrorKind;
use talentgate_core::types::PositionId;
use talentgate_entity::session::{Session, TokenPair};
use talentgate_entity::user::UserRole;

use helpers::{REFRESH_TOKEN, TestApp, jwt, profile_json, test_user};

#[tokio::test]
async fn test_valid_token_is_sent_without_refresh() {
    let token = jwt("valid", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    app.mock_refresh("unused", 0).await;
    app.mock_with_token(
        "GET",
        "/api/profile",
        &token,
        ResponseTemplate::new(200).set_body_json(profile_json(user_id)),
        1,
    )
    .await;

    let profile = app.client.profile().get().await.unwrap();
    assert_eq!(profile.user_id, user_id);
    assert_eq!(app.client.session().access_token().as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn test_expiring_token_is_refreshed_before_the_call() {
    let stale = jwt("stale", 2);
    let fresh = jwt("fresh", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &stale).await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    app.mock_refresh(&fresh, 1).await;
    app.mock_with_token("GET", "/api/profile", &stale, ResponseTemplate::new(200), 0)
        .await;
    app.mock_with_token(
        "GET",
        "/api/profile",
        &fresh,
        ResponseTemplate::new(200).set_body_json(profile_json(user_id)),
        1,
    )
    .await;

    app.client.profile().get().await.unwrap();

    let session = app.client.session().snapshot();
    assert_eq!(session.access_token(), Some(fresh.as_str()));
    assert_eq!(session.refresh_token(), Some(REFRESH_TOKEN));
    assert!(session.is_authenticated());

    let stored = app.store.stored().await.unwrap();
    assert_eq!(stored.access_token(), Some(fresh.as_str()));
}

#[tokio::test]
async fn test_already_expired_token_is_refreshed_before_the_call() {
    let expired = jwt("expired", -60);
    let fresh = jwt("fresh", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &expired).await;

    app.mock_refresh(&fresh, 1).await;
    app.mock_with_token(
        "GET",
        "/api/statistics/dashboard",
        &fresh,
        ResponseTemplate::new(200).set_body_json(json!({
            "totalPositions": 4,
            "openPositions": 2,
            "totalApplications": 9,
            "applicationsByStatus": { "SUBMITTED": 5, "OFFERED": 1 },
            "totalCandidates": 7,
        })),
        1,
    )
    .await;

    let stats = app.client.statistics().dashboard().await.unwrap();
    assert_eq!(stats.total_applications, 9);
}

#[tokio::test]
async fn test_opaque_token_is_never_refreshed_proactively() {
    let app = TestApp::signed_in(UserRole::Candidate, "opaque-token").await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    app.mock_refresh("unused", 0).await;
    app.mock_with_token(
        "GET",
        "/api/profile",
        "opaque-token",
        ResponseTemplate::new(200).set_body_json(profile_json(user_id)),
        1,
    )
    .await;

    app.client.profile().get().await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_response_refreshes_and_retries_once() {
    let old = jwt("old", 3600);
    let new = jwt("new", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &old).await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    app.mock_with_token("GET", "/api/profile", &old, ResponseTemplate::new(401), 1)
        .await;
    app.mock_refresh(&new, 1).await;
    app.mock_with_token(
        "GET",
        "/api/profile",
        &new,
        ResponseTemplate::new(200).set_body_json(profile_json(user_id)),
        1,
    )
    .await;

    let profile = app.client.profile().get().await.unwrap();
    assert_eq!(profile.user_id, user_id);
    assert_eq!(app.client.session().access_token().as_deref(), Some(new.as_str()));
}

#[tokio::test]
async fn test_forbidden_response_also_triggers_refresh() {
    let old = jwt("old", 3600);
    let new = jwt("new", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &old).await;

    app.mock_with_token("GET", "/api/applications/me", &old, ResponseTemplate::new(403), 1)
        .await;
    app.mock_refresh(&new, 1).await;
    app.mock_with_token(
        "GET",
        "/api/applications/me",
        &new,
        ResponseTemplate::new(200).set_body_json(json!([])),
        1,
    )
    .await;

    let applications = app.client.applications().mine().await.unwrap();
    assert!(applications.is_empty());
}

#[tokio::test]
async fn test_forbidden_passes_through_when_not_configured_for_refresh() {
    let token = jwt("valid", 3600);
    let session = Session::authenticated(
        TokenPair::new(&token, REFRESH_TOKEN),
        test_user(UserRole::Candidate),
    );
    let app = TestApp::build(session, |config| config.auth.refresh_on_status = vec![401]).await;

    app.mock_refresh("unused", 0).await;
    app.mock_with_token(
        "GET",
        "/api/statistics/dashboard",
        &token,
        ResponseTemplate::new(403).set_body_json(json!({
            "error": "FORBIDDEN",
            "message": "HR access required",
        })),
        1,
    )
    .await;

    let err = app.client.statistics().dashboard().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(err.message, "HR access required");
    assert!(app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_second_rejection_clears_the_session() {
    let old = jwt("old", 3600);
    let new = jwt("new", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &old).await;

    app.mock_with_token("GET", "/api/profile", &old, ResponseTemplate::new(401), 1)
        .await;
    app.mock_refresh(&new, 1).await;
    app.mock_with_token("GET", "/api/profile", &new, ResponseTemplate::new(401), 1)
        .await;

    let err = app.client.profile().get().await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(app.client.session().snapshot(), Session::anonymous());
    assert!(app.store.stored().await.is_none());
}

#[tokio::test]
async fn test_renewed_token_rejected_does_not_refresh_again() {
    let stale = jwt("stale", 1);
    let fresh = jwt("fresh", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &stale).await;

    app.mock_refresh(&fresh, 1).await;
    app.mock_with_token("GET", "/api/profile", &fresh, ResponseTemplate::new(401), 1)
        .await;

    let err = app.client.profile().get().await.unwrap_err();
    assert!(err.is_session_expired());
    assert!(!app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_rejected_refresh_clears_the_session() {
    let old = jwt("old", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &old).await;

    app.mock_with_token("GET", "/api/candidates", &old, ResponseTemplate::new(401), 1)
        .await;
    app.mock_refresh_failure(401, 1).await;

    let err = app
        .client
        .candidates()
        .list(Default::default())
        .await
        .unwrap_err();
    assert!(err.is_session_expired());
    assert!(app.client.session().access_token().is_none());
    assert!(app.store.stored().await.is_none());
}

#[tokio::test]
async fn test_unreachable_refresh_keeps_the_session() {
    let stale = jwt("stale", 2);
    let session = Session::authenticated(
        TokenPair::new(&stale, REFRESH_TOKEN),
        test_user(UserRole::Candidate),
    );
    let app = TestApp::build(session, |config| config.api.timeout_seconds = 1).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": "late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app.client.profile().get().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert!(!err.is_session_expired());

    let session = app.client.session().snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), Some(stale.as_str()));
}

#[tokio::test]
async fn test_concurrent_requests_share_one_refresh() {
    let stale = jwt("stale", 2);
    let fresh = jwt("fresh", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &stale).await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    app.mock_refresh(&fresh, 1).await;
    app.mock_with_token(
        "GET",
        "/api/profile",
        &fresh,
        ResponseTemplate::new(200).set_body_json(profile_json(user_id)),
        3,
    )
    .await;

    let profile = app.client.profile();
    let (a, b, c) = tokio::join!(profile.get(), profile.get(), profile.get());
    assert!(a.is_ok() && b.is_ok() && c.is_ok());
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let token = jwt("valid", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;
    let id = PositionId::new();

    app.mock_refresh("unused", 0).await;
    Mock::given(method("GET"))
        .and(path(format!("/api/positions/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NOT_FOUND",
            "message": "Position not found",
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app.client.positions().get(id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Position not found");
}

#[tokio::test]
async fn test_error_without_body_uses_status_reason() {
    let token = jwt("valid", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;

    app.mock_with_token("GET", "/api/profile", &token, ResponseTemplate::new(503), 1)
        .await;

    let err = app.client.profile().get().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    assert_eq!(err.message, "Service Unavailable");
    assert!(app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_signed_in_call_without_session_fails_fast() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let err = app.client.profile().get().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}
