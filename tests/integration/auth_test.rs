//! Sign-in, registration and sign-out flows.

mod helpers;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use talentgate_auth::session::{FileSessionStore, SessionStore};
use talentgate_client::TalentGateClient;
use talentgate_core::error::ErrorKind;
use talentgate_entity::user::{LoginRequest, RegisterRequest, UserRole};

use helpers::{REFRESH_TOKEN, TestApp, bearer, jwt, test_user};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ana@example.com".to_string(),
        password: "correct horse".to_string(),
    }
}

async fn mock_login(app: &TestApp, access: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "password": "correct horse",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": access,
            "refreshToken": REFRESH_TOKEN,
        })))
        .expect(1)
        .mount(&app.server)
        .await;
}

#[tokio::test]
async fn test_login_establishes_session() {
    let app = TestApp::new().await;
    let access = jwt("ana", 3600);
    let user = test_user(UserRole::Candidate);

    mock_login(&app, &access).await;
    app.mock_with_token(
        "GET",
        "/api/auth/me",
        &access,
        ResponseTemplate::new(200).set_body_json(&user),
        1,
    )
    .await;

    let signed_in = app.client.auth().login(&credentials()).await.unwrap();
    assert_eq!(signed_in, user);

    let session = app.client.session().snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), Some(access.as_str()));
    assert_eq!(session.refresh_token(), Some(REFRESH_TOKEN));
    assert_eq!(session.role(), Some(UserRole::Candidate));

    let stored = app.store.stored().await.unwrap();
    assert_eq!(stored, session);
}

#[tokio::test]
async fn test_login_with_bad_credentials_keeps_signed_out() {
    let app = TestApp::new().await;

    app.mock_refresh("unused", 0).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "INVALID_CREDENTIALS",
            "message": "Invalid email or password",
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app.client.auth().login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Invalid email or password");
    assert!(!app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_login_rejects_malformed_email_locally() {
    let app = TestApp::new().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let err = app
        .client
        .auth()
        .login(&LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("email"));
}

#[tokio::test]
async fn test_failed_identity_lookup_discards_tokens() {
    let app = TestApp::new().await;
    let access = jwt("ana", 3600);

    mock_login(&app, &access).await;
    app.mock_with_token(
        "GET",
        "/api/auth/me",
        &access,
        ResponseTemplate::new(500).set_body_json(json!({ "message": "Database unavailable" })),
        1,
    )
    .await;

    let err = app.client.auth().login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(app.client.session().access_token(), None);
    assert!(app.store.stored().await.is_none());
}

#[tokio::test]
async fn test_register_then_signs_in() {
    let app = TestApp::new().await;
    let access = jwt("ana", 3600);
    let user = test_user(UserRole::Candidate);

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "password": "correct horse",
            "firstName": "Ana",
            "lastName": "Ruiz",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.server)
        .await;
    mock_login(&app, &access).await;
    app.mock_with_token(
        "GET",
        "/api/auth/me",
        &access,
        ResponseTemplate::new(200).set_body_json(&user),
        1,
    )
    .await;

    let registered = app
        .client
        .auth()
        .register(&RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "correct horse".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(registered.role, UserRole::Candidate);
    assert!(app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_register_conflict_is_reported() {
    let app = TestApp::new().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "EMAIL_TAKEN",
            "message": "An account with this email already exists",
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app
        .client
        .auth()
        .register(&RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "correct horse".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(!app.client.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_notifies_server_and_clears_session() {
    let access = jwt("ana", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &access).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", bearer(&access).as_str()))
        .and(body_json(json!({ "refreshToken": REFRESH_TOKEN })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.auth().logout().await.unwrap();
    assert!(!app.client.session().is_authenticated());
    assert!(app.store.stored().await.is_none());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() {
    let access = jwt("ana", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &access).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.auth().logout().await.unwrap();
    assert!(app.client.session().access_token().is_none());
}

#[tokio::test]
async fn test_current_user_refreshes_stored_identity() {
    let access = jwt("hana", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &access).await;
    let mut promoted = app.client.session().snapshot().user.unwrap();
    promoted.role = UserRole::Admin;

    app.mock_with_token(
        "GET",
        "/api/auth/me",
        &access,
        ResponseTemplate::new(200).set_body_json(&promoted),
        1,
    )
    .await;

    let user = app.client.auth().current_user().await.unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(app.client.session().snapshot().role(), Some(UserRole::Admin));
}

#[tokio::test]
async fn test_file_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("session.json");
    let app = TestApp::new().await;
    let access = jwt("ana", 3600);
    let user = test_user(UserRole::Candidate);

    mock_login(&app, &access).await;
    app.mock_with_token(
        "GET",
        "/api/auth/me",
        &access,
        ResponseTemplate::new(200).set_body_json(&user),
        1,
    )
    .await;

    let first = TalentGateClient::with_store(&app.config, Arc::new(FileSessionStore::new(&file)))
        .await
        .unwrap();
    first.auth().login(&credentials()).await.unwrap();

    let second = TalentGateClient::with_store(&app.config, Arc::new(FileSessionStore::new(&file)))
        .await
        .unwrap();
    let restored = second.session().snapshot();
    assert!(restored.is_authenticated());
    assert_eq!(restored.user, Some(user));
    assert_eq!(restored.access_token(), Some(access.as_str()));

    second.session().clear().await.unwrap();
    let reloaded = FileSessionStore::new(&file).load().await.unwrap();
    assert!(!reloaded.is_authenticated());
}
