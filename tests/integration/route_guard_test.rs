//! Navigation rules applied to the live session.

mod helpers;

use talentgate_auth::guard::{GuardDecision, RedirectReason};
use talentgate_core::error::ErrorKind;
use talentgate_entity::user::UserRole;
use wiremock::ResponseTemplate;

use helpers::{TestApp, jwt};

fn redirect(to: &str, reason: RedirectReason) -> GuardDecision {
    GuardDecision::Redirect {
        to: to.to_string(),
        reason,
    }
}

#[tokio::test]
async fn test_signed_out_visitor_reaches_public_routes_only() {
    let app = TestApp::new().await;

    for route in ["/", "/login", "/register", "/positions", "/positions/42"] {
        assert_eq!(app.client.navigate(route), GuardDecision::Allow, "{route}");
    }

    assert_eq!(
        app.client.navigate("/candidate/applications"),
        redirect(
            "/login?redirect=%2Fcandidate%2Fapplications",
            RedirectReason::Unauthenticated
        )
    );
    assert_eq!(
        app.client.navigate("/profile"),
        redirect("/login?redirect=%2Fprofile", RedirectReason::Unauthenticated)
    );
}

#[tokio::test]
async fn test_roles_are_kept_to_their_area() {
    let candidate = TestApp::signed_in(UserRole::Candidate, &jwt("ana", 3600)).await;
    assert!(candidate.client.navigate("/candidate/dashboard").is_allowed());
    assert!(candidate.client.navigate("/profile").is_allowed());
    assert_eq!(
        candidate.client.navigate("/hr/positions"),
        redirect("/candidate/dashboard", RedirectReason::Forbidden)
    );
    assert_eq!(
        candidate.client.navigate("/admin/users"),
        redirect("/candidate/dashboard", RedirectReason::Forbidden)
    );

    let hr = TestApp::signed_in(UserRole::Hr, &jwt("hana", 3600)).await;
    assert!(hr.client.navigate("/hr/positions/new").is_allowed());
    assert_eq!(
        hr.client.navigate("/candidate/tests"),
        redirect("/hr/dashboard", RedirectReason::Forbidden)
    );

    let admin = TestApp::signed_in(UserRole::Admin, &jwt("ada", 3600)).await;
    assert!(admin.client.navigate("/hr/statistics").is_allowed());
    assert!(admin.client.navigate("/admin/users").is_allowed());
}

#[tokio::test]
async fn test_signed_in_user_is_sent_home_from_login() {
    let app = TestApp::signed_in(UserRole::Hr, &jwt("hana", 3600)).await;

    let decision = app.client.navigate("/login");
    assert_eq!(
        decision,
        redirect("/hr/dashboard", RedirectReason::AlreadyAuthenticated)
    );
    assert_eq!(decision.into_result().unwrap_err().kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_forbidden_decision_maps_to_authorization_error() {
    let app = TestApp::signed_in(UserRole::Candidate, &jwt("ana", 3600)).await;

    let err = app
        .client
        .navigate("/hr/candidates")
        .into_result()
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert!(err.message.contains("/candidate/dashboard"));
}

#[tokio::test]
async fn test_failed_refresh_redirects_open_route_to_login() {
    let old = jwt("old", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &old).await;
    let mut watcher = app.client.watch_route("/hr/positions");
    assert_eq!(watcher.current(), "/hr/positions");

    app.mock_with_token(
        "GET",
        "/api/statistics/dashboard",
        &old,
        ResponseTemplate::new(401),
        1,
    )
    .await;
    app.mock_refresh_failure(401, 1).await;

    let err = app.client.statistics().dashboard().await.unwrap_err();
    assert!(err.is_session_expired());

    let decision = watcher.next_redirect().await.unwrap();
    assert_eq!(
        decision,
        redirect(
            "/login?redirect=%2Fhr%2Fpositions",
            RedirectReason::Unauthenticated
        )
    );
    assert_eq!(watcher.current(), "/login?redirect=%2Fhr%2Fpositions");
}

#[tokio::test]
async fn test_logout_moves_watcher_off_private_route() {
    let token = jwt("ana", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;
    let mut watcher = app.client.watch_route("/candidate/applications");

    app.mock_with_token(
        "POST",
        "/api/auth/logout",
        &token,
        ResponseTemplate::new(204),
        1,
    )
    .await;
    app.client.auth().logout().await.unwrap();

    let decision = watcher.next_redirect().await.unwrap();
    assert!(!decision.is_allowed());
    assert!(watcher.current().starts_with("/login?redirect="));
    assert!(watcher.navigate("/positions").is_allowed());
}

#[tokio::test]
async fn test_refreshed_token_keeps_route() {
    let stale = jwt("stale", 1);
    let fresh = jwt("fresh", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &stale).await;
    let watcher = app.client.watch_route("/candidate/applications");

    app.mock_refresh(&fresh, 1).await;
    app.mock_with_token(
        "GET",
        "/api/applications/me",
        &fresh,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([])),
        1,
    )
    .await;

    app.client.applications().mine().await.unwrap();
    assert_eq!(watcher.current(), "/candidate/applications");
    assert!(app.client.navigate("/candidate/applications").is_allowed());
}
