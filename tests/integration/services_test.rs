//! API services: endpoints, query strings, bodies and local validation.

mod helpers;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use talentgate_core::error::ErrorKind;
use talentgate_core::types::{
    ApplicationId, PageRequest, PositionId, QuestionId, TestId, UserId,
};
use talentgate_entity::application::{ApplicationStatus, SubmitApplication, UpdateApplicationStatus};
use talentgate_entity::evaluation::{Answer, AssignTest, TestSubmission};
use talentgate_entity::position::{
    CreatePosition, EmploymentType, PositionFilter, PositionStatus, UpdatePosition,
};
use talentgate_entity::user::{UpdateProfile, UserRole};

use helpers::{TestApp, application_json, bearer, jwt, position_json, profile_json};

/// Fails the test on drop if any request reaches the server.
async fn forbid_requests(app: &TestApp) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.server)
        .await;
}

#[tokio::test]
async fn test_anonymous_position_listing_sends_filters_without_token() {
    let app = TestApp::new().await;
    let id = PositionId::new().to_string();

    Mock::given(method("GET"))
        .and(path("/api/positions"))
        .and(query_param("search", "rust"))
        .and(query_param("status", "OPEN"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [position_json(&id, "OPEN")],
            "page": 2,
            "pageSize": 10,
            "totalItems": 11,
            "totalPages": 2,
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let filter = PositionFilter {
        search: Some(" rust ".to_string()),
        status: Some(PositionStatus::Open),
        department: None,
    };
    let page = app
        .client
        .positions()
        .list(&filter, PageRequest::new(2, 10))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].employment_type, EmploymentType::FullTime);
    assert_eq!(page.total_items, 11);

    let requests = app.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_position_detail_carries_token_when_signed_in() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;
    let id = PositionId::new();

    app.mock_with_token(
        "GET",
        &format!("/api/positions/{id}"),
        &token,
        ResponseTemplate::new(200).set_body_json(position_json(&id.to_string(), "DRAFT")),
        1,
    )
    .await;

    let position = app.client.positions().get(id).await.unwrap();
    assert_eq!(position.status, PositionStatus::Draft);
    assert_eq!(position.salary_range(), "60000 - 80000");
}

#[tokio::test]
async fn test_create_position_posts_camel_case_form() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;
    let id = PositionId::new().to_string();

    Mock::given(method("POST"))
        .and(path("/api/positions"))
        .and(header("authorization", bearer(&token).as_str()))
        .and(body_json(json!({
            "title": "Platform Engineer",
            "department": "Engineering",
            "location": "Remote",
            "employmentType": "FULL_TIME",
            "description": "Build and run the platform that powers hiring.",
            "requirements": ["Rust", "Kubernetes"],
            "salaryMin": 60000,
            "salaryMax": 80000,
            "status": "OPEN",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(position_json(&id, "OPEN")))
        .expect(1)
        .mount(&app.server)
        .await;

    let created = app
        .client
        .positions()
        .create(&CreatePosition {
            title: "Platform Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            description: "Build and run the platform that powers hiring.".to_string(),
            requirements: vec!["Rust".to_string(), "Kubernetes".to_string()],
            salary_min: Some(60_000),
            salary_max: Some(80_000),
            status: PositionStatus::Open,
        })
        .await
        .unwrap();
    assert_eq!(created.id.to_string(), id);
}

#[tokio::test]
async fn test_invalid_position_update_never_reaches_server() {
    let app = TestApp::signed_in(UserRole::Hr, &jwt("hr", 3600)).await;
    forbid_requests(&app).await;

    let err = app
        .client
        .positions()
        .update(
            PositionId::new(),
            &UpdatePosition {
                salary_min: Some(90_000),
                salary_max: Some(50_000),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("salary_min must not exceed salary_max"));
}

#[tokio::test]
async fn test_position_status_and_delete() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;
    let id = PositionId::new();

    Mock::given(method("PATCH"))
        .and(path(format!("/api/positions/{id}/status")))
        .and(body_json(json!({ "status": "CLOSED" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(position_json(&id.to_string(), "CLOSED")),
        )
        .expect(1)
        .mount(&app.server)
        .await;
    app.mock_with_token(
        "DELETE",
        &format!("/api/positions/{id}"),
        &token,
        ResponseTemplate::new(204),
        1,
    )
    .await;

    let closed = app
        .client
        .positions()
        .set_status(id, PositionStatus::Closed)
        .await
        .unwrap();
    assert!(!closed.status.accepts_applications());
    app.client.positions().delete(id).await.unwrap();
}

#[tokio::test]
async fn test_empty_profile_update_is_rejected() {
    let app = TestApp::signed_in(UserRole::Candidate, &jwt("ana", 3600)).await;
    forbid_requests(&app).await;

    let err = app
        .client
        .profile()
        .update(&UpdateProfile::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_profile_update_sends_only_changed_fields() {
    let token = jwt("ana", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;
    let user_id = app.client.session().snapshot().user.unwrap().id;

    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(body_json(json!({ "headline": "Backend engineer" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(user_id)))
        .expect(1)
        .mount(&app.server)
        .await;

    let profile = app
        .client
        .profile()
        .update(&UpdateProfile {
            headline: Some("Backend engineer".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(profile.skills, vec!["rust", "sql"]);
}

#[tokio::test]
async fn test_submit_and_withdraw_application() {
    let token = jwt("ana", 3600);
    let app = TestApp::signed_in(UserRole::Candidate, &token).await;
    let position_id = PositionId::new();
    let application_id = ApplicationId::new();

    Mock::given(method("POST"))
        .and(path("/api/applications"))
        .and(body_json(json!({
            "positionId": position_id,
            "coverLetter": "I would love to join.",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(application_json(
            &application_id.to_string(),
            &position_id.to_string(),
            "SUBMITTED",
        )))
        .expect(1)
        .mount(&app.server)
        .await;
    app.mock_with_token(
        "POST",
        &format!("/api/applications/{application_id}/withdraw"),
        &token,
        ResponseTemplate::new(200).set_body_json(application_json(
            &application_id.to_string(),
            &position_id.to_string(),
            "WITHDRAWN",
        )),
        1,
    )
    .await;

    let submitted = app
        .client
        .applications()
        .submit(&SubmitApplication {
            position_id,
            cover_letter: Some("I would love to join.".to_string()),
            resume_url: None,
        })
        .await
        .unwrap();
    assert_eq!(submitted.status, ApplicationStatus::Submitted);

    let withdrawn = app.client.applications().withdraw(application_id).await.unwrap();
    assert!(withdrawn.status.is_terminal());
}

#[tokio::test]
async fn test_duplicate_application_is_a_conflict() {
    let app = TestApp::signed_in(UserRole::Candidate, &jwt("ana", 3600)).await;

    Mock::given(method("POST"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "DUPLICATE_APPLICATION",
            "message": "You already applied to this position",
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app
        .client
        .applications()
        .submit(&SubmitApplication {
            position_id: PositionId::new(),
            cover_letter: None,
            resume_url: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "You already applied to this position");
}

#[tokio::test]
async fn test_hr_moves_application_through_pipeline() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;
    let position_id = PositionId::new();
    let application_id = ApplicationId::new();

    app.mock_with_token(
        "GET",
        &format!("/api/positions/{position_id}/applications"),
        &token,
        ResponseTemplate::new(200).set_body_json(json!([application_json(
            &application_id.to_string(),
            &position_id.to_string(),
            "SUBMITTED",
        )])),
        1,
    )
    .await;
    Mock::given(method("PATCH"))
        .and(path(format!("/api/applications/{application_id}/status")))
        .and(body_json(json!({ "status": "INTERVIEW", "note": "See you Monday" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(application_json(
            &application_id.to_string(),
            &position_id.to_string(),
            "INTERVIEW",
        )))
        .expect(1)
        .mount(&app.server)
        .await;

    let received = app
        .client
        .applications()
        .for_position(position_id)
        .await
        .unwrap();
    assert_eq!(received.len(), 1);

    let updated = app
        .client
        .applications()
        .update_status(
            application_id,
            &UpdateApplicationStatus {
                status: ApplicationStatus::Interview,
                note: Some("See you Monday".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Interview);
}

#[tokio::test]
async fn test_empty_test_submission_is_rejected() {
    let app = TestApp::signed_in(UserRole::Candidate, &jwt("ana", 3600)).await;
    forbid_requests(&app).await;

    let err = app
        .client
        .evaluations()
        .submit(TestId::new(), &TestSubmission::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_assign_and_submit_test() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;
    let test_id = TestId::new();
    let candidate_id = UserId::new();
    let question_id = QuestionId::new();

    Mock::given(method("POST"))
        .and(path(format!("/api/tests/{test_id}/assignments")))
        .and(body_json(json!({ "candidateId": candidate_id })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "5b7e0c1a-4d7e-4a57-9f3a-0e9b2f6d1c11",
            "testId": test_id,
            "candidateId": candidate_id,
            "status": "PENDING",
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/tests/{test_id}/submissions")))
        .and(body_json(json!({
            "answers": [{ "questionId": question_id, "selectedOptions": [1] }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "8a4d3e2f-1b0c-4d5e-8f7a-6b5c4d3e2f10",
            "testId": test_id,
            "candidateId": candidate_id,
            "score": 3,
            "maxScore": 4,
            "passed": true,
            "submittedAt": "2026-03-01T10:00:00Z",
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let assignment = app
        .client
        .evaluations()
        .assign(
            test_id,
            &AssignTest {
                candidate_id,
                application_id: None,
                due_at: None,
            },
        )
        .await
        .unwrap();
    assert!(assignment.is_open(chrono::Utc::now()));

    let result = app
        .client
        .evaluations()
        .submit(
            test_id,
            &TestSubmission {
                answers: vec![Answer {
                    question_id,
                    selected_options: vec![1],
                    text: None,
                }],
            },
        )
        .await
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.percentage(), 75.0);
}

#[tokio::test]
async fn test_candidate_listing_is_paginated() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Hr, &token).await;

    Mock::given(method("GET"))
        .and(path("/api/candidates"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": UserId::new(),
                "fullName": "Ana Ruiz",
                "email": "ana@example.com",
                "applicationCount": 2,
                "latestStatus": "IN_REVIEW",
            }],
            "page": 1,
            "pageSize": 20,
            "totalItems": 1,
            "totalPages": 1,
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let page = app
        .client
        .candidates()
        .list(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.items[0].latest_status, Some(ApplicationStatus::InReview));
}

#[tokio::test]
async fn test_dashboard_statistics() {
    let token = jwt("hr", 3600);
    let app = TestApp::signed_in(UserRole::Admin, &token).await;

    app.mock_with_token(
        "GET",
        "/api/statistics/dashboard",
        &token,
        ResponseTemplate::new(200).set_body_json(json!({
            "totalPositions": 5,
            "openPositions": 3,
            "totalApplications": 20,
            "applicationsByStatus": { "SUBMITTED": 12, "OFFERED": 2, "REJECTED": 6 },
            "totalCandidates": 15,
            "testsTaken": 8,
            "averageScore": 71.5,
        })),
        1,
    )
    .await;

    let stats = app.client.statistics().dashboard().await.unwrap();
    assert_eq!(stats.count_for(ApplicationStatus::Rejected), 6);
    assert_eq!(stats.count_for(ApplicationStatus::Interview), 0);
    assert_eq!(stats.average_score, Some(71.5));
}
