use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::domain::{AssessmentSubmission, Domain};
use crate::assessment::router::{latest_handler, submit_handler, StudentIdentity};
use crate::assessment::{AssessmentService, STUDENT_ID_HEADER};

fn submit_request(student: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::post("/api/v1/assessments/aptitude")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(student) = student {
        builder = builder.header(STUDENT_ID_HEADER, student);
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn latest_request(student: &str) -> Request<Body> {
    Request::get("/api/v1/assessments/aptitude/latest")
        .header(STUDENT_ID_HEADER, student)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn submit_route_returns_created_recommendation() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);
    let answers = serde_json::to_value(correct_answers(Domain::Verbal, 6)).unwrap();

    let response = router
        .oneshot(submit_request(Some("student-001"), json!({ "answers": answers })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["primaryTrack"], json!({ "track": "humss", "score": 18 }));
    assert_eq!(payload["secondaryTrack"]["track"], json!("abm"));
    assert_eq!(
        payload["allScores"],
        json!({ "stem": 6, "abm": 12, "humss": 18, "gas": 12 })
    );
    assert_eq!(payload["domainScores"]["verbal"], json!(6));
    assert_eq!(payload["domainScores"]["abstract"], json!(0));
    assert_eq!(payload["decisionPath"].as_array().map(Vec::len), Some(3));
    assert!(payload["assessmentId"].is_string());
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn submit_route_rejects_empty_answers() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(submit_request(Some("student-001"), json!({ "answers": [] })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("answers are required"));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn submit_route_rejects_missing_answers_field() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(submit_request(Some("student-001"), json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn submit_route_treats_null_answers_as_missing() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(submit_request(Some("student-001"), json!({ "answers": null })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("answers are required"));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn submit_route_rejects_non_list_answers_as_validation_error() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);

    for body in [json!({ "answers": "a,b,c" }), json!({ "answers": { "1": "a" } })] {
        let response = router
            .clone()
            .oneshot(submit_request(Some("student-001"), body))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("answers must be a list"));
    }
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn submit_route_ignores_ids_that_cannot_exist_in_the_bank() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);
    let body = json!({
        "answers": [
            { "questionId": 1, "selectedOptionId": "b" },
            { "questionId": -1, "selectedOptionId": "a" },
            { "questionId": 5_000_000_000_i64, "selectedOptionId": "a" }
        ]
    });

    let response = router
        .oneshot(submit_request(Some("student-001"), body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let records = store.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].domain_scores.total() <= 1);
}

#[tokio::test]
async fn submit_route_requires_student_identity() {
    let (service, store) = build_service();
    let router = assessment_router_with_service(service);
    let answers = serde_json::to_value(correct_answers(Domain::Verbal, 2)).unwrap();

    let response = router
        .oneshot(submit_request(None, json!({ "answers": answers })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn latest_route_returns_not_found_without_history() {
    let (service, _) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(latest_request("student-404"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("no assessment result"));
}

#[tokio::test]
async fn latest_handler_returns_stored_result() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let submitted = service
        .submit(
            &student(),
            AssessmentSubmission {
                answers: correct_answers(Domain::Numerical, 11),
            },
        )
        .expect("submission succeeds");

    let response = latest_handler(State(service), StudentIdentity(student()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessmentId"], json!(submitted.assessment_id));
    assert_eq!(payload["primaryTrack"]["track"], json!("stem"));
    assert_eq!(payload["secondaryTrack"]["track"], json!("abm"));
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(AssessmentService::new(
        standard_bank(),
        Arc::new(UnavailableStore),
        QUESTIONS_PER_DOMAIN,
    ));

    let response = submit_handler(
        State(service),
        StudentIdentity(student()),
        Ok(axum::Json(AssessmentSubmission {
            answers: correct_answers(Domain::Clerical, 3),
        })),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn questions_route_serves_seeded_instance_without_answer_key() {
    let (service, _) = build_service();
    let router = assessment_router_with_service(service);

    let fetch = |router: axum::Router| async move {
        let response = router
            .oneshot(
                Request::get("/api/v1/assessments/aptitude/questions?seed=12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        read_json_body(response).await
    };

    let first = fetch(router.clone()).await;
    let second = fetch(router).await;

    assert_eq!(first, second);
    assert_eq!(first["total"], json!(90));
    assert_eq!(first["questionsPerDomain"], json!(15));
    let questions = first["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 90);
    assert!(questions
        .iter()
        .all(|question| question.get("correctOptionId").is_none()));
}
