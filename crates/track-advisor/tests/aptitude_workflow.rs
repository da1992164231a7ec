//! End-to-end scenarios for the aptitude assessment workflow.
//!
//! Everything here goes through the public service facade and HTTP router: sample a quiz,
//! answer it, submit, and read the latest recommendation back.

mod common {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use track_advisor::assessment::{
        AssessmentId, AssessmentResult, AssessmentService, NewAssessmentResult, QuestionBank,
        RepositoryError, ResultStore, StudentId,
    };

    #[derive(Default)]
    pub(super) struct VecStore {
        records: Mutex<Vec<AssessmentResult>>,
    }

    impl VecStore {
        pub(super) fn len(&self) -> usize {
            self.records.lock().expect("store mutex poisoned").len()
        }
    }

    impl ResultStore for VecStore {
        fn append(
            &self,
            draft: NewAssessmentResult,
        ) -> Result<AssessmentResult, RepositoryError> {
            let mut guard = self.records.lock().expect("store mutex poisoned");
            let sequence = guard.len() as u64 + 1;
            let record = AssessmentResult::from_draft(
                draft,
                AssessmentId(format!("result-{sequence}")),
                Utc::now(),
                sequence,
            );
            guard.push(record.clone());
            Ok(record)
        }

        fn latest_for(
            &self,
            student_id: &StudentId,
        ) -> Result<Option<AssessmentResult>, RepositoryError> {
            let guard = self.records.lock().expect("store mutex poisoned");
            Ok(guard
                .iter()
                .rev()
                .find(|record| &record.student_id == student_id)
                .cloned())
        }
    }

    pub(super) fn service() -> (Arc<AssessmentService<VecStore>>, Arc<VecStore>) {
        let store = Arc::new(VecStore::default());
        let service = AssessmentService::new(Arc::new(QuestionBank::standard()), store.clone(), 15);
        (Arc::new(service), store)
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use track_advisor::assessment::{
    assessment_router, AssessmentSubmission, Domain, StudentId, SubmittedAnswer, Track,
    STUDENT_ID_HEADER,
};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[test]
fn sampled_quiz_answered_perfectly_in_science_domains_recommends_stem() {
    let (service, store) = common::service();
    let student = StudentId("stu-science".to_string());
    let instance = service.sample(Some(5));

    let answers = instance
        .questions()
        .iter()
        .map(|question| {
            let choice = match question.domain {
                Domain::Numerical | Domain::Scientific | Domain::Abstract => {
                    question.correct_option.as_str().to_string()
                }
                _ => "x".to_string(),
            };
            SubmittedAnswer::new(question.id, choice)
        })
        .collect();

    let view = service
        .submit(&student, AssessmentSubmission { answers })
        .expect("submission succeeds");

    assert_eq!(view.domain_scores.numerical, 15);
    assert_eq!(view.domain_scores.scientific, 15);
    assert_eq!(view.domain_scores.r#abstract, 15);
    assert_eq!(view.domain_scores.verbal, 0);
    assert_eq!(view.primary_track.track, Track::Stem);
    assert_eq!(view.primary_track.score, 135);
    assert_eq!(view.secondary_track.track, Track::Abm);
    assert_eq!(view.secondary_track.score, 105);
    assert!(view.decision_path[0].contains("numerical, scientific, abstract"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn submit_then_fetch_latest_over_http() {
    let (service, store) = common::service();
    let router = assessment_router(service);

    let answers: Vec<Value> = (121..=130)
        .map(|id| json!({ "questionId": id, "selectedOptionId": "zz" }))
        .chain(std::iter::once(
            json!({ "questionId": 99999, "selectedOptionId": "a" }),
        ))
        .collect();

    let submit = router
        .clone()
        .oneshot(
            Request::post("/api/v1/assessments/aptitude")
                .header(header::CONTENT_TYPE, "application/json")
                .header(STUDENT_ID_HEADER, "stu-http")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "answers": answers })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("submit executes");
    assert_eq!(submit.status(), StatusCode::CREATED);
    let submitted = body_json(submit).await;
    assert_eq!(submitted["primaryTrack"], json!({ "track": "stem", "score": 0 }));
    assert_eq!(submitted["secondaryTrack"], json!({ "track": "abm", "score": 0 }));

    let latest = router
        .clone()
        .oneshot(
            Request::get("/api/v1/assessments/aptitude/latest")
                .header(STUDENT_ID_HEADER, "stu-http")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("latest executes");
    assert_eq!(latest.status(), StatusCode::OK);
    assert_eq!(body_json(latest).await, submitted);

    let missing = router
        .oneshot(
            Request::get("/api/v1/assessments/aptitude/latest")
                .header(STUDENT_ID_HEADER, "stu-other")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("latest executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len(), 1);
}
