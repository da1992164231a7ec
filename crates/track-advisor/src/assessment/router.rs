use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bank::QuestionView;
use super::domain::{AssessmentSubmission, StudentId};
use super::repository::ResultStore;
use super::service::{AssessmentService, AssessmentServiceError, SubmissionError};
use crate::error::AppError;

/// Header carrying the caller's student id, set by the authentication layer.
pub const STUDENT_ID_HEADER: &str = "x-student-id";

/// Router builder exposing the aptitude assessment endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ResultStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/aptitude/questions",
            get(questions_handler::<R>),
        )
        .route("/api/v1/assessments/aptitude", post(submit_handler::<R>))
        .route(
            "/api/v1/assessments/aptitude/latest",
            get(latest_handler::<R>),
        )
        .with_state(service)
}

/// Authenticated caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity(pub StudentId);

#[async_trait]
impl<S> FromRequestParts<S> for StudentIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let student_id = parts
            .headers
            .get(STUDENT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match student_id {
            Some(id) => Ok(Self(StudentId(id.to_string()))),
            None => {
                let payload = json!({
                    "error": "unauthorized: no student identity on request",
                });
                Err((StatusCode::UNAUTHORIZED, Json(payload)).into_response())
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionsResponse {
    questions_per_domain: usize,
    total: usize,
    questions: Vec<QuestionView>,
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<QuestionsQuery>,
) -> Response
where
    R: ResultStore + 'static,
{
    let instance = service.sample(query.seed);
    let body = QuestionsResponse {
        questions_per_domain: service.questions_per_domain(),
        total: instance.len(),
        questions: instance.views(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    StudentIdentity(student_id): StudentIdentity,
    payload: Result<Json<AssessmentSubmission>, JsonRejection>,
) -> Result<Response, AppError>
where
    R: ResultStore + 'static,
{
    let Json(submission) = payload
        .map_err(|rejection| SubmissionError::MalformedAnswers(rejection.body_text()))
        .map_err(AssessmentServiceError::from)?;

    let view = service.submit(&student_id, submission)?;
    Ok((StatusCode::CREATED, Json(view)).into_response())
}

pub(crate) async fn latest_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    StudentIdentity(student_id): StudentIdentity,
) -> Result<Response, AppError>
where
    R: ResultStore + 'static,
{
    match service.latest(&student_id)? {
        Some(view) => Ok((StatusCode::OK, Json(view)).into_response()),
        None => {
            let payload = json!({
                "error": "no assessment result found for this student",
            });
            Ok((StatusCode::NOT_FOUND, Json(payload)).into_response())
        }
    }
}
