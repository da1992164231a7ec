use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{AssessmentId, Domain, StudentId, SubmittedAnswer};
use crate::assessment::repository::{
    AssessmentResult, NewAssessmentResult, RepositoryError, ResultStore,
};
use crate::assessment::{assessment_router, AssessmentService};

pub(super) const QUESTIONS_PER_DOMAIN: usize = 15;

pub(super) fn student() -> StudentId {
    StudentId("student-001".to_string())
}

pub(super) fn standard_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

/// Correct answers for the first `count` questions of a domain.
pub(super) fn correct_answers(domain: Domain, count: usize) -> Vec<SubmittedAnswer> {
    QuestionBank::standard()
        .questions_in(domain)
        .into_iter()
        .take(count)
        .map(|question| SubmittedAnswer::new(question.id, question.correct_option.as_str()))
        .collect()
}

/// Wrong answers for the first `count` questions of a domain.
pub(super) fn wrong_answers(domain: Domain, count: usize) -> Vec<SubmittedAnswer> {
    QuestionBank::standard()
        .questions_in(domain)
        .into_iter()
        .take(count)
        .map(|question| {
            let wrong = crate::assessment::OptionKey::ordered()
                .into_iter()
                .find(|key| *key != question.correct_option)
                .expect("four options");
            SubmittedAnswer::new(question.id, wrong.as_str())
        })
        .collect()
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(standard_bank(), store.clone(), QUESTIONS_PER_DOMAIN);
    (service, store)
}

#[derive(Default)]
pub(super) struct MemoryStore {
    sequence: AtomicU64,
    pub(super) records: Mutex<Vec<AssessmentResult>>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<AssessmentResult> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl ResultStore for MemoryStore {
    fn append(&self, draft: NewAssessmentResult) -> Result<AssessmentResult, RepositoryError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = AssessmentResult::from_draft(
            draft,
            AssessmentId(format!("asm-{sequence:06}")),
            Utc::now(),
            sequence,
        );
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn latest_for(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AssessmentResult>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.student_id == student_id)
            .max_by_key(|record| record.sequence)
            .cloned())
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn append(&self, _draft: NewAssessmentResult) -> Result<AssessmentResult, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for(
        &self,
        _student_id: &StudentId,
    ) -> Result<Option<AssessmentResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(service: AssessmentService<MemoryStore>) -> axum::Router {
    assessment_router(Arc::new(service))
}
